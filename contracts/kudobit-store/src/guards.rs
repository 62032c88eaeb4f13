use crate::*;

pub(crate) fn hash_account_id(account_id: &AccountId) -> Vec<u8> {
    env::sha256(account_id.as_bytes())
}

pub(crate) fn check_one_yocto() -> Result<(), StoreError> {
    if env::attached_deposit().as_yoctonear() != ONE_YOCTO.as_yoctonear() {
        return Err(StoreError::InsufficientDeposit(
            "Requires attached deposit of exactly 1 yoctoNEAR".into(),
        ));
    }
    Ok(())
}

pub(crate) fn composite_key(prefix: impl std::fmt::Display, suffix: impl std::fmt::Display) -> String {
    format!("{}{}{}", prefix, KEY_DELIMITER, suffix)
}

impl Contract {
    pub(crate) fn check_contract_owner(&self, actor_id: &AccountId) -> Result<(), StoreError> {
        if actor_id != &self.owner_id {
            return Err(StoreError::only_owner("contract owner"));
        }
        Ok(())
    }
}
