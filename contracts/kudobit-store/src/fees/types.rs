use crate::*;

#[near(serializers = [borsh, json])]
#[derive(Clone, Debug, PartialEq)]
pub struct FeeConfig {
    /// Platform cut of every resale.
    pub platform_fee_bps: u16,
    /// Creator royalty for products that do not set their own.
    pub default_royalty_bps: u16,
    /// Platform cut of primary sales.
    pub primary_fee_bps: u16,
}

impl Default for FeeConfig {
    fn default() -> Self {
        Self {
            platform_fee_bps: PLATFORM_FEE_BPS,
            default_royalty_bps: DEFAULT_CREATOR_ROYALTY_BPS,
            primary_fee_bps: DEFAULT_PRIMARY_FEE_BPS,
        }
    }
}

impl FeeConfig {
    pub fn validate_patch(&self, patch: &FeeConfigUpdate) -> Result<(), StoreError> {
        let platform = patch.platform_fee_bps.unwrap_or(self.platform_fee_bps);
        let royalty = patch.default_royalty_bps.unwrap_or(self.default_royalty_bps);
        let primary = patch.primary_fee_bps.unwrap_or(self.primary_fee_bps);

        if platform > MAX_PLATFORM_FEE_BPS {
            return Err(StoreError::InvalidConfiguration(format!(
                "platform_fee_bps must be <= {MAX_PLATFORM_FEE_BPS}"
            )));
        }
        if primary > MAX_PRIMARY_FEE_BPS {
            return Err(StoreError::InvalidConfiguration(format!(
                "primary_fee_bps must be <= {MAX_PRIMARY_FEE_BPS}"
            )));
        }
        crate::validation::validate_royalty_bps(royalty)?;
        Ok(())
    }

    pub fn apply_patch(&mut self, patch: &FeeConfigUpdate) {
        if let Some(v) = patch.platform_fee_bps {
            self.platform_fee_bps = v;
        }
        if let Some(v) = patch.default_royalty_bps {
            self.default_royalty_bps = v;
        }
        if let Some(v) = patch.primary_fee_bps {
            self.primary_fee_bps = v;
        }
    }
}

#[near(serializers = [json])]
#[derive(Clone, Default)]
pub struct FeeConfigUpdate {
    pub platform_fee_bps: Option<u16>,
    pub default_royalty_bps: Option<u16>,
    pub primary_fee_bps: Option<u16>,
}
