use crate::guards::composite_key;
use crate::*;

pub(crate) fn badge_key(account_id: &AccountId, tier: LoyaltyTier) -> String {
    composite_key(account_id, tier.as_str())
}

#[near]
impl Contract {
    pub fn get_badge_balance(&self, account_id: AccountId, tier: LoyaltyTier) -> u64 {
        self.badge_balances
            .get(&badge_key(&account_id, tier))
            .copied()
            .unwrap_or(0)
    }

    /// Non-zero balances, ascending by tier.
    pub fn get_badges(&self, account_id: AccountId) -> Vec<BadgeBalanceView> {
        LoyaltyTier::EARNABLE
            .iter()
            .filter_map(|tier| {
                let balance = self.get_badge_balance(account_id.clone(), *tier);
                (balance > 0).then_some(BadgeBalanceView {
                    tier: *tier,
                    balance,
                })
            })
            .collect()
    }
}

impl Contract {
    // Balances are never decremented here; transfers and burns live outside the store.
    pub(crate) fn mint_badge(&mut self, account_id: &AccountId, tier: LoyaltyTier, amount: u64) -> u64 {
        let key = badge_key(account_id, tier);
        let balance = self.badge_balances.get(&key).copied().unwrap_or(0);
        let new_balance = balance.saturating_add(amount);
        self.badge_balances.insert(key, new_balance);
        events::emit_badge_minted(account_id, tier, amount, new_balance);
        new_balance
    }
}
