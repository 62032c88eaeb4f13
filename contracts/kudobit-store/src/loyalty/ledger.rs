use crate::*;

impl Contract {
    /// Classifies `amount` against the buyer's ledger without writing anything.
    pub(crate) fn preview_spend(
        &self,
        buyer_id: &AccountId,
        amount: u128,
    ) -> Result<(SpendLedger, ClassificationResult), StoreError> {
        let mut ledger = self.spend_ledgers.get(buyer_id).copied().unwrap_or_default();
        let result = ledger.apply(amount, &self.loyalty_config.thresholds)?;
        Ok((ledger, result))
    }

    /// Persists the updated ledger and mints the badges the policy selects. Returns the minted tiers.
    pub(crate) fn commit_spend(
        &mut self,
        buyer_id: &AccountId,
        ledger: SpendLedger,
        result: &ClassificationResult,
    ) -> Vec<LoyaltyTier> {
        self.spend_ledgers.insert(buyer_id.clone(), ledger);

        let minted = self.loyalty_config.badge_policy.badges_to_mint(result);
        for tier in &minted {
            self.mint_badge(buyer_id, *tier, BADGE_MINT_AMOUNT);
        }

        if result.crossed_any() {
            events::emit_tier_changed(
                buyer_id,
                result.previous_tier,
                result.current_tier,
                result.new_total_spent,
                &result.newly_earned_tiers,
            );
        }
        minted
    }
}
