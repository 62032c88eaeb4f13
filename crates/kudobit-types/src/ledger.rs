use borsh::{BorshDeserialize, BorshSchema, BorshSerialize};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{ClassificationResult, CoreError, TierThresholds, classify};

/// Lifetime spend of one buyer. Only ever grows.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    BorshSerialize,
    BorshDeserialize,
    BorshSchema,
    JsonSchema,
)]
pub struct SpendLedger {
    #[serde(with = "crate::amount::u128_string")]
    #[schemars(with = "String")]
    pub total_spent: u128,
    pub purchase_count: u64,
}

impl SpendLedger {
    /// Classifies `amount` against the current total and commits it; the ledger is untouched on error.
    pub fn apply(
        &mut self,
        amount: u128,
        thresholds: &TierThresholds,
    ) -> Result<ClassificationResult, CoreError> {
        let result = classify(self.total_spent, amount, thresholds)?;
        self.total_spent = result.new_total_spent;
        self.purchase_count = self.purchase_count.saturating_add(1);
        Ok(result)
    }
}
