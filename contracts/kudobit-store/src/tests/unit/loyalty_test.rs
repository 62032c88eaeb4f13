use crate::tests::test_utils::*;
use crate::*;

// --- Configuration ---

#[test]
fn init_stores_thresholds_and_policy() {
    let contract = new_contract_with_policy(BadgePolicy::HighestOnly);
    let cfg = contract.get_loyalty_config();
    assert_eq!(cfg.thresholds, test_thresholds());
    assert_eq!(cfg.badge_policy, BadgePolicy::HighestOnly);
}

#[test]
fn init_defaults_to_usdc_thresholds_and_every_milestone() {
    near_sdk::testing_env!(context(owner()).build());
    let contract = Contract::new(owner(), usdc(), None, None);
    let cfg = contract.get_loyalty_config();
    assert_eq!(cfg.thresholds, TierThresholds::default());
    assert_eq!(cfg.thresholds.bronze, 10_000_000);
    assert_eq!(cfg.badge_policy, BadgePolicy::EveryMilestone);
}

#[test]
#[should_panic(expected = "Invalid configuration")]
fn init_rejects_non_increasing_thresholds() {
    near_sdk::testing_env!(context(owner()).build());
    let thresholds = TierThresholds {
        bronze: 100,
        silver: 100,
        gold: 2_000,
        diamond: 10_000,
    };
    Contract::new(owner(), usdc(), Some(thresholds), None);
}

// --- classify_purchase (dry run) ---

#[test]
fn classify_purchase_reports_without_writing() {
    let contract = new_contract();

    let result = contract.classify_purchase(buyer(), U128(150)).unwrap();
    assert_eq!(result.new_total_spent, 150);
    assert_eq!(result.newly_earned_tiers, vec![LoyaltyTier::Bronze]);
    assert_eq!(result.current_tier, LoyaltyTier::Bronze);

    assert_eq!(contract.get_spend_ledger(buyer()), SpendLedger::default());
    assert_eq!(contract.get_badge_balance(buyer(), LoyaltyTier::Bronze), 0);
}

#[test]
fn classify_purchase_builds_on_recorded_spend() {
    let mut contract = new_contract();
    let id = list_test_product(&mut contract, 150);
    buy(&mut contract, buyer(), id);

    let result = contract.classify_purchase(buyer(), U128(400)).unwrap();
    assert_eq!(result.new_total_spent, 550);
    assert_eq!(result.newly_earned_tiers, vec![LoyaltyTier::Silver]);
    assert_eq!(result.previous_tier, LoyaltyTier::Bronze);
}

#[test]
fn classify_purchase_boundary_is_inclusive() {
    let mut contract = new_contract();
    let id = list_test_product(&mut contract, 99);
    buy(&mut contract, buyer(), id);

    let result = contract.classify_purchase(buyer(), U128(1)).unwrap();
    assert_eq!(result.newly_earned_tiers, vec![LoyaltyTier::Bronze]);
}

#[test]
fn classify_purchase_zero_amount_rejected() {
    let contract = new_contract();
    let err = contract.classify_purchase(buyer(), U128(0)).unwrap_err();
    assert!(matches!(err, StoreError::InvalidAmount(_)));
}

// --- get_loyalty_status ---

#[test]
fn status_of_new_account() {
    let contract = new_contract();
    let status = contract.get_loyalty_status(buyer());
    assert_eq!(status.total_spent, U128(0));
    assert_eq!(status.purchase_count, 0);
    assert_eq!(status.current_tier, LoyaltyTier::None);
    assert_eq!(status.next_tier, Some(LoyaltyTier::Bronze));
    assert_eq!(status.amount_to_next_tier, Some(U128(100)));
}

#[test]
fn status_tracks_progress_to_next_tier() {
    let mut contract = new_contract();
    let id = list_test_product(&mut contract, 150);
    buy(&mut contract, buyer(), id);

    let status = contract.get_loyalty_status(buyer());
    assert_eq!(status.current_tier, LoyaltyTier::Bronze);
    assert_eq!(status.next_tier, Some(LoyaltyTier::Silver));
    assert_eq!(status.amount_to_next_tier, Some(U128(350)));
}

#[test]
fn status_at_diamond_has_no_next_tier() {
    let mut contract = new_contract();
    let id = list_test_product(&mut contract, 12_000);
    buy(&mut contract, buyer(), id);

    let status = contract.get_loyalty_status(buyer());
    assert_eq!(status.current_tier, LoyaltyTier::Diamond);
    assert_eq!(status.next_tier, None);
    assert_eq!(status.amount_to_next_tier, None);
}

// --- Badge ledger ---

#[test]
fn each_tier_minted_once_across_many_purchases() {
    let mut contract = new_contract();
    let id = list_test_product(&mut contract, 700);
    for _ in 0..20 {
        buy(&mut contract, buyer(), id);
    }

    assert_eq!(contract.get_spend_ledger(buyer()).total_spent, 14_000);
    assert_eq!(contract.get_spend_ledger(buyer()).purchase_count, 20);
    for tier in LoyaltyTier::EARNABLE {
        assert_eq!(contract.get_badge_balance(buyer(), tier), 1, "{tier}");
    }
}

#[test]
fn badges_are_per_account() {
    let mut contract = new_contract();
    let id = list_test_product(&mut contract, 600);
    buy(&mut contract, buyer(), id);

    assert_eq!(contract.get_badges(buyer()).len(), 2);
    assert!(contract.get_badges(seller()).is_empty());
}
