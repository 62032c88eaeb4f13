//! Payout recovery. Unit tests never run the `ft_transfer` receipt, so
//! `promise_results_count() == 0` and the callback always takes the failure path.

use crate::tests::test_utils::*;
use crate::*;
use near_sdk::testing_env;

fn store() -> AccountId {
    "store.near".parse().unwrap()
}

#[test]
fn failed_payout_credits_unclaimed() {
    let mut contract = new_contract();

    testing_env!(context(store()).build());
    let ok = contract.on_payout_resolved(creator(), U128(925));

    assert!(!ok);
    assert_eq!(contract.get_unclaimed(creator()), U128(925));
    let ev = &events_of("PAYOUT_UPDATE")[0];
    assert_eq!(ev["operation"], "payout_failed");
    assert_eq!(ev["amount"], "925");
    assert_eq!(ev["unclaimed_balance"], "925");
}

#[test]
fn failed_payouts_accumulate() {
    let mut contract = new_contract();

    testing_env!(context(store()).build());
    contract.on_payout_resolved(creator(), U128(100));
    contract.on_payout_resolved(creator(), U128(50));

    assert_eq!(contract.get_unclaimed(creator()), U128(150));
    assert_eq!(contract.get_unclaimed(seller()), U128(0));
}

#[test]
fn claim_unclaimed_clears_balance() {
    let mut contract = new_contract();
    testing_env!(context(store()).build());
    contract.on_payout_resolved(creator(), U128(300));

    testing_env!(context(creator()).build());
    assert!(contract.claim_unclaimed().is_ok());

    assert_eq!(contract.get_unclaimed(creator()), U128(0));
    let ev = &events_of("PAYOUT_UPDATE")[0];
    assert_eq!(ev["operation"], "claim_unclaimed");
    assert_eq!(ev["amount"], "300");
}

#[test]
fn claim_without_balance_not_found() {
    let mut contract = new_contract();
    testing_env!(context(creator()).build());
    let err = contract.claim_unclaimed().err().unwrap();
    assert!(matches!(err, StoreError::NotFound(_)));
}

#[test]
fn purchases_do_not_touch_unclaimed() {
    let mut contract = new_contract();
    let id = list_test_product(&mut contract, 1_000);
    buy(&mut contract, buyer(), id);

    assert_eq!(contract.get_unclaimed(creator()), U128(0));
}
