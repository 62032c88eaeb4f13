use crate::guards::composite_key;
use crate::validation::*;
use crate::*;

#[test]
fn product_name_bounds() {
    assert!(validate_product_name("Beat tape").is_ok());
    assert!(validate_product_name("   ").is_err());
    assert!(validate_product_name(&"x".repeat(MAX_PRODUCT_NAME_LEN)).is_ok());
    assert!(validate_product_name(&"x".repeat(MAX_PRODUCT_NAME_LEN + 1)).is_err());
}

#[test]
fn reference_bounds() {
    assert!(validate_reference(None).is_ok());
    assert!(validate_reference(Some("bafybeigdyrzt5")).is_ok());
    assert!(validate_reference(Some(&"r".repeat(MAX_REFERENCE_LEN + 1))).is_err());
}

#[test]
fn royalty_cap_is_configuration_error() {
    assert!(validate_royalty_bps(MAX_ROYALTY_BPS).is_ok());
    assert!(matches!(
        validate_royalty_bps(MAX_ROYALTY_BPS + 1),
        Err(StoreError::InvalidConfiguration(_))
    ));
}

#[test]
fn zero_price_is_invalid_amount() {
    assert!(matches!(validate_price(0), Err(StoreError::InvalidAmount(_))));
    assert!(validate_price(1).is_ok());
}

#[test]
fn page_bounds_clamps_limit() {
    assert_eq!(page_bounds(None, None), (0, DEFAULT_PAGE_LIMIT as usize));
    assert_eq!(page_bounds(Some(5), Some(10)), (5, 10));
    assert_eq!(page_bounds(None, Some(10_000)), (0, MAX_PAGE_LIMIT as usize));
}

#[test]
fn composite_keys_use_delimiter() {
    assert_eq!(composite_key(7u64, "bob.near"), "7:bob.near");
}

#[test]
fn core_errors_keep_their_kind() {
    let err: StoreError = kudobit_types::CoreError::InvalidAmount("zero".into()).into();
    assert_eq!(err, StoreError::InvalidAmount("zero".into()));
    assert_eq!(err.to_string(), "Invalid amount: zero");
}

#[test]
fn store_errors_display_with_kind_prefix() {
    let cases = [
        (StoreError::InvalidConfiguration("x".into()), "Invalid configuration: x"),
        (StoreError::only_owner("contract owner"), "Unauthorized: Only contract owner can perform this action"),
        (StoreError::InvalidInput("x".into()), "Invalid input: x"),
        (StoreError::product_not_found(), "Not found: Product not found"),
        (StoreError::InvalidState("x".into()), "Invalid state: x"),
        (StoreError::InsufficientDeposit("x".into()), "Insufficient deposit: x"),
    ];
    for (err, shown) in cases {
        assert_eq!(err.to_string(), shown);
    }
}
