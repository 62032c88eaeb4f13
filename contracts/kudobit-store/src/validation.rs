use crate::*;

pub(crate) fn validate_product_name(name: &str) -> Result<(), StoreError> {
    let trimmed = name.trim();
    if trimmed.is_empty() || name.len() > MAX_PRODUCT_NAME_LEN {
        return Err(StoreError::InvalidInput(format!(
            "Product name must be 1-{} bytes",
            MAX_PRODUCT_NAME_LEN
        )));
    }
    Ok(())
}

pub(crate) fn validate_reference(reference: Option<&str>) -> Result<(), StoreError> {
    if let Some(r) = reference {
        if r.len() > MAX_REFERENCE_LEN {
            return Err(StoreError::InvalidInput(format!(
                "Reference exceeds max length of {} bytes",
                MAX_REFERENCE_LEN
            )));
        }
    }
    Ok(())
}

pub(crate) fn validate_royalty_bps(royalty_bps: u16) -> Result<(), StoreError> {
    if royalty_bps > MAX_ROYALTY_BPS {
        return Err(StoreError::InvalidConfiguration(format!(
            "Royalty {} bps exceeds max {} bps (50%)",
            royalty_bps, MAX_ROYALTY_BPS
        )));
    }
    Ok(())
}

pub(crate) fn validate_price(price: u128) -> Result<(), StoreError> {
    if price == 0 {
        return Err(StoreError::InvalidAmount("Price must be positive".into()));
    }
    Ok(())
}

pub(crate) fn page_bounds(from_index: Option<u32>, limit: Option<u32>) -> (usize, usize) {
    let start = from_index.unwrap_or(0) as usize;
    let limit = limit.unwrap_or(DEFAULT_PAGE_LIMIT).min(MAX_PAGE_LIMIT) as usize;
    (start, limit)
}
