//! Validation utilities for voice commands
//!
//! Checks the assistant applies before emitting a UI action.

use rust_decimal::Decimal;

use crate::models::Drug;

// ============================================================================
// Sale Validations
// ============================================================================

/// Validate a discount percentage is between 0 and 100
pub fn validate_discount_percent(discount: Decimal) -> Result<(), &'static str> {
    if discount < Decimal::ZERO {
        return Err("Discount cannot be negative");
    }
    if discount > Decimal::from(100) {
        return Err("Discount cannot exceed 100%");
    }
    Ok(())
}

/// Validate that sold plus bonus units fit the stock on hand
pub fn validate_stock_sufficient(
    drug: &Drug,
    quantity: u32,
    bonus_quantity: u32,
) -> Result<(), &'static str> {
    let requested = u64::from(quantity) + u64::from(bonus_quantity);
    if requested > drug.total_stock() {
        return Err("Requested quantity exceeds stock on hand");
    }
    Ok(())
}

/// Validate a payment or charge amount
pub fn validate_amount(amount: Decimal) -> Result<(), &'static str> {
    if amount < Decimal::ZERO {
        return Err("Amount cannot be negative");
    }
    Ok(())
}
