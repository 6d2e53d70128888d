//! # Validation Module
//!
//! Opt-in business rule checks for cart input.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Where Validation Happens                           │
//! │                                                                         │
//! │  Cart::add / update / add_discount                                     │
//! │  └── Permissive: accept any input, merge arithmetically                │
//! │                                                                         │
//! │  Cart::try_add / try_update / try_add_discount / try_create            │
//! │  └── THIS MODULE runs first, then the permissive operation             │
//! │                                                                         │
//! │  Callers pick the entry point that matches their trust in the input.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use cartwheel_core::validation::{validate_customer_id, validate_quantity};
//!
//! assert!(validate_customer_id("customer-a").is_ok());
//! assert!(validate_quantity(0).is_err());
//! ```

use crate::error::ValidationError;
use crate::types::Discount;
use crate::MAX_ITEM_QUANTITY;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a customer identifier.
///
/// ## Rules
/// - Must not be empty or whitespace
/// - At most 64 characters
pub fn validate_customer_id(customer_id: &str) -> ValidationResult<()> {
    let customer_id = customer_id.trim();

    if customer_id.is_empty() {
        return Err(ValidationError::Required {
            field: "customer_id".to_string(),
        });
    }

    if customer_id.len() > 64 {
        return Err(ValidationError::TooLong {
            field: "customer_id".to_string(),
            max: 64,
        });
    }

    Ok(())
}

/// Validates a discount name.
///
/// ## Rules
/// - Must not be empty or whitespace
/// - At most 50 characters
pub fn validate_discount_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "discount name".to_string(),
        });
    }

    if name.len() > 50 {
        return Err(ValidationError::TooLong {
            field: "discount name".to_string(),
            max: 50,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a line quantity.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_ITEM_QUANTITY (999)
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a discount payload.
///
/// ## Rules
/// - Fixed: amount >= 0
/// - Percentage: rate between 0% and 100% (0-10000 bps)
/// - Percentage cap, when set: >= 0
pub fn validate_discount(discount: &Discount) -> ValidationResult<()> {
    match *discount {
        Discount::Fixed { amount } => {
            if amount.is_negative() {
                return Err(ValidationError::OutOfRange {
                    field: "fixed discount".to_string(),
                    min: 0,
                    max: i64::MAX,
                });
            }
        }
        Discount::Percentage { rate, max } => {
            if rate.bps() > 10000 {
                return Err(ValidationError::OutOfRange {
                    field: "percentage".to_string(),
                    min: 0,
                    max: 100,
                });
            }

            if max.is_some_and(|max| max.is_negative()) {
                return Err(ValidationError::OutOfRange {
                    field: "discount cap".to_string(),
                    min: 0,
                    max: i64::MAX,
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::types::Percentage;

    #[test]
    fn test_validate_customer_id() {
        assert!(validate_customer_id("customerA").is_ok());
        assert!(validate_customer_id("550e8400-e29b-41d4-a716-446655440000").is_ok());

        assert!(validate_customer_id("").is_err());
        assert!(validate_customer_id("   ").is_err());
        assert!(validate_customer_id(&"c".repeat(65)).is_err());
    }

    #[test]
    fn test_validate_discount_name() {
        assert!(validate_discount_name("SUMMER10").is_ok());
        assert!(validate_discount_name("").is_err());
        assert!(validate_discount_name(&"D".repeat(51)).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(999).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
        assert!(validate_quantity(1000).is_err());
    }

    #[test]
    fn test_validate_discount() {
        assert!(validate_discount(&Discount::fixed(Money::from_cents(10))).is_ok());
        assert!(validate_discount(&Discount::fixed(Money::zero())).is_ok());
        assert!(validate_discount(&Discount::fixed(Money::from_cents(-10))).is_err());

        assert!(validate_discount(&Discount::percentage(Percentage::from_percent(100))).is_ok());
        assert!(validate_discount(&Discount::percentage(Percentage::from_percent(101))).is_err());

        let negative_cap =
            Discount::capped_percentage(Percentage::from_percent(10), Money::from_cents(-1));
        assert!(validate_discount(&negative_cap).is_err());
    }
}
