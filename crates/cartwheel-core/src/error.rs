//! # Error Types
//!
//! Error types for cartwheel-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  CoreError        - Strict cart operations, snapshot export            │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  The permissive cart operations (add, update, remove, total, ...)      │
//! │  never return errors. Only the `try_*` entry points and snapshot       │
//! │  serialization do.                                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Errors raised by the strict cart entry points and snapshot export.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Adding a new product line would exceed the cart line limit.
    #[error("Cart cannot have more than {max} items")]
    CartTooLarge { max: usize },

    /// Merging quantities would push a line past the maximum.
    ///
    /// ## When This Occurs
    /// ```text
    /// Cart holds COKE x 998
    ///      │
    ///      ▼
    /// try_add(COKE x 5)
    ///      │
    ///      ▼
    /// QuantityTooLarge { product_id: "COKE", requested: 1003, max: 999 }
    /// ```
    #[error("Quantity {requested} for {product_id} exceeds maximum allowed ({max})")]
    QuantityTooLarge {
        product_id: String,
        requested: i64,
        max: i64,
    },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Snapshot could not be serialized.
    #[error("Snapshot serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },
}

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::QuantityTooLarge {
            product_id: "COKE-330".to_string(),
            requested: 1003,
            max: 999,
        };
        assert_eq!(
            err.to_string(),
            "Quantity 1003 for COKE-330 exceeds maximum allowed (999)"
        );

        let err = CoreError::CartTooLarge { max: 100 };
        assert_eq!(err.to_string(), "Cart cannot have more than 100 items");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "customer_id".to_string(),
        };
        assert_eq!(err.to_string(), "customer_id is required");

        let err = ValidationError::OutOfRange {
            field: "percentage".to_string(),
            min: 0,
            max: 100,
        };
        assert_eq!(err.to_string(), "percentage must be between 0 and 100");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
