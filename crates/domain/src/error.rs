//! Domain error types.

use common::{CoffeeId, CustomerId};
use thiserror::Error;

use crate::validation::ValidationError;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Errors that can occur during domain operations.
///
/// Every failure is raised before any state changes, so a rejected operation
/// never leaves an entity partially updated or an order partially linked.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// A name failed its length constraint.
    #[error("Invalid name: {0}")]
    InvalidName(#[from] ValidationError),

    /// A field that is fixed at creation was assigned again.
    #[error("{field} cannot be changed after creation")]
    ImmutableField { field: &'static str },

    /// The customer reference does not denote a customer of this shop.
    #[error("Customer not found: {0}")]
    UnknownCustomer(CustomerId),

    /// The coffee reference does not denote a coffee of this shop.
    #[error("Coffee not found: {0}")]
    UnknownCoffee(CoffeeId),

    /// Price is not a number or lies outside the allowed range.
    #[error("Invalid price: {price} (must be between {min} and {max})")]
    PriceOutOfRange { price: f64, min: f64, max: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_converts() {
        let err: DomainError = ValidationError {
            min: 3,
            max: 50,
            actual: 2,
        }
        .into();
        assert!(matches!(err, DomainError::InvalidName(ref e) if e.actual == 2));
    }

    #[test]
    fn test_immutable_field_message() {
        let err = DomainError::ImmutableField {
            field: "coffee name",
        };
        assert_eq!(err.to_string(), "coffee name cannot be changed after creation");
    }
}
