//! Name validation shared by the customer and coffee entities.

use thiserror::Error;

/// A name whose length falls outside its allowed range.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("name must be between {min} and {max} characters (got {actual})")]
pub struct ValidationError {
    /// Minimum allowed length, inclusive.
    pub min: usize,

    /// Maximum allowed length, inclusive.
    pub max: usize,

    /// Length of the rejected value.
    pub actual: usize,
}

/// Checks that `name` is between `min` and `max` characters long, inclusive.
///
/// Length is counted in characters, not bytes, so `"Café"` has length 4.
pub fn validate_name(name: &str, min: usize, max: usize) -> Result<(), ValidationError> {
    let actual = name.chars().count();
    if (min..=max).contains(&actual) {
        Ok(())
    } else {
        Err(ValidationError { min, max, actual })
    }
}
