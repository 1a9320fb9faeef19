//! Input gating for address lookups.
//!
//! Rules are evaluated in a fixed order and the first failing rule wins:
//!
//! 1. Both fields present and non-empty
//! 2. Postcode at least [`MIN_POSTCODE_LENGTH`] UTF-16 code units
//! 3. Postcode is a non-negative integer
//! 4. House number is a non-negative integer
//!
//! The reason strings are consumed verbatim by external clients and must not
//! be reworded.

use thiserror::Error;

/// Minimum postcode length, counted in UTF-16 code units as browsers do.
pub const MIN_POSTCODE_LENGTH: usize = 4;

/// Reasons a lookup request is rejected before reaching the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Postcode and street number fields mandatory!")]
    MissingFields,
    #[error("Postcode must be at least 4 digits!")]
    PostcodeTooShort,
    #[error("Postcode must be all digits and non negative!")]
    PostcodeNotNumeric,
    #[error("Street Number must be all digits and non negative!")]
    StreetNumberNotNumeric,
}

/// A lookup request that passed every rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupQuery<'a> {
    pub postcode: &'a str,
    pub house_number: &'a str,
}

/// Validate raw query parameters.
///
/// Inputs are never trimmed or otherwise normalized; the returned query
/// borrows them unchanged.
///
/// # Errors
///
/// Returns the first [`ValidationError`] whose rule fails.
///
/// # Example
///
/// ```
/// use address_book_core::{ValidationError, validate_lookup};
///
/// assert!(validate_lookup(Some("1234"), Some("5")).is_ok());
/// assert_eq!(
///     validate_lookup(Some("12a3"), Some("5")),
///     Err(ValidationError::PostcodeNotNumeric)
/// );
/// ```
pub fn validate_lookup<'a>(
    postcode: Option<&'a str>,
    house_number: Option<&'a str>,
) -> Result<LookupQuery<'a>, ValidationError> {
    let (Some(postcode), Some(house_number)) = (
        postcode.filter(|s| !s.is_empty()),
        house_number.filter(|s| !s.is_empty()),
    ) else {
        return Err(ValidationError::MissingFields);
    };

    if postcode.encode_utf16().count() < MIN_POSTCODE_LENGTH {
        return Err(ValidationError::PostcodeTooShort);
    }

    if !is_non_negative_integer(postcode) {
        return Err(ValidationError::PostcodeNotNumeric);
    }

    if !is_non_negative_integer(house_number) {
        return Err(ValidationError::StreetNumberNotNumeric);
    }

    Ok(LookupQuery {
        postcode,
        house_number,
    })
}

/// Whether `value` reads as a finite, integral number that is not negative.
///
/// Surrounding whitespace is ignored and decimal or exponent notation is
/// accepted when the value is integral (`"1.0"`, `"1e3"`). Blank strings are
/// rejected rather than read as zero, and so are radix-prefixed literals
/// (`"0x1f"`, `"0b101"`, `"0o7"`).
#[must_use]
pub fn is_non_negative_integer(value: &str) -> bool {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return false;
    }

    trimmed
        .parse::<f64>()
        .is_ok_and(|n| n.is_finite() && n.fract() == 0.0 && n >= 0.0)
}
