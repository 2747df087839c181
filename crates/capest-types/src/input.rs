//! Validation of raw numeric inputs.
//!
//! Every estimator accepts already-typed values through its constructors,
//! but the values usually arrive as text (command-line arguments, share
//! query strings). These helpers turn that text into validated numbers and
//! produce the plain-language [`InputError`]s the estimators report.

use crate::InputError;

/// Validates that a value is finite and strictly positive.
///
/// # Errors
///
/// Returns [`InputError::NotPositive`] for zero, negative, NaN or infinite
/// values.
pub fn positive(field: &'static str, value: f64) -> Result<f64, InputError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        tracing::warn!(field, value, "rejected non-positive input");
        Err(InputError::NotPositive { field, value })
    }
}

/// Validates that a rate derived from `value` is still finite.
///
/// Returns `value` unchanged when `derived` is finite.
///
/// # Errors
///
/// Returns [`InputError::TooLarge`] if `derived` overflowed to infinity or NaN.
pub fn finite_derived(field: &'static str, value: f64, derived: f64) -> Result<f64, InputError> {
    if derived.is_finite() {
        Ok(value)
    } else {
        tracing::warn!(field, value, "rejected input too large to estimate");
        Err(InputError::TooLarge { field, value })
    }
}

/// Validates that a count is at least one.
///
/// # Errors
///
/// Returns [`InputError::NotPositive`] for zero.
pub fn positive_count(field: &'static str, value: u32) -> Result<u32, InputError> {
    if value == 0 {
        tracing::warn!(field, "rejected zero count");
        return Err(InputError::NotPositive {
            field,
            value: 0.0,
        });
    }
    Ok(value)
}

/// Parses and validates a strictly positive decimal number.
///
/// Leading and trailing whitespace is ignored.
///
/// # Errors
///
/// Returns [`InputError::NotANumber`] if the text is not a number and
/// [`InputError::NotPositive`] if it is not strictly positive.
pub fn parse_positive(field: &'static str, raw: &str) -> Result<f64, InputError> {
    let trimmed = raw.trim();
    let value: f64 = trimmed.parse().map_err(|_| {
        tracing::warn!(field, raw, "rejected non-numeric input");
        InputError::NotANumber {
            field,
            value: raw.to_string(),
        }
    })?;
    positive(field, value)
}

/// Parses and validates a count of at least one.
///
/// # Errors
///
/// Returns [`InputError::NotACount`] if the text is not a whole number and
/// [`InputError::NotPositive`] for zero.
pub fn parse_count(field: &'static str, raw: &str) -> Result<u32, InputError> {
    let trimmed = raw.trim();
    let value: u32 = trimmed.parse().map_err(|_| {
        tracing::warn!(field, raw, "rejected non-integer input");
        InputError::NotACount {
            field,
            value: raw.to_string(),
        }
    })?;
    positive_count(field, value)
}

/// Validates that a count does not exceed `max`.
///
/// # Errors
///
/// Returns [`InputError::AboveLimit`] if `value > max`.
pub fn at_most(field: &'static str, value: u32, max: u32) -> Result<u32, InputError> {
    if value > max {
        tracing::warn!(field, value, max, "rejected input above limit");
        return Err(InputError::AboveLimit {
            field,
            value: u64::from(value),
            max: u64::from(max),
        });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positive() {
        assert_eq!(parse_positive("volume", "195").unwrap(), 195.0);
        assert_eq!(parse_positive("volume", " 0.5 ").unwrap(), 0.5);
        assert!(matches!(
            parse_positive("volume", "abc"),
            Err(InputError::NotANumber { .. })
        ));
        assert!(matches!(
            parse_positive("volume", "0"),
            Err(InputError::NotPositive { .. })
        ));
        assert!(matches!(
            parse_positive("volume", "-3"),
            Err(InputError::NotPositive { .. })
        ));
        assert!(matches!(
            parse_positive("volume", "NaN"),
            Err(InputError::NotPositive { .. })
        ));
        assert!(matches!(
            parse_positive("volume", "inf"),
            Err(InputError::NotPositive { .. })
        ));
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("clusters", "3").unwrap(), 3);
        assert!(matches!(
            parse_count("clusters", "0"),
            Err(InputError::NotPositive { .. })
        ));
        assert!(matches!(
            parse_count("clusters", "2.5"),
            Err(InputError::NotACount { .. })
        ));
        assert!(matches!(
            parse_count("clusters", "-1"),
            Err(InputError::NotACount { .. })
        ));
        assert!(matches!(
            parse_count("clusters", ""),
            Err(InputError::NotACount { .. })
        ));
    }

    #[test]
    fn test_finite_derived() {
        assert_eq!(finite_derived("volume", 2.0, 4.0).unwrap(), 2.0);
        assert_eq!(
            finite_derived("volume", f64::MAX, f64::MAX * 2.0),
            Err(InputError::TooLarge {
                field: "volume",
                value: f64::MAX
            })
        );
        assert!(finite_derived("volume", 1.0, f64::NAN).is_err());
    }

    #[test]
    fn test_at_most() {
        assert_eq!(at_most("cus", 10, 10).unwrap(), 10);
        assert_eq!(
            at_most("cus", 11, 10),
            Err(InputError::AboveLimit {
                field: "cus",
                value: 11,
                max: 10
            })
        );
    }
}
