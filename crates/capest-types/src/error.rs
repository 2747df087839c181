//! Error types for capest.

use thiserror::Error;

/// Result type alias for capest operations.
pub type Result<T> = std::result::Result<T, CapestError>;

/// Errors that can occur while producing an estimate.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CapestError {
    /// A required input was missing, non-numeric or out of range.
    #[error(transparent)]
    InvalidInput(#[from] InputError),

    /// An operation was attempted before the estimate it builds on.
    #[error("Please {step} first.")]
    MissingPrerequisite {
        /// The step that has to run first, in plain language.
        step: &'static str,
    },
}

impl CapestError {
    /// Returns true if this error was caused by a rejected input value.
    #[must_use]
    pub const fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}

/// Error for rejected input values.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    /// The value could not be parsed as a number.
    #[error("Please enter a valid {field}: '{value}' is not a number.")]
    NotANumber {
        /// Human-readable field name.
        field: &'static str,
        /// The raw value that was rejected.
        value: String,
    },

    /// The value parsed but is zero, negative or not finite.
    #[error("Please enter a valid {field}: it must be greater than 0 (got {value}).")]
    NotPositive {
        /// Human-readable field name.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// The value could not be parsed as a whole number.
    #[error("Please enter a valid {field}: '{value}' is not a whole number.")]
    NotACount {
        /// Human-readable field name.
        field: &'static str,
        /// The raw value that was rejected.
        value: String,
    },

    /// The value is above the largest allowed value.
    #[error("Please enter a valid {field}: it must be at most {max} (got {value}).")]
    AboveLimit {
        /// Human-readable field name.
        field: &'static str,
        /// The rejected value.
        value: u64,
        /// The largest accepted value.
        max: u64,
    },

    /// The value is valid but too large for the estimate to be counted.
    #[error("Please enter a valid {field}: {value} is too large to estimate.")]
    TooLarge {
        /// Human-readable field name.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// The value is not one of the accepted choices.
    #[error("Please enter a valid {field}: '{value}' is not one of {expected}.")]
    UnknownChoice {
        /// Human-readable field name.
        field: &'static str,
        /// The raw value that was rejected.
        value: String,
        /// The accepted choices.
        expected: &'static str,
    },
}

impl InputError {
    /// Returns the field the error refers to.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::NotANumber { field, .. }
            | Self::NotPositive { field, .. }
            | Self::NotACount { field, .. }
            | Self::AboveLimit { field, .. }
            | Self::TooLarge { field, .. }
            | Self::UnknownChoice { field, .. } => field,
        }
    }
}
