//! Error handling for curve and derivation primitives

use std::borrow::Cow;

use ecka_api::Error as CoreError;
use thiserror::Error as ThisError;

pub mod validate;

/// The error type for primitive operations
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// Parameter validation error
    #[error("invalid parameter '{name}': {reason}")]
    Parameter {
        /// Name of the invalid parameter
        name: Cow<'static, str>,
        /// Reason why the parameter is invalid
        reason: Cow<'static, str>,
    },

    /// Length validation error
    #[error("invalid length for {context}: expected {expected}, got {actual}")]
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// A point is not on the curve it is used with
    #[error("invalid point on {curve}: {reason}")]
    InvalidPoint {
        /// Curve the point was checked against
        curve: &'static str,
        /// Why the point was rejected
        reason: &'static str,
    },

    /// Processing error during an arithmetic or derivation step
    #[error("processing error in {operation}: {details}")]
    Processing {
        /// Operation that failed
        operation: &'static str,
        /// Additional details about the failure
        details: &'static str,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param<N: Into<Cow<'static, str>>, R: Into<Cow<'static, str>>>(
        name: N,
        reason: R,
    ) -> Self {
        Error::Parameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for primitive operations
pub type Result<T> = core::result::Result<T, Error>;

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => match name {
                Cow::Borrowed(context) => CoreError::InvalidParameter {
                    context,
                    message: reason.into_owned(),
                },
                Cow::Owned(name) => CoreError::InvalidParameter {
                    context: "primitive parameter",
                    message: format!("{name}: {reason}"),
                },
            },
            Error::Length {
                context,
                expected,
                actual,
            } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::InvalidPoint { curve, reason } => CoreError::InvalidKey {
                context: curve,
                message: reason.to_string(),
            },
            Error::Processing { operation, details } => CoreError::AgreementFailed {
                context: operation,
                message: details.to_string(),
            },
        }
    }
}
