//! Error type definitions for key-agreement operations

use thiserror::Error as ThisError;

/// Primary error type for key-agreement operations
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// Key material does not have the structure the scheme requires
    /// (for example a plain public key where an MQV pair is expected)
    #[error("invalid key shape in {context}: {message}")]
    InvalidKeyShape {
        context: &'static str,
        message: String,
    },

    /// Two keys taking part in one computation use different domain parameters
    #[error("key mismatch in {context}: {message}")]
    KeyMismatch {
        context: &'static str,
        message: String,
    },

    /// A session method was called out of order, or more than two parties
    /// were requested
    #[error("{algorithm}: illegal state in {operation}: {message}")]
    IllegalState {
        operation: &'static str,
        algorithm: &'static str,
        message: String,
    },

    /// A parameter object was supplied that the configuration does not accept
    #[error("unsupported parameters for {context}: {message}")]
    UnsupportedParameters {
        context: &'static str,
        message: String,
    },

    /// Invalid key error (scalar out of range, point not on the curve, ...)
    #[error("invalid key in {context}: {message}")]
    InvalidKey {
        context: &'static str,
        message: String,
    },

    /// Invalid length error with context
    #[error("invalid length for {context}: expected {expected}, got {actual}")]
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Invalid parameter error
    #[error("invalid parameter {context}: {message}")]
    InvalidParameter {
        context: &'static str,
        message: String,
    },

    /// No configuration is registered under the requested name
    #[error("unknown key agreement algorithm: {name}")]
    UnknownAlgorithm { name: String },

    /// The agreement produced an unusable value
    #[error("key agreement failed in {context}: {message}")]
    AgreementFailed {
        context: &'static str,
        message: String,
    },
}

/// Result type for key-agreement operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error, keeping its message
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidKeyShape { message, .. } => Self::InvalidKeyShape { context, message },
            Self::KeyMismatch { message, .. } => Self::KeyMismatch { context, message },
            Self::IllegalState {
                algorithm, message, ..
            } => Self::IllegalState {
                operation: context,
                algorithm,
                message,
            },
            Self::UnsupportedParameters { message, .. } => {
                Self::UnsupportedParameters { context, message }
            }
            Self::InvalidKey { message, .. } => Self::InvalidKey { context, message },
            Self::InvalidLength {
                expected, actual, ..
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
            Self::UnknownAlgorithm { name } => Self::UnknownAlgorithm { name },
            Self::AgreementFailed { message, .. } => Self::AgreementFailed { context, message },
        }
    }

    /// Shorthand for an `IllegalState` error
    pub fn illegal_state(
        operation: &'static str,
        algorithm: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self::IllegalState {
            operation,
            algorithm,
            message: message.into(),
        }
    }

    /// Shorthand for an `InvalidKeyShape` error
    pub fn key_shape(context: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidKeyShape {
            context,
            message: message.into(),
        }
    }

    /// Shorthand for a `KeyMismatch` error
    pub fn key_mismatch(context: &'static str, message: impl Into<String>) -> Self {
        Self::KeyMismatch {
            context,
            message: message.into(),
        }
    }

    /// Shorthand for an `UnsupportedParameters` error
    pub fn unsupported(context: &'static str, message: impl Into<String>) -> Self {
        Self::UnsupportedParameters {
            context,
            message: message.into(),
        }
    }

    /// Shorthand for an `InvalidKey` error
    pub fn invalid_key(context: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidKey {
            context,
            message: message.into(),
        }
    }

    /// Shorthand for an `InvalidParameter` error
    pub fn invalid_parameter(context: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            context,
            message: message.into(),
        }
    }
}
