//! Error types for PayPal native operations.
//!
//! Every failure the library can produce maps onto a single [`PayPalError`]
//! value with a stable numeric [`PayPalErrorCode`] for FFI callers.

use std::fmt;

/// Error codes for FFI and mobile integration.
///
/// The first block mirrors the error types the checkout client has always
/// reported under [`PayPalError::DOMAIN`]; the rest are library specific.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum PayPalErrorCode {
    /// Unknown error
    Unknown = 0,
    /// PayPal is disabled in configuration
    Disabled = 1,
    /// Invalid request, e.g. missing PayPal request
    InvalidRequest = 2,
    /// SDK is integrated incorrectly
    Integration = 3,
    /// Payment flow was canceled by the user
    Canceled = 4,
    /// Tokenization response carried no nonce
    MissingRequiredToken = 100,
    /// Transport/network layer error
    Transport = 2000,
    /// Invalid request/data
    InvalidData = 5000,
    /// Serialization error
    Serialization = 5002,
}

/// Error type for PayPal native operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayPalError {
    /// The tokenization response did not carry a usable nonce.
    MissingRequiredToken,

    /// Unexpected gateway or configuration state.
    Unknown(String),

    /// PayPal is not available for this merchant.
    Disabled {
        /// Human readable description
        message: String,
        /// Optional hint on how to enable PayPal
        recovery_suggestion: Option<String>,
    },

    /// The request could not be serviced as given.
    InvalidRequest(String),

    /// The SDK has been wired up incorrectly by the host application.
    Integration(String),

    /// The payer left the flow before it finished.
    Canceled,

    /// Transport/network layer error reported by the host API client.
    Transport(String),

    /// Invalid data provided.
    InvalidData {
        /// Field or parameter name
        field: String,
        /// Reason for invalidity
        reason: String,
    },

    /// Serialization/deserialization error.
    Serialization(String),
}

impl PayPalError {
    /// Error domain reported alongside [`PayPalErrorCode`] values.
    pub const DOMAIN: &'static str = "com.braintreepayments.BTPayPalNativeClientErrorDomain";

    /// Get the error code for FFI/mobile integration.
    pub fn code(&self) -> PayPalErrorCode {
        match self {
            Self::MissingRequiredToken => PayPalErrorCode::MissingRequiredToken,
            Self::Unknown(_) => PayPalErrorCode::Unknown,
            Self::Disabled { .. } => PayPalErrorCode::Disabled,
            Self::InvalidRequest(_) => PayPalErrorCode::InvalidRequest,
            Self::Integration(_) => PayPalErrorCode::Integration,
            Self::Canceled => PayPalErrorCode::Canceled,
            Self::Transport(_) => PayPalErrorCode::Transport,
            Self::InvalidData { .. } => PayPalErrorCode::InvalidData,
            Self::Serialization(_) => PayPalErrorCode::Serialization,
        }
    }

    /// Get the error message as an owned String (useful for FFI).
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Recovery hint for the merchant, if one exists.
    pub fn recovery_suggestion(&self) -> Option<&str> {
        match self {
            Self::Disabled {
                recovery_suggestion,
                ..
            } => recovery_suggestion.as_deref(),
            _ => None,
        }
    }

    /// Returns true if this error is potentially recoverable by retrying.
    ///
    /// A missing token is never retryable: the tokenization itself failed
    /// upstream and has already been reported there.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Create a transport error from any error type.
    pub fn transport<E: std::error::Error>(err: E) -> Self {
        Self::Transport(err.to_string())
    }

    /// Create an invalid data error.
    pub fn invalid_data(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidData {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create a disabled error with an optional recovery hint.
    pub fn disabled(message: impl Into<String>, recovery_suggestion: Option<&str>) -> Self {
        Self::Disabled {
            message: message.into(),
            recovery_suggestion: recovery_suggestion.map(str::to_string),
        }
    }
}

impl fmt::Display for PayPalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingRequiredToken => {
                write!(f, "tokenization response is missing the required nonce")
            }
            Self::Unknown(msg) => write!(f, "{}", msg),
            Self::Disabled { message, .. } => write!(f, "{}", message),
            Self::InvalidRequest(msg) => write!(f, "invalid request: {}", msg),
            Self::Integration(msg) => write!(f, "{}", msg),
            Self::Canceled => write!(f, "PayPal flow was canceled by the user"),
            Self::Transport(msg) => write!(f, "transport error: {}", msg),
            Self::InvalidData { field, reason } => {
                write!(f, "invalid {}: {}", field, reason)
            }
            Self::Serialization(msg) => write!(f, "serialization error: {}", msg),
        }
    }
}

impl std::error::Error for PayPalError {}

impl From<serde_json::Error> for PayPalError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
