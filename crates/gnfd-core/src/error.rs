//! Shared error type across gnfd crates.

use thiserror::Error;

/// Caller-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Effect outside {Allow, Deny}.
    InvalidEffect,
    /// Action tag not in the registry (validation path).
    InvalidAction,
    /// Action tag not in the registry (chain-code lookup path).
    UnregisteredAction,
    /// Bytes do not parse as the expected JSON shape.
    MalformedInput,
    /// Malformed resource name.
    InvalidResource,
    /// Malformed principal.
    InvalidPrincipal,
    /// Config rejected by validation.
    InvalidConfig,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Signer failed or mismatched.
    SigningFailed,
    /// Submission rejected.
    SubmissionFailed,
    /// Internal error.
    Internal,
}

impl ErrorCode {
    /// String representation used in logs and CLI output.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidEffect => "INVALID_EFFECT",
            ErrorCode::InvalidAction => "INVALID_ACTION",
            ErrorCode::UnregisteredAction => "UNREGISTERED_ACTION",
            ErrorCode::MalformedInput => "MALFORMED_INPUT",
            ErrorCode::InvalidResource => "INVALID_RESOURCE",
            ErrorCode::InvalidPrincipal => "INVALID_PRINCIPAL",
            ErrorCode::InvalidConfig => "INVALID_CONFIG",
            ErrorCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ErrorCode::SigningFailed => "SIGNING_FAILED",
            ErrorCode::SubmissionFailed => "SUBMISSION_FAILED",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, GnfdError>;

/// Unified error type used by the policy model and the client.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GnfdError {
    #[error("invalid effect: {0:?} (expected Allow or Deny)")]
    InvalidEffect(String),
    #[error("invalid action: {0}")]
    InvalidAction(String),
    #[error("unregistered action: {0}")]
    UnregisteredAction(String),
    #[error("malformed input: {0}")]
    MalformedInput(String),
    #[error("invalid resource: {0}")]
    InvalidResource(String),
    #[error("invalid principal: {0}")]
    InvalidPrincipal(String),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("signing failed: {0}")]
    Signing(String),
    #[error("submission failed: {0}")]
    Submission(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl GnfdError {
    /// Map internal error to a stable caller-facing code.
    pub fn code(&self) -> ErrorCode {
        match self {
            GnfdError::InvalidEffect(_) => ErrorCode::InvalidEffect,
            GnfdError::InvalidAction(_) => ErrorCode::InvalidAction,
            GnfdError::UnregisteredAction(_) => ErrorCode::UnregisteredAction,
            GnfdError::MalformedInput(_) => ErrorCode::MalformedInput,
            GnfdError::InvalidResource(_) => ErrorCode::InvalidResource,
            GnfdError::InvalidPrincipal(_) => ErrorCode::InvalidPrincipal,
            GnfdError::InvalidConfig(_) => ErrorCode::InvalidConfig,
            GnfdError::UnsupportedVersion => ErrorCode::UnsupportedVersion,
            GnfdError::Signing(_) => ErrorCode::SigningFailed,
            GnfdError::Submission(_) => ErrorCode::SubmissionFailed,
            GnfdError::Internal(_) => ErrorCode::Internal,
        }
    }
}
