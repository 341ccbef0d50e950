//! Error types shared by the session core.
//!
//! ERROR HANDLING
//! ==============
//! Login failures are values, not faults: `LoginError` is carried inside a
//! `LoginOutcome` so callers can show the message and let the user retry.
//! `StoreError::Corrupt` is recovered locally during hydration and never
//! reaches the user.

use serde::{Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error("Please use your USM email address (@usm.my or @student.usm.my).")]
    InvalidEmailDomain,
    #[error("Invalid email or password.")]
    InvalidCredentials,
    #[error("Sign-in service unavailable: {0}")]
    LookupFailed(String),
}

impl LoginError {
    /// Stable machine-readable code for this failure.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidEmailDomain => "InvalidEmailDomain",
            Self::InvalidCredentials => "InvalidCredentials",
            Self::LookupFailed(_) => "LookupFailed",
        }
    }
}

impl Serialize for LoginError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl From<LookupError> for LoginError {
    fn from(err: LookupError) -> Self {
        Self::LookupFailed(err.to_string())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("stored session is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
    #[error("session storage io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("session storage unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("lookup transport failed: {0}")]
    Transport(String),
    #[error("lookup returned malformed data: {0}")]
    Malformed(String),
}
