//! Session-specific error types.

use crate::domain::foundation::{ErrorCode, ParticipantId, SessionId, ValidationError};
use crate::domain::participant::ParticipantError;
use crate::ports::StoreError;

/// Session-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Session was not found.
    NotFound(SessionId),
    /// A participant named in a booking could not be resolved.
    ParticipantNotFound(ParticipantId),
    /// Booking input is missing or malformed. The user can correct it.
    ValidationFailed { field: String, message: String },
    /// The document store failed. Not retried.
    Storage(String),
}

impl SessionError {
    pub fn not_found(id: SessionId) -> Self {
        SessionError::NotFound(id)
    }
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        SessionError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn storage(message: impl Into<String>) -> Self {
        SessionError::Storage(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            SessionError::NotFound(_) => ErrorCode::SessionNotFound,
            SessionError::ParticipantNotFound(_) => ErrorCode::ParticipantNotFound,
            SessionError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            SessionError::Storage(_) => ErrorCode::StorageError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            SessionError::NotFound(id) => format!("Session not found: {}", id),
            SessionError::ParticipantNotFound(id) => format!("Participant not found: {}", id),
            SessionError::ValidationFailed { message, .. } => message.clone(),
            SessionError::Storage(msg) => format!("Storage error: {}", msg),
        }
    }
    /// True for errors the user can fix by changing their input.
    pub fn is_user_correctable(&self) -> bool {
        matches!(self, SessionError::ValidationFailed { .. })
    }
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for SessionError {}

impl From<ValidationError> for SessionError {
    fn from(err: ValidationError) -> Self {
        SessionError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<StoreError> for SessionError {
    fn from(err: StoreError) -> Self {
        SessionError::Storage(err.to_string())
    }
}

impl From<ParticipantError> for SessionError {
    fn from(err: ParticipantError) -> Self {
        match err {
            ParticipantError::NotFound(id) => SessionError::ParticipantNotFound(id),
            ParticipantError::Storage(msg) => SessionError::Storage(msg),
        }
    }
}
