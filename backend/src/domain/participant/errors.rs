//! Participant lookup errors.

use crate::domain::foundation::{ErrorCode, ParticipantId};
use crate::ports::StoreError;

/// Errors raised while resolving participant records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParticipantError {
    /// No user record with this id, or the record does not have the
    /// required role.
    NotFound(ParticipantId),
    /// The users collection could not be read.
    Storage(String),
}

impl ParticipantError {
    pub fn not_found(id: ParticipantId) -> Self {
        ParticipantError::NotFound(id)
    }
    pub fn storage(message: impl Into<String>) -> Self {
        ParticipantError::Storage(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            ParticipantError::NotFound(_) => ErrorCode::ParticipantNotFound,
            ParticipantError::Storage(_) => ErrorCode::StorageError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            ParticipantError::NotFound(id) => format!("Participant not found: {}", id),
            ParticipantError::Storage(msg) => format!("Storage error: {}", msg),
        }
    }
}

impl std::fmt::Display for ParticipantError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ParticipantError {}

impl From<StoreError> for ParticipantError {
    fn from(err: StoreError) -> Self {
        ParticipantError::Storage(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_uses_participant_code() {
        let err = ParticipantError::not_found(ParticipantId::new("c-1").unwrap());
        assert_eq!(err.code(), ErrorCode::ParticipantNotFound);
        assert_eq!(err.to_string(), "Participant not found: c-1");
    }

    #[test]
    fn store_errors_become_storage_errors() {
        let err: ParticipantError = StoreError::unavailable("connection reset").into();
        assert_eq!(err.code(), ErrorCode::StorageError);
    }
}
