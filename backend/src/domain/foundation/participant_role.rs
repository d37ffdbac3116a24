//! ParticipantRole enum stored on user records.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Role a user account holds in the marketplace.
///
/// Stored in upper case (`"LEARNER"`, `"COACH"`, `"ADMIN"`) on user documents,
/// which is also the value used when filtering the users collection by role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ParticipantRole {
    #[default]
    Learner,
    Coach,
    Admin,
}

impl ParticipantRole {
    /// Stored representation of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            ParticipantRole::Learner => "LEARNER",
            ParticipantRole::Coach => "COACH",
            ParticipantRole::Admin => "ADMIN",
        }
    }

    pub fn is_coach(&self) -> bool {
        matches!(self, ParticipantRole::Coach)
    }
}

impl fmt::Display for ParticipantRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_learner() {
        assert_eq!(ParticipantRole::default(), ParticipantRole::Learner);
    }

    #[test]
    fn serialized_form_matches_as_str() {
        for role in [
            ParticipantRole::Learner,
            ParticipantRole::Coach,
            ParticipantRole::Admin,
        ] {
            let json = serde_json::to_string(&role).unwrap();
            assert_eq!(json, format!("\"{}\"", role.as_str()));
        }
    }

    #[test]
    fn only_coach_is_coach() {
        assert!(ParticipantRole::Coach.is_coach());
        assert!(!ParticipantRole::Learner.is_coach());
        assert!(!ParticipantRole::Admin.is_coach());
    }
}
