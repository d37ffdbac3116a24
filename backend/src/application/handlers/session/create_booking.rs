//! CreateBookingHandler - Command handler for booking a coaching session.

use std::sync::Arc;

use tracing::{error, info, warn};

use crate::domain::foundation::{SessionId, Timestamp};
use crate::domain::participant::Participant;
use crate::domain::session::{Session, SessionDraft, SessionError};
use crate::ports::{collections, encode, DocumentStore};

/// Field name reported on booking input errors.
const DATE_TIME_FIELD: &str = "date_time";

/// Command to book a session between two resolved participants.
#[derive(Debug, Clone)]
pub struct CreateBookingCommand {
    pub coach: Participant,
    pub student: Participant,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`
    pub time: String,
}

/// Handler for booking sessions.
///
/// One store write per booking, no retry. A failed booking is re-issued
/// by the caller.
#[derive(Clone)]
pub struct CreateBookingHandler {
    store: Arc<dyn DocumentStore>,
}

impl CreateBookingHandler {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: CreateBookingCommand) -> Result<Session, SessionError> {
        // 1. Validate input before touching the store
        let start_time = parse_start_time(&cmd.date, &cmd.time)?;

        if cmd.coach.id() == cmd.student.id() {
            warn!(participant_id = %cmd.coach.id(), "booking a session with the same participant on both sides");
        }

        // 2. Snapshot participants into a draft
        let draft = SessionDraft::book(&cmd.coach, &cmd.student, start_time);

        // 3. Persist; the store assigns the identifier
        let assigned = self
            .store
            .put(collections::SESSIONS, encode(&draft)?)
            .await
            .map_err(|e| {
                error!(coach_id = %cmd.coach.id(), student_id = %cmd.student.id(), "failed to persist booking: {}", e);
                SessionError::from(e)
            })?;

        let id = SessionId::new(assigned)
            .map_err(|_| SessionError::storage("store returned an empty identifier"))?;
        let session = Session::from_draft(id, draft);

        info!(
            session_id = %session.id(),
            coach_id = %session.coach_id(),
            student_id = %session.student_id(),
            start_time = %session.start_time(),
            "session booked"
        );

        Ok(session)
    }
}

/// Checks that both parts of the slot are present.
pub(crate) fn require_date_time(date: &str, time: &str) -> Result<(), SessionError> {
    if date.trim().is_empty() || time.trim().is_empty() {
        return Err(SessionError::validation(DATE_TIME_FIELD, "missing date/time"));
    }
    Ok(())
}

/// Presence check followed by parsing into one instant.
pub(crate) fn parse_start_time(date: &str, time: &str) -> Result<Timestamp, SessionError> {
    require_date_time(date, time)?;
    Timestamp::from_date_and_time(date, time)
        .map_err(|_| SessionError::validation(DATE_TIME_FIELD, "invalid date/time"))
}
