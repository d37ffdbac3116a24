//! BookSessionHandler - Books a session from participant identifiers.
//!
//! Resolves both participants from the user directory, then delegates to
//! [`CreateBookingHandler`].

use tracing::debug;

use crate::application::handlers::participant::{GetParticipantHandler, GetParticipantQuery};
use crate::domain::foundation::ParticipantId;
use crate::domain::session::{Session, SessionError};

use super::create_booking::{parse_start_time, CreateBookingCommand, CreateBookingHandler};

/// Command to book a session by coach and student id.
#[derive(Debug, Clone)]
pub struct BookSessionCommand {
    pub coach_id: ParticipantId,
    pub student_id: ParticipantId,
    pub date: String,
    pub time: String,
}

#[derive(Clone)]
pub struct BookSessionHandler {
    participants: GetParticipantHandler,
    bookings: CreateBookingHandler,
}

impl BookSessionHandler {
    pub fn new(participants: GetParticipantHandler, bookings: CreateBookingHandler) -> Self {
        Self {
            participants,
            bookings,
        }
    }

    pub async fn handle(&self, cmd: BookSessionCommand) -> Result<Session, SessionError> {
        // Missing or malformed slots never reach the directory
        parse_start_time(&cmd.date, &cmd.time)?;

        let (coach, student) = futures::try_join!(
            self.participants.handle_coach(GetParticipantQuery {
                participant_id: cmd.coach_id.clone(),
            }),
            self.participants.handle(GetParticipantQuery {
                participant_id: cmd.student_id.clone(),
            }),
        )?;
        debug!(coach_id = %cmd.coach_id, student_id = %cmd.student_id, "participants resolved");

        self.bookings
            .handle(CreateBookingCommand {
                coach,
                student,
                date: cmd.date,
                time: cmd.time,
            })
            .await
    }
}
