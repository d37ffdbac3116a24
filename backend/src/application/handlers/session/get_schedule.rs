//! GetScheduleHandler - Query handler for a participant's upcoming and past sessions.

use tracing::debug;

use crate::domain::foundation::{ParticipantId, Timestamp};
use crate::domain::session::{classify, ScheduleView, SessionError, ViewerRole};

use super::list_sessions::{ListSessionsHandler, ListSessionsQuery};

/// Query for a participant's schedule as seen from one role.
#[derive(Debug, Clone)]
pub struct GetScheduleQuery {
    pub participant_id: ParticipantId,
    pub viewer: ViewerRole,
    /// Reference instant for the upcoming/past split.
    pub as_of: Timestamp,
}

/// Handler composing listing, classification, and per-viewer projection.
#[derive(Clone)]
pub struct GetScheduleHandler {
    sessions: ListSessionsHandler,
}

impl GetScheduleHandler {
    pub fn new(sessions: ListSessionsHandler) -> Self {
        Self { sessions }
    }

    pub async fn handle(&self, query: GetScheduleQuery) -> Result<ScheduleView, SessionError> {
        let sessions = self
            .sessions
            .handle(ListSessionsQuery {
                participant_id: query.participant_id.clone(),
            })
            .await?;

        let schedule = classify(sessions, &query.as_of);
        debug!(
            participant_id = %query.participant_id,
            upcoming = schedule.upcoming.len(),
            past = schedule.past.len(),
            "schedule classified"
        );

        Ok(ScheduleView::project(schedule, query.viewer, query.as_of))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::session::test_store::{shared, RecordingStore};
    use crate::domain::session::SessionAction;

    async fn handler() -> GetScheduleHandler {
        let recorder = RecordingStore::new();
        recorder.seed_session("A", "2024-06-01", "10:00", "S1", "C1").await;
        recorder.seed_session("B", "2024-06-20", "09:00", "S1", "C1").await;
        recorder.seed_session("C", "2024-06-10", "15:00", "S1", "C2").await;
        let (_, store) = shared(recorder);
        GetScheduleHandler::new(ListSessionsHandler::new(store))
    }

    fn query(id: &str, viewer: ViewerRole) -> GetScheduleQuery {
        GetScheduleQuery {
            participant_id: ParticipantId::new(id).unwrap(),
            viewer,
            as_of: Timestamp::from_date_and_time("2024-06-15", "12:00").unwrap(),
        }
    }

    fn ids(cards: &[crate::domain::session::SessionCard]) -> Vec<&str> {
        cards.iter().map(|c| c.session.id().as_str()).collect()
    }

    #[tokio::test]
    async fn splits_and_orders_student_schedule() {
        let view = handler().await.handle(query("S1", ViewerRole::Student)).await.unwrap();

        assert_eq!(ids(&view.upcoming), vec!["B"]);
        assert_eq!(ids(&view.past), vec!["C", "A"]);
    }

    #[tokio::test]
    async fn student_sees_coach_as_counterpart() {
        let view = handler().await.handle(query("S1", ViewerRole::Student)).await.unwrap();

        let card = &view.upcoming[0];
        assert_eq!(card.counterpart.label, "Coach");
        assert_eq!(card.counterpart.name, "C1 name");
        assert_eq!(card.action, SessionAction::Join);
        assert!(view.past.iter().all(|c| c.action == SessionAction::ViewDetails));
    }

    #[tokio::test]
    async fn coach_sees_student_as_counterpart() {
        let view = handler().await.handle(query("C1", ViewerRole::Coach)).await.unwrap();

        assert_eq!(ids(&view.upcoming), vec!["B"]);
        assert_eq!(ids(&view.past), vec!["A"]);
        assert_eq!(view.past[0].counterpart.label, "Student");
        assert_eq!(view.past[0].counterpart.name, "S1 name");
    }

    #[tokio::test]
    async fn participant_without_sessions_has_empty_schedule() {
        let view = handler().await.handle(query("ghost", ViewerRole::Student)).await.unwrap();

        assert!(view.upcoming.is_empty());
        assert!(view.past.is_empty());
    }

    #[tokio::test]
    async fn listing_failure_propagates() {
        let (_, store) = shared(RecordingStore::failing_query_on("coachId"));
        let handler = GetScheduleHandler::new(ListSessionsHandler::new(store));

        let result = handler.handle(query("S1", ViewerRole::Student)).await;

        assert!(matches!(result, Err(SessionError::Storage(_))));
    }
}
