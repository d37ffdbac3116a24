//! HTTP handlers for session endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;

use crate::adapters::http::error::ErrorResponse;
use crate::application::handlers::session::{
    BookSessionCommand, BookSessionHandler, GetScheduleHandler, GetScheduleQuery,
    GetSessionHandler, GetSessionQuery, ListSessionsHandler, ListSessionsQuery,
};
use crate::domain::foundation::{ParticipantId, SessionId, Timestamp};
use crate::domain::session::{sort_by_start_time, SessionError};

use super::dto::{
    BookSessionRequest, ScheduleParams, ScheduleResponse, SessionListParams,
    SessionListResponse, SessionResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct SessionHandlers {
    book_handler: Arc<BookSessionHandler>,
    get_handler: Arc<GetSessionHandler>,
    list_handler: Arc<ListSessionsHandler>,
    schedule_handler: Arc<GetScheduleHandler>,
}

impl SessionHandlers {
    pub fn new(
        book_handler: Arc<BookSessionHandler>,
        get_handler: Arc<GetSessionHandler>,
        list_handler: Arc<ListSessionsHandler>,
        schedule_handler: Arc<GetScheduleHandler>,
    ) -> Self {
        Self {
            book_handler,
            get_handler,
            list_handler,
            schedule_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/sessions - Book a session
pub async fn book_session(
    State(handlers): State<SessionHandlers>,
    Json(req): Json<BookSessionRequest>,
) -> Response {
    let (coach_id, student_id) = match (
        ParticipantId::new(req.coach_id),
        ParticipantId::new(req.student_id),
    ) {
        (Ok(coach), Ok(student)) => (coach, student),
        _ => {
            return ErrorResponse::bad_request("coachId and studentId are required")
                .into_response_with(StatusCode::BAD_REQUEST)
        }
    };

    let cmd = BookSessionCommand {
        coach_id,
        student_id,
        date: req.date,
        time: req.time,
    };

    match handlers.book_handler.handle(cmd).await {
        Ok(session) => {
            let response: SessionResponse = session.into();
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_session_error(e),
    }
}

/// GET /api/sessions/:id - Get session details
pub async fn get_session(
    State(handlers): State<SessionHandlers>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match session_id.parse::<SessionId>() {
        Ok(id) => id,
        Err(_) => {
            return ErrorResponse::bad_request("Invalid session ID")
                .into_response_with(StatusCode::BAD_REQUEST)
        }
    };

    match handlers.get_handler.handle(GetSessionQuery { session_id }).await {
        Ok(session) => {
            let response: SessionResponse = session.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_session_error(e),
    }
}

/// GET /api/participants/:id/sessions - Every session the participant is in
pub async fn list_participant_sessions(
    State(handlers): State<SessionHandlers>,
    Path(participant_id): Path<String>,
    Query(params): Query<SessionListParams>,
) -> Response {
    let participant_id = match participant_id.parse::<ParticipantId>() {
        Ok(id) => id,
        Err(_) => {
            return ErrorResponse::bad_request("Invalid participant ID")
                .into_response_with(StatusCode::BAD_REQUEST)
        }
    };

    match handlers
        .list_handler
        .handle(ListSessionsQuery { participant_id })
        .await
    {
        Ok(sessions) => {
            let sessions = if params.sorted {
                sort_by_start_time(sessions)
            } else {
                sessions
            };
            let response: SessionListResponse = sessions.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_session_error(e),
    }
}

/// GET /api/participants/:id/schedule - Upcoming and past sessions for one viewer
pub async fn get_schedule(
    State(handlers): State<SessionHandlers>,
    Path(participant_id): Path<String>,
    Query(params): Query<ScheduleParams>,
) -> Response {
    let participant_id = match participant_id.parse::<ParticipantId>() {
        Ok(id) => id,
        Err(_) => {
            return ErrorResponse::bad_request("Invalid participant ID")
                .into_response_with(StatusCode::BAD_REQUEST)
        }
    };

    let as_of = match params.as_of.as_deref() {
        None => Timestamp::now(),
        Some(raw) => match Timestamp::parse_rfc3339(raw) {
            Ok(ts) => ts,
            Err(_) => {
                return ErrorResponse::bad_request("as_of must be an RFC 3339 timestamp")
                    .into_response_with(StatusCode::BAD_REQUEST)
            }
        },
    };

    let query = GetScheduleQuery {
        participant_id,
        viewer: params.role,
        as_of,
    };

    match handlers.schedule_handler.handle(query).await {
        Ok(view) => {
            let response: ScheduleResponse = view.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_session_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

/// User-correctable failures are 400; anything else unexpected is a 500.
fn status_for(error: &SessionError) -> StatusCode {
    match error {
        SessionError::NotFound(_) | SessionError::ParticipantNotFound(_) => StatusCode::NOT_FOUND,
        e if e.is_user_correctable() => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn handle_session_error(error: SessionError) -> Response {
    let status = status_for(&error);
    if status == StatusCode::INTERNAL_SERVER_ERROR {
        error!(error = %error, "session request failed");
        return ErrorResponse::internal().into_response_with(status);
    }

    let mut body = ErrorResponse::new(error.code(), error.message());
    if let SessionError::ValidationFailed { field, .. } = &error {
        body = body.with_details(serde_json::json!({ "field": field }));
    }
    body.into_response_with(status)
}
