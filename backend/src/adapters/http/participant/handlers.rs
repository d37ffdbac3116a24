//! HTTP handlers for participant directory endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;

use crate::adapters::http::error::ErrorResponse;
use crate::application::handlers::participant::{
    GetParticipantHandler, GetParticipantQuery, ListCoachesHandler,
};
use crate::domain::foundation::ParticipantId;
use crate::domain::participant::ParticipantError;

use super::dto::{CoachListResponse, CoachNamesResponse, ParticipantResponse};

#[derive(Clone)]
pub struct ParticipantHandlers {
    get_handler: Arc<GetParticipantHandler>,
    coaches_handler: Arc<ListCoachesHandler>,
}

impl ParticipantHandlers {
    pub fn new(
        get_handler: Arc<GetParticipantHandler>,
        coaches_handler: Arc<ListCoachesHandler>,
    ) -> Self {
        Self {
            get_handler,
            coaches_handler,
        }
    }
}

fn parse_id(raw: String) -> Result<ParticipantId, Response> {
    raw.parse::<ParticipantId>().map_err(|_| {
        ErrorResponse::bad_request("Invalid participant ID").into_response_with(StatusCode::BAD_REQUEST)
    })
}

/// GET /api/participants/:id
pub async fn get_participant(
    State(handlers): State<ParticipantHandlers>,
    Path(participant_id): Path<String>,
) -> Response {
    let participant_id = match parse_id(participant_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers
        .get_handler
        .handle(GetParticipantQuery { participant_id })
        .await
    {
        Ok(participant) => {
            let response: ParticipantResponse = participant.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_participant_error(e),
    }
}

/// GET /api/coaches/:id
pub async fn get_coach(
    State(handlers): State<ParticipantHandlers>,
    Path(coach_id): Path<String>,
) -> Response {
    let participant_id = match parse_id(coach_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers
        .get_handler
        .handle_coach(GetParticipantQuery { participant_id })
        .await
    {
        Ok(coach) => {
            let response: ParticipantResponse = coach.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_participant_error(e),
    }
}

/// GET /api/coaches
pub async fn list_coaches(State(handlers): State<ParticipantHandlers>) -> Response {
    match handlers.coaches_handler.handle().await {
        Ok(coaches) => {
            let response: CoachListResponse = coaches.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_participant_error(e),
    }
}

/// GET /api/coaches/names
pub async fn coach_names(State(handlers): State<ParticipantHandlers>) -> Response {
    match handlers.coaches_handler.coach_name_map().await {
        Ok(names) => {
            let response: CoachNamesResponse = names.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_participant_error(e),
    }
}

fn handle_participant_error(error: ParticipantError) -> Response {
    match error {
        ParticipantError::NotFound(_) => ErrorResponse::new(error.code(), error.message())
            .into_response_with(StatusCode::NOT_FOUND),
        ParticipantError::Storage(ref msg) => {
            error!(error = %msg, "participant request failed");
            ErrorResponse::internal().into_response_with(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let error = ParticipantError::not_found(ParticipantId::new("C9").unwrap());
        assert_eq!(handle_participant_error(error).status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn storage_maps_to_500() {
        let error = ParticipantError::storage("offline");
        assert_eq!(
            handle_participant_error(error).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
