use super::types::{ErrorResponse, QuizRequest, QuizResponse, ScheduleRequest, ScheduleResponse};
use crate::{Error, pipeline::Pipeline};
use axum::{extract::State, http::StatusCode, response::Json};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<Pipeline>,
}

type HandlerError = (StatusCode, Json<ErrorResponse>);

pub async fn generate_schedule(
    State(state): State<AppState>,
    Json(request): Json<ScheduleRequest>,
) -> Result<Json<ScheduleResponse>, HandlerError> {
    info!(
        "Received schedule request with {} fixed events",
        request.fixed_events.len()
    );

    match state.pipeline.generate_schedule(&request.fixed_events).await {
        Ok(demo_slots) => Ok(Json(ScheduleResponse { demo_slots })),
        Err(e) => {
            error!("Schedule generation failed: {}", e);
            Err(error_response(e))
        }
    }
}

pub async fn generate_quiz(
    State(state): State<AppState>,
    Json(request): Json<QuizRequest>,
) -> Result<Json<QuizResponse>, HandlerError> {
    if request.topic.trim().is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "topic must not be empty".to_string(),
            }),
        ));
    }

    info!(
        "Received quiz request for topic \"{}\" (retake: {})",
        request.topic, request.is_retake
    );

    match state
        .pipeline
        .generate_quiz(&request.topic, request.is_retake)
        .await
    {
        Ok(questions) => Ok(Json(QuizResponse { questions })),
        Err(e) => {
            error!("Quiz generation failed: {}", e);
            Err(error_response(e))
        }
    }
}

/// Maps pipeline failures onto the wire contract: 429 for upstream rate
/// limiting, 402 for exhausted credits, 500 for everything else. The error
/// body always carries a descriptive message; partial results are never sent.
fn error_response(error: Error) -> HandlerError {
    let status = match error {
        Error::UpstreamRateLimit => StatusCode::TOO_MANY_REQUESTS,
        Error::UpstreamQuota => StatusCode::PAYMENT_REQUIRED,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
        }),
    )
}
