use axum::extract::State;
use chrono::{DateTime, Utc};
use nutricoach_core::domain::{
    coach::{entities::CoachResult, ports::CoachService},
    common::generate_uuid_v7,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::{
    coach::validators::ProfileRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GenerateProgramResponse {
    pub id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub data: CoachResult,
}

#[utoipa::path(
    post,
    path = "",
    tag = "coach",
    summary = "Generate a coaching program",
    description = "Builds the prompt from the profile, calls the LLM once and returns the validated program",
    responses(
        (status = 200, body = GenerateProgramResponse),
        (status = 400, body = ApiErrorResponse),
        (status = 502, body = ApiErrorResponse)
    ),
    request_body = ProfileRequest
)]
pub async fn generate_program(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<ProfileRequest>,
) -> Result<Response<GenerateProgramResponse>, ApiError> {
    let result = state
        .service
        .generate_program(payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GenerateProgramResponse {
        id: generate_uuid_v7(),
        generated_at: Utc::now(),
        data: result,
    }))
}
