use axum::{
    Form,
    extract::{State, rejection::FormRejection},
    http::StatusCode,
    response::Html,
};
use nutricoach_core::domain::coach::ports::CoachService;
use tracing::{info, warn};
use validator::Validate;

use crate::application::http::{
    coach::{submission::Submission, validators::ProfileRequest, views::render_page},
    server::{api_entities::api_error::validation_messages, app_state::AppState},
};

/// Handles one form submission: validates, invokes the agent once, renders the outcome.
pub async fn submit_form(
    State(state): State<AppState>,
    form: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> (StatusCode, Html<String>) {
    let Form(fields) = match form {
        Ok(form) => form,
        Err(rejection) => {
            warn!("Rejected profile form: {}", rejection.body_text());
            let submission = Submission::Invalid(vec![format!(
                "{} (the form was reset to its default values)",
                rejection.body_text()
            )]);
            let page = render_page(&state.ui, &ProfileRequest::default(), &submission);
            return (StatusCode::UNPROCESSABLE_ENTITY, Html(page.into_string()));
        }
    };

    let (payload, mut messages) = ProfileRequest::from_form_pairs(&fields);
    if let Err(errors) = payload.validate() {
        messages.extend(validation_messages(&errors));
    }

    if !messages.is_empty() {
        let submission = Submission::Invalid(messages);
        let page = render_page(&state.ui, &payload, &submission);
        return (StatusCode::UNPROCESSABLE_ENTITY, Html(page.into_string()));
    }

    info!(goal = %payload.goal, "profile submitted, invoking coach agent");
    let outcome = state.service.generate_program(payload.clone().into()).await;
    let submission = Submission::from_outcome(outcome);

    let status = match &submission {
        Submission::Failed(message) => {
            warn!("Program generation failed: {}", message);
            StatusCode::BAD_GATEWAY
        }
        _ => StatusCode::OK,
    };

    let page = render_page(&state.ui, &payload, &submission);
    (status, Html(page.into_string()))
}
