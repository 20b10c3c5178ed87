use super::handlers::{
    generate_program::{__path_generate_program, generate_program},
    show_form::show_form,
    submit_form::submit_form,
};
use crate::application::http::server::app_state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(generate_program))]
pub struct CoachApiDoc;

pub fn coach_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &state.ui.form_action(),
            get(show_form).post(submit_form),
        )
        .route(
            &format!("{}/api/programs", state.args.server.root_path),
            post(generate_program),
        )
}
