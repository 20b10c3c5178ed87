use axum::{extract::State, response::Html};

use crate::application::http::{
    coach::{submission::Submission, validators::ProfileRequest, views::render_page},
    server::app_state::AppState,
};

pub async fn show_form(State(state): State<AppState>) -> Html<String> {
    let page = render_page(&state.ui, &ProfileRequest::default(), &Submission::Idle);

    Html(page.into_string())
}
