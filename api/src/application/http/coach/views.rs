pub mod dashboard;
pub mod form;
pub mod layout;

use maud::{Markup, html};

use crate::application::http::coach::{
    submission::Submission, ui_config::UiConfig, validators::ProfileRequest,
};

/// Full page: the form, then whatever the submission produced.
pub fn render_page(ui: &UiConfig, values: &ProfileRequest, submission: &Submission) -> Markup {
    let content = html! {
        h1 { "🤖 Coach IA : Programme Nutritionnel & Sportif Personnalisé" }
        (form::profile_form(ui, values))
        @match submission {
            Submission::Idle => {},
            Submission::Invalid(messages) => (form::form_errors(messages)),
            Submission::Rendered(result) => (dashboard::dashboard(result)),
            Submission::Failed(message) => (dashboard::failure(message)),
        }
    };

    layout::layout(&ui.page_title, content)
}
