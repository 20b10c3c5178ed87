use crate::application::http::{coach::router::CoachApiDoc, health::HealthApiDoc};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "NutriCoach API"
    ),
    nest(
        (path = "/api/programs", api = CoachApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
