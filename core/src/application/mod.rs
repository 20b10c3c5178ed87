use crate::{
    domain::common::{CoachConfig, entities::app_errors::CoreError, services::Service},
    infrastructure::llm::GeminiLLMClient,
};

pub type NutriCoachService = Service<GeminiLLMClient>;

pub fn create_service(config: CoachConfig) -> Result<NutriCoachService, CoreError> {
    let llm_client = GeminiLLMClient::new(config.llm)?;

    Ok(Service::new(llm_client))
}
