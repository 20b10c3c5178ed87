use tracing::{error, info};

use crate::domain::{
    coach::{
        entities::{CoachResult, UserProfile},
        errors::AgentInvocationError,
        ports::{CoachService, LLMClient},
        prompt::{SYSTEM_INSTRUCTION, build_prompt},
        schema::{coach_result_schema, validate_coach_result},
    },
    common::services::Service,
};

impl<LLM> CoachService for Service<LLM>
where
    LLM: LLMClient,
{
    async fn generate_program(
        &self,
        profile: UserProfile,
    ) -> Result<CoachResult, AgentInvocationError> {
        // 1. Build prompt
        let prompt = build_prompt(&profile);

        // 2. Get response schema
        let response_schema = coach_result_schema();

        // 3. Call LLM, exactly once
        info!(goal = %profile.goal, "requesting coaching program from LLM");
        let raw_response = self
            .llm_client
            .generate_structured(SYSTEM_INSTRUCTION.to_string(), prompt, response_schema)
            .await
            .map_err(|e| {
                error!("LLM generation failed: {}", e);
                AgentInvocationError::from(e)
            })?;

        // 4. Parse response
        let parsed: serde_json::Value = serde_json::from_str(&raw_response).map_err(|e| {
            error!("Failed to parse LLM response: {}", e);
            AgentInvocationError::MalformedJson(e.to_string())
        })?;

        // 5. Validate against the program schema
        let result = validate_coach_result(parsed).map_err(|e| {
            error!("LLM response rejected by schema: {}", e);
            AgentInvocationError::from(e)
        })?;

        info!(
            nutrition_days = result.nutrition_plan.len(),
            workout_sessions = result.workout_plan.len(),
            "coaching program generated"
        );

        Ok(result)
    }
}
