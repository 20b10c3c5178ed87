use std::future::Future;

use crate::domain::{
    coach::{
        entities::{CoachResult, UserProfile},
        errors::AgentInvocationError,
    },
    common::entities::app_errors::CoreError,
};

/// LLM Client trait for calling AI models with schema-guided generation
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    /// Sends one generation request and returns the raw text of the first candidate.
    fn generate_structured(
        &self,
        system_instruction: String,
        prompt: String,
        response_schema: serde_json::Value,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for coaching program generation
#[cfg_attr(test, mockall::automock)]
pub trait CoachService: Send + Sync {
    /// Runs one request/response cycle with the model. All-or-nothing: no retry,
    /// no partially populated result.
    fn generate_program(
        &self,
        profile: UserProfile,
    ) -> impl Future<Output = Result<CoachResult, AgentInvocationError>> + Send;
}
