use nutricoach_core::domain::coach::{entities::CoachResult, errors::AgentInvocationError};

/// What the page shows under the form for one submission.
///
/// A submission goes `Idle -> Submitted -> Invoking -> Rendered | Failed`; the
/// intermediate phases only exist inside the request handler, so only the
/// states that can be displayed are represented here. `Invalid` is the idle
/// form carrying the reasons it was not submitted.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    Idle,
    Invalid(Vec<String>),
    Rendered(Box<CoachResult>),
    Failed(String),
}

impl Submission {
    pub fn from_outcome(outcome: Result<CoachResult, AgentInvocationError>) -> Self {
        match outcome {
            Ok(result) => Submission::Rendered(Box::new(result)),
            Err(error) => Submission::Failed(error.to_string()),
        }
    }
}
