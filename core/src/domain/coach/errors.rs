use std::fmt;

use thiserror::Error;

use crate::domain::common::entities::app_errors::CoreError;

/// Raw model output that does not match the program schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("field `{path}`: {kind}")]
pub struct SchemaValidationError {
    /// Location of the offending value, e.g. `$.plan_nutritionnel[2].repas[0].calories`.
    pub path: String,
    pub kind: MismatchKind,
}

impl SchemaValidationError {
    pub fn missing_field(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: MismatchKind::MissingField,
        }
    }

    pub fn invalid_value(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: MismatchKind::InvalidValue(reason.into()),
        }
    }

    pub fn type_mismatch(path: impl Into<String>, expected: &'static str, found: &'static str) -> Self {
        Self {
            path: path.into(),
            kind: MismatchKind::TypeMismatch { expected, found },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MismatchKind {
    MissingField,
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
    InvalidValue(String),
}

impl fmt::Display for MismatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MismatchKind::MissingField => f.write_str("required field is missing"),
            MismatchKind::TypeMismatch { expected, found } => {
                write!(f, "expected {expected}, found {found}")
            }
            MismatchKind::InvalidValue(reason) => write!(f, "invalid value ({reason})"),
        }
    }
}

/// Single failure class of a program generation attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AgentInvocationError {
    #[error("LLM provider call failed: {0}")]
    Provider(#[from] CoreError),

    #[error("LLM response is not valid JSON: {0}")]
    MalformedJson(String),

    #[error("LLM response does not match the program schema: {0}")]
    Schema(#[from] SchemaValidationError),
}
