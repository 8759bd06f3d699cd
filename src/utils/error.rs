use crate::domain::model::FieldError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("Request validation failed with {} error(s)", .0.len())]
    ValidationError(Vec<FieldError>),

    #[error("Cannot summarize an empty list")]
    EmptyInputError,

    #[error("Cannot calculate percentage with zero total")]
    ZeroTotalError,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl CalcError {
    /// True when the caller supplied bad input; everything else is a fault on our side.
    pub fn is_client_error(&self) -> bool {
        matches!(self, CalcError::ValidationError(_) | CalcError::ZeroTotalError)
    }

    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            CalcError::ValidationError(errors) => errors,
            _ => &[],
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
