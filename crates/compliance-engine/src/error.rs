use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Malformed limit '{text}': {reason}")]
    MalformedLimit { text: String, reason: String },

    #[error("Fuel grade '{0}' not found in reference tables")]
    UnknownGrade(String),

    #[error("Fuel grade '{0}' appears in both distillate and residual tables")]
    DuplicateGrade(String),

    #[error("Invalid bunker record: {0}")]
    InvalidRecord(String),
}

impl EngineError {
    pub fn malformed(text: &str, reason: impl Into<String>) -> Self {
        EngineError::MalformedLimit {
            text: text.to_string(),
            reason: reason.into(),
        }
    }
}
