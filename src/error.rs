use thiserror::Error;

/// A malformed invocation. Every variant maps to exit status 1.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OptsError {
    #[error("Unknown option {0}")]
    UnknownOption(String),

    #[error("Option {flag} is missing its value")]
    MissingValue { flag: String },

    #[error("Invalid value '{value}' for option {flag}")]
    InvalidValue { flag: String, value: String },

    #[error("No topic given")]
    MissingTopic,
}

impl OptsError {
    pub fn exit_code(&self) -> i32 {
        1
    }
}
