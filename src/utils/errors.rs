use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Template error: {0}")]
    TemplateError(String),

    #[error("Category '{0}' has no films to collate")]
    EmptyCategory(String),

    #[error("Invalid duration for '{title}': {value} (must be a positive number of hours)")]
    InvalidDuration { title: String, value: f32 },

    #[error("Output error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}
