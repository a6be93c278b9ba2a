use thiserror::Error;

#[derive(Error, Debug)]
pub enum GoitaError {
    #[error("Ranking fetch failed: {0}")]
    FetchError(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl GoitaError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            // reqwest already names the URL
            GoitaError::FetchError(e) => format!("Could not fetch the ranking: {}", e),
            GoitaError::InvalidUrl(e) => format!("The ranking URL is malformed: {}", e),
            GoitaError::IoError(e) => format!("Could not write the output: {}", e),
            GoitaError::SerializationError(e) => format!("Could not encode the result: {}", e),
            GoitaError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("--{} '{}': {}", field, value, reason),
        }
    }
}

pub type Result<T> = std::result::Result<T, GoitaError>;
