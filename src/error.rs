use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// A required field was missing or empty. Raised before any request is sent.
    #[error("{0}")]
    Validation(String),

    /// The provider answered with a non-success status.
    #[error("Failed to {context}: {body}")]
    Upstream {
        context: &'static str,
        status: u16,
        body: String,
    },

    #[error("A DNS record with the same name and type already exists.")]
    DuplicateRecord { body: String },

    #[error("DNS Record not found: {0}")]
    NotFound(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to parse provider response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<validator::ValidationErrors> for Error {
    fn from(errors: validator::ValidationErrors) -> Self {
        Error::Validation(errors.to_string())
    }
}

impl Error {
    /// Raw provider response text, when the error came from the provider.
    pub fn provider_body(&self) -> Option<&str> {
        match self {
            Error::Upstream { body, .. } | Error::DuplicateRecord { body } => Some(body),
            _ => None,
        }
    }
}
