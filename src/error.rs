use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Rate limit exceeded. Please try again later.")]
    UpstreamRateLimit,

    #[error("Payment required. Please add credits to your workspace.")]
    UpstreamQuota,

    #[error("AI gateway error: {status}")]
    UpstreamTransport { status: u16 },

    #[error("AI gateway request timed out after {seconds}s")]
    Timeout { seconds: u64 },

    #[error("No JSON payload found in model reply")]
    Extraction,

    #[error("Malformed JSON in model reply: {message}")]
    Parse { message: String, candidate: String },

    #[error("Invalid model reply: {0}")]
    Validation(String),

    #[error("HTTP error: {0}")]
    Http(#[from] axum::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn parse(message: impl Into<String>, candidate: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
            candidate: candidate.into(),
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
