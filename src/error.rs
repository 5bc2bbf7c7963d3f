use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to read property file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed property data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Request to property store failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Property store returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("API key contains characters not allowed in an HTTP header")]
    InvalidApiKey,

    #[error("Property {0} not found")]
    NotFound(String),
}

#[derive(Error, Debug, PartialEq)]
pub enum LeadError {
    #[error("Invalid {field}: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },

    #[error("Lead {0} not found")]
    UnknownLead(String),

    #[error("Lead store unavailable: {0}")]
    Store(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid {key} value '{value}': {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}
