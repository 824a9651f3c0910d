//! Error types for GovTriage

/// Result type alias using GovTriage's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for GovTriage operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Ticket text was empty or whitespace-only
    #[error("ticket text is empty")]
    EmptyInput,

    /// Classifier construction or execution errors
    #[error("classifier error: {0}")]
    Classifier(String),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    /// Audit sink errors
    #[error("audit error: {0}")]
    Audit(String),

    /// IO errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Create a new classifier error
    pub fn classifier(msg: impl Into<String>) -> Self {
        Self::Classifier(msg.into())
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new audit error
    pub fn audit(msg: impl Into<String>) -> Self {
        Self::Audit(msg.into())
    }
}
