use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuditError {
    // Dataset integrity errors
    #[error("Vote in project '{project}' references unknown account: {address}")]
    UnknownVoter { project: String, address: String },

    // Configuration errors
    #[error("Invalid thresholds: {0}")]
    InvalidThresholds(String),

    // Load errors
    #[error("Failed to parse dataset document: {0}")]
    DatasetParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AuditError {
    /// Check if error comes from caller-supplied configuration
    pub fn is_config(&self) -> bool {
        matches!(self, AuditError::InvalidThresholds(_))
    }

    /// Get error category for logging/metrics
    pub fn category(&self) -> &'static str {
        match self {
            AuditError::UnknownVoter { .. } => "dataset",

            AuditError::InvalidThresholds(_) => "configuration",

            AuditError::DatasetParse(_)
            | AuditError::Io(_) => "load",
        }
    }
}

// Result type alias for convenience
pub type AuditResult<T> = Result<T, AuditError>;
