//! Library error types

/// Errors surfaced while resolving or rendering conditioned resources
#[derive(Debug, thiserror::Error)]
pub enum ConditionsError {
    #[error("Resource kind is not supported as a conditions setter: {api_version}/{kind}")]
    UnsupportedKind { api_version: String, kind: String },

    #[error("Manifest is missing {0}")]
    MissingTypeMeta(&'static str),

    #[error("Invalid {kind} manifest: {source}")]
    InvalidManifest {
        kind: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for condition operations
pub type ConditionsResult<T> = Result<T, ConditionsError>;
