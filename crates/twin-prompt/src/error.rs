//! Error types for prompt composition and resource loading.

use std::path::PathBuf;

/// Failure while rendering the twin prompt.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PromptError {
    /// A required key is absent from the facts mapping.
    #[error("facts are missing required key `{key}`")]
    MissingFact { key: String },
}

/// Failure while loading resources from disk.
#[derive(Debug, thiserror::Error)]
pub enum ResourceError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `facts.json` is not a flat object of string values.
    #[error("invalid facts in {}: {source}", .path.display())]
    Facts {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
