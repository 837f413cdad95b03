//! Tradespace errors

use thiserror::Error;

/// Tradespace result type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while decoding documents or expanding a design space
#[derive(Debug, Error)]
pub enum Error {
    #[error("malformed {entity} document: {source}")]
    Malformed {
        entity: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{entity} is missing required field `{field}`")]
    MissingField {
        entity: &'static str,
        field: &'static str,
    },

    #[error("invalid {entity}: {message}")]
    Invalid {
        entity: &'static str,
        message: String,
    },

    #[error("unsupported constellation type: {0}")]
    UnsupportedConstellationType(String),
}
