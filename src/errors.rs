use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The value could not be round-tripped through JSON.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Resource {logical_id} is of type {found}, not {expected}")]
    ResourceTypeMismatch {
        logical_id: String,
        expected: String,
        found: String,
    },

    #[error("Resource {0} not found in template")]
    ResourceNotFound(String),

    #[error("Invalid intrinsic function: {0}")]
    InvalidIntrinsic(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yml::Error),
}
