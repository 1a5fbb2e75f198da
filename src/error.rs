use thiserror::Error;

/// Main error type for quern operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QuernError {
    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Child index {index} out of range for node with {len} children")]
    ChildIndexOutOfRange { index: usize, len: usize },

    #[error("Field already exists: {0}")]
    DuplicateField(String),

    #[error("Too many fields: a schema holds at most {max}")]
    TooManyFields { max: usize },

    #[error("Index already exists: {0}")]
    IndexAlreadyExists(String),

    #[error("Index not found: {0}")]
    IndexNotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for quern operations
pub type Result<T> = std::result::Result<T, QuernError>;

impl QuernError {
    /// Whether the error is a caller contract violation rather than a lookup failure
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            QuernError::InvalidOperation(_)
                | QuernError::InvalidArgument(_)
                | QuernError::ChildIndexOutOfRange { .. }
        )
    }
}

impl From<serde_json::Error> for QuernError {
    fn from(err: serde_json::Error) -> Self {
        QuernError::Config(err.to_string())
    }
}
