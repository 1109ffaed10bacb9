use thiserror::Error;

/// Errors reported by a storage adapter
///
/// Adapters only know about persistence conditions. The lifecycle layer
/// decides how each one surfaces to callers.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Duplicate entry: {0}")]
    Duplicate(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Backend failure: {0}")]
    Backend(String),

    #[error("Stored data could not be read back: {0}")]
    Corrupt(String),
}

/// Error taxonomy of the roster lifecycle operations
#[derive(Debug, Error)]
pub enum RosterError {
    /// Input failed a syntactic rule (empty name, unknown team label)
    #[error("{0}")]
    Validation(String),

    /// A uniqueness invariant would be violated
    #[error("{0}")]
    Conflict(String),

    /// The referenced group or player does not exist
    #[error("{0}")]
    NotFound(String),

    /// Persistence failed for a reason the lifecycle does not recognize
    #[error("Storage failure: {0}")]
    Storage(#[source] StorageError),
}

impl RosterError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Short machine-readable name of the error kind
    pub fn kind(&self) -> &'static str {
        match self {
            RosterError::Validation(_) => "validation",
            RosterError::Conflict(_) => "conflict",
            RosterError::NotFound(_) => "not_found",
            RosterError::Storage(_) => "storage",
        }
    }
}

pub type RosterResult<T> = Result<T, RosterError>;
