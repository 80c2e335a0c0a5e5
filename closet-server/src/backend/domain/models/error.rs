use thiserror::Error;

/// Errors surfaced by closet operations.
///
/// None of these are fatal; callers show a message and keep going.
#[derive(Debug, Error)]
pub enum ClosetError {
    /// Input must be corrected; nothing was mutated
    #[error("{0}")]
    Validation(String),
    /// The operation referenced an id (or date) that does not exist
    #[error("{0}")]
    NotFound(String),
    /// The store write failed; in-memory state was rolled back
    #[error("Changes not saved: {0}")]
    Persistence(#[source] anyhow::Error),
}

impl ClosetError {
    pub fn validation(message: impl Into<String>) -> Self {
        ClosetError::Validation(message.into())
    }

    pub fn item_not_found(item_id: &str) -> Self {
        ClosetError::NotFound(format!("Item not found: {}", item_id))
    }

    /// Short machine-readable kind, used in API error bodies
    pub fn kind(&self) -> &'static str {
        match self {
            ClosetError::Validation(_) => "validation",
            ClosetError::NotFound(_) => "not_found",
            ClosetError::Persistence(_) => "persistence",
        }
    }
}

pub type ClosetResult<T> = Result<T, ClosetError>;
