use crate::types::DbId;

/// Boxed error coming out of a [`FormationStore`](super::FormationStore).
pub type StoreError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, thiserror::Error)]
pub enum AssignmentError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Theme with id {theme_id} not found")]
    NotFound { theme_id: DbId },

    #[error("Voting for theme {theme_id} is still open")]
    Precondition { theme_id: DbId },

    #[error("Groups have already been formed for theme {theme_id}")]
    AlreadyFormed { theme_id: DbId },

    #[error("Storage failure: {0}")]
    Storage(#[source] StoreError),

    #[error("Group assignment for theme {theme_id} timed out after {secs}s")]
    Timeout { theme_id: DbId, secs: u64 },

    #[error("Group assignment failed for theme {theme_id}: {source}")]
    PartialFailure {
        theme_id: DbId,
        #[source]
        source: Box<AssignmentError>,
    },
}

impl AssignmentError {
    pub fn storage<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Storage(Box::new(err))
    }
}
