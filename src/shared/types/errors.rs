use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("User not found: {user_id}")]
    UserNotFound { user_id: String },

    #[error("User is frozen and cannot be renamed")]
    FrozenUser,

    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        Self::Storage(e.to_string())
    }
}

impl DomainError {
    /// Whether this error is likely transient (e.g. DB connection lost)
    /// and the operation may succeed if retried. The repository itself
    /// never retries; this is for callers.
    pub fn is_transient(&self) -> bool {
        matches!(self, DomainError::Storage(_))
    }
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
