use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::{DomainError, DomainResult};

/// Account status of a user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserStatus {
    Normal,
    Frozen,
}

impl Default for UserStatus {
    fn default() -> Self {
        Self::Normal
    }
}

/// User model
///
/// A value held by a caller is a detached snapshot; mutations only
/// reach the store when the aggregate is handed back to
/// [`UserRepository::put`](super::UserRepository::put).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct User {
    /// Opaque unique identifier, assigned once at creation
    pub id: String,
    pub name: String,
    pub status: UserStatus,
    /// Set once at creation, never mutated
    pub registered_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with a fresh unique id and `Normal` status.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            status: UserStatus::Normal,
            registered_at: Utc::now(),
        }
    }

    pub fn is_frozen(&self) -> bool {
        self.status == UserStatus::Frozen
    }

    /// Freeze the account. Idempotent; freezing a frozen user is a no-op.
    pub fn freeze(&mut self) {
        self.status = UserStatus::Frozen;
    }

    /// Unfreeze the account. Idempotent.
    pub fn unfreeze(&mut self) {
        self.status = UserStatus::Normal;
    }

    /// Rename the user. Frozen users cannot be renamed; in that case
    /// the name is left untouched and `DomainError::FrozenUser` is
    /// returned.
    pub fn change_name(&mut self, name: impl Into<String>) -> DomainResult<()> {
        if self.is_frozen() {
            return Err(DomainError::FrozenUser);
        }

        self.name = name.into();
        Ok(())
    }
}
