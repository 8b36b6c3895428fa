pub mod user;

// Re-export commonly used types
pub use user::{User, UserRepository, UserStatus};

// Errors live in shared so infrastructure can convert into them
pub use crate::shared::types::errors::{DomainError, DomainResult};
