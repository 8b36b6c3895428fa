//! User aggregate
//!
//! Contains the User entity and the repository interface.

pub mod model;
pub mod repository;

// Re-export model types
pub use model::{User, UserStatus};

// Re-export repository trait
pub use repository::UserRepository;
