//! # Account Service
//!
//! User account management over a document-style store, exposed through
//! a REST read endpoint.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: The user aggregate and the repository trait
//! - **infrastructure**: SeaORM-backed repository, migrations, and the
//!   in-memory repository used for tests and database-free runs
//! - **interfaces**: REST API with Swagger documentation
//! - **shared**: Errors and the cursor-pagination page split

pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod shared;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig, InMemoryUserRepository};

// Re-export API router
pub use interfaces::http::create_api_router;
