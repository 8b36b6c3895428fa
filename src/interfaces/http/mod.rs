//! HTTP REST API interfaces
//!
//! - `common`: Shared response envelope
//! - `modules`: Per-resource handlers and DTOs
//! - `router`: API router with Swagger documentation

pub mod common;
pub mod modules;
pub mod router;

pub use router::create_api_router;
