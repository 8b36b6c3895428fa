//! Users module — the single read endpoint over the user aggregate

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
