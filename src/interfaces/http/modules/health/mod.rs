//! Health module — server liveness and database reachability

pub mod handlers;

pub use handlers::*;
