//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{extract::FromRef, routing::get, Router};
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::domain::UserRepository;
use crate::interfaces::http::common::ApiResponse;
use crate::interfaces::http::modules::{health, users};

/// Unified state for all routes. Axum extracts each handler's own
/// state via `FromRef`.
#[derive(Clone)]
pub struct ApiState {
    pub users: Arc<dyn UserRepository>,
    pub db: DatabaseConnection,
    pub started_at: Arc<Instant>,
}

impl FromRef<ApiState> for users::UserHandlerState {
    fn from_ref(s: &ApiState) -> Self {
        users::UserHandlerState {
            users: Arc::clone(&s.users),
        }
    }
}

impl FromRef<ApiState> for health::HealthState {
    fn from_ref(s: &ApiState) -> Self {
        health::HealthState {
            db: s.db.clone(),
            started_at: Arc::clone(&s.started_at),
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::health_check,
        // Users
        users::get_user,
    ),
    components(
        schemas(
            ApiResponse<String>,
            users::GetUserResponse,
            health::HealthResponse,
            health::ComponentHealth,
        )
    ),
    tags(
        (name = "Health", description = "Server health check endpoints"),
        (name = "Users", description = "User account read access"),
    ),
    info(
        title = "Account Service API",
        version = "1.0.0",
        description = "REST API for reading user accounts",
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(users: Arc<dyn UserRepository>, db: DatabaseConnection) -> Router {
    let state = ApiState {
        users,
        db,
        started_at: Arc::new(Instant::now()),
    };

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/health", get(health::health_check))
        .route("/api/v1/users/{user_id}", get(users::get_user))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
