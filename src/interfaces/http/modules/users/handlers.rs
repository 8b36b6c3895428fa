//! User read endpoint
//!
//! The transport layer is deliberately thin: it validates the id,
//! calls the repository, and maps `UserNotFound` / `Storage` to their
//! client-visible responses.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use super::dto::{GetUserResponse, UserIdPath};
use crate::domain::{DomainError, UserRepository};
use crate::interfaces::http::common::ApiResponse;

/// User handler state
#[derive(Clone)]
pub struct UserHandlerState {
    pub users: Arc<dyn UserRepository>,
}

#[utoipa::path(
    get,
    path = "/api/v1/users/{user_id}",
    tag = "Users",
    params(("user_id" = String, Path, description = "User ID (1-100 characters)")),
    responses(
        (status = 200, description = "User details", body = GetUserResponse),
        (status = 400, description = "Invalid user id"),
        (status = 404, description = "Not found"),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn get_user(
    State(state): State<UserHandlerState>,
    Path(user_id): Path<String>,
) -> Result<Json<GetUserResponse>, (StatusCode, Json<ApiResponse<()>>)> {
    let path = UserIdPath { user_id };
    if let Err(e) = path.validate() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error(format!("Invalid request: {}", e))),
        ));
    }

    match state.users.get(&path.user_id).await {
        Ok(user) => Ok(Json(GetUserResponse::from(user))),
        Err(e @ DomainError::UserNotFound { .. }) => Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error(e.to_string())),
        )),
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(e.to_string())),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::infrastructure::storage::InMemoryUserRepository;

    fn state_with(users: Arc<dyn UserRepository>) -> UserHandlerState {
        UserHandlerState { users }
    }

    #[tokio::test]
    async fn returns_the_stored_user() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let mut user = crate::domain::User::new("Alice");
        user.freeze();
        repo.put(&user).await.unwrap();

        let response = get_user(State(state_with(repo)), Path(user.id.clone()))
            .await
            .unwrap();

        assert_eq!(response.0.name, "Alice");
        assert_eq!(response.0.status, "frozen");
    }

    #[tokio::test]
    async fn unknown_user_maps_to_404() {
        let repo = Arc::new(InMemoryUserRepository::new());

        let (status, body) = get_user(State(state_with(repo)), Path("U1".to_string()))
            .await
            .unwrap_err();

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(!body.0.success);
    }

    #[tokio::test]
    async fn overlong_id_maps_to_400() {
        let repo = Arc::new(InMemoryUserRepository::new());

        let (status, _) = get_user(State(state_with(repo)), Path("x".repeat(101)))
            .await
            .unwrap_err();

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
