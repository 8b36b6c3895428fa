//! User DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{User, UserStatus};

/// User API representation
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GetUserResponse {
    pub name: String,
    /// `"normal"` or `"frozen"`
    pub status: String,
    /// RFC 3339 UTC timestamp
    #[serde(rename = "registeredAt")]
    pub registered_at: DateTime<Utc>,
}

impl From<User> for GetUserResponse {
    fn from(u: User) -> Self {
        Self {
            name: u.name,
            status: status_to_str(u.status).to_string(),
            registered_at: u.registered_at,
        }
    }
}

fn status_to_str(status: UserStatus) -> &'static str {
    match status {
        UserStatus::Normal => "normal",
        UserStatus::Frozen => "frozen",
    }
}

/// Path parameter of the get-user endpoint
#[derive(Debug, Validate)]
pub struct UserIdPath {
    #[validate(length(min = 1, max = 100, message = "user id must be 1-100 characters"))]
    pub user_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn response_serializes_the_wire_shape() {
        let user = User {
            id: "U1".to_string(),
            name: "Alice".to_string(),
            status: UserStatus::Frozen,
            registered_at: Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap(),
        };

        let body = serde_json::to_value(GetUserResponse::from(user)).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "name": "Alice",
                "status": "frozen",
                "registeredAt": "2000-01-01T00:00:00Z",
            })
        );
    }

    #[test]
    fn user_id_length_is_bounded() {
        assert!(UserIdPath { user_id: "U1".into() }.validate().is_ok());
        assert!(UserIdPath { user_id: "".into() }.validate().is_err());
        assert!(UserIdPath {
            user_id: "x".repeat(101)
        }
        .validate()
        .is_err());
    }
}
