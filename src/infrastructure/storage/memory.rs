//! In-memory repository implementation
//!
//! Interchangeable with the SeaORM repository behind `UserRepository`.
//! Used as a test double and for running without a database.

use async_trait::async_trait;
use dashmap::DashMap;

use crate::domain::{DomainError, DomainResult, User, UserRepository};
use crate::shared::{split_page, CursorPage};

/// In-memory storage for development and testing
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: DashMap<String, User>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn get(&self, user_id: &str) -> DomainResult<User> {
        self.users
            .get(user_id)
            .map(|u| u.clone())
            .ok_or_else(|| DomainError::UserNotFound {
                user_id: user_id.to_string(),
            })
    }

    async fn list(&self, exclusive_start_key: &str, limit: i64) -> DomainResult<CursorPage<User>> {
        let mut batch: Vec<User> = self
            .users
            .iter()
            .filter(|e| e.key().as_str() > exclusive_start_key)
            .map(|e| e.value().clone())
            .collect();
        batch.sort_by(|a, b| a.id.cmp(&b.id));

        // Same over-fetch shape as the database backend: at most
        // limit + 1 rows go into the page split.
        if limit > 0 {
            batch.truncate(limit as usize + 1);
        }

        Ok(split_page(batch, limit, |u| u.id.as_str()))
    }

    async fn put(&self, user: &User) -> DomainResult<()> {
        self.users.insert(user.id.clone(), user.clone());
        Ok(())
    }

    async fn delete(&self, user_id: &str) -> DomainResult<()> {
        // Absent key is fine: delete is idempotent
        self.users.remove(user_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    use crate::domain::UserStatus;

    fn user_with_id(id: &str) -> User {
        User {
            id: id.to_string(),
            name: format!("user {}", id),
            status: UserStatus::Normal,
            registered_at: Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    #[tokio::test]
    async fn get_after_put_round_trips() {
        let repo = InMemoryUserRepository::new();
        let user = user_with_id("U1");

        repo.put(&user).await.unwrap();
        let got = repo.get("U1").await.unwrap();

        assert_eq!(got, user);
    }

    #[tokio::test]
    async fn get_unknown_id_is_not_found() {
        let repo = InMemoryUserRepository::new();

        let err = repo.get("missing").await.unwrap_err();
        assert!(matches!(err, DomainError::UserNotFound { .. }));
    }

    #[tokio::test]
    async fn put_overwrites_the_whole_document() {
        let repo = InMemoryUserRepository::new();
        let mut user = user_with_id("U1");
        repo.put(&user).await.unwrap();

        user.change_name("renamed").unwrap();
        user.freeze();
        repo.put(&user).await.unwrap();

        let got = repo.get("U1").await.unwrap();
        assert_eq!(got.name, "renamed");
        assert_eq!(got.status, UserStatus::Frozen);

        // still exactly one document for the id
        let page = repo.list("", -1).await.unwrap();
        assert_eq!(page.items.len(), 1);
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let repo = InMemoryUserRepository::new();
        repo.put(&user_with_id("U1")).await.unwrap();

        repo.delete("U1").await.unwrap();
        repo.delete("U1").await.unwrap();
        repo.delete("never-existed").await.unwrap();

        let err = repo.get("U1").await.unwrap_err();
        assert!(matches!(err, DomainError::UserNotFound { .. }));
    }

    #[tokio::test]
    async fn list_on_empty_collection_returns_empty_final_page() {
        let repo = InMemoryUserRepository::new();

        for limit in [-1, 0, 10] {
            let page = repo.list("", limit).await.unwrap();
            assert!(page.items.is_empty());
            assert_eq!(page.last_evaluated_key, "");
        }
    }

    #[tokio::test]
    async fn list_with_non_positive_limit_returns_everything() {
        let repo = InMemoryUserRepository::new();
        for i in 0..7 {
            repo.put(&user_with_id(&format!("U{}", i))).await.unwrap();
        }

        for limit in [0, -1] {
            let page = repo.list("", limit).await.unwrap();
            assert_eq!(page.items.len(), 7);
            assert_eq!(page.last_evaluated_key, "");
        }
    }

    #[tokio::test]
    async fn list_page_of_exactly_the_remainder_is_final() {
        let repo = InMemoryUserRepository::new();
        for i in 0..5 {
            repo.put(&user_with_id(&format!("U{}", i))).await.unwrap();
        }

        let page = repo.list("", 5).await.unwrap();
        assert_eq!(page.items.len(), 5);
        assert_eq!(page.last_evaluated_key, "");
    }

    #[tokio::test]
    async fn paging_to_completion_yields_every_user_exactly_once() {
        let repo = InMemoryUserRepository::new();
        let total = 100;
        for i in 0..total {
            repo.put(&user_with_id(&format!("U{:03}", i))).await.unwrap();
        }

        let mut seen = Vec::new();
        let mut cursor = String::new();
        let mut rounds = 0;
        loop {
            let page = repo.list(&cursor, 10).await.unwrap();
            assert!(page.items.len() <= 10);
            seen.extend(page.items.into_iter().map(|u| u.id));

            rounds += 1;
            assert!(rounds <= total, "scan did not terminate");

            if page.last_evaluated_key.is_empty() {
                break;
            }
            cursor = page.last_evaluated_key;
        }

        assert_eq!(seen.len(), total);
        let expected: Vec<String> = (0..total).map(|i| format!("U{:03}", i)).collect();
        // ascending id order also rules out duplicates and omissions
        assert_eq!(seen, expected);
    }

    #[tokio::test]
    async fn list_resumes_strictly_after_the_cursor() {
        let repo = InMemoryUserRepository::new();
        for id in ["A", "B", "C", "D"] {
            repo.put(&user_with_id(id)).await.unwrap();
        }

        let first = repo.list("", 2).await.unwrap();
        assert_eq!(first.last_evaluated_key, "B");

        let second = repo.list(&first.last_evaluated_key, 2).await.unwrap();
        let ids: Vec<&str> = second.items.iter().map(|u| u.id.as_str()).collect();
        assert_eq!(ids, ["C", "D"]);
        assert_eq!(second.last_evaluated_key, "");
    }
}
