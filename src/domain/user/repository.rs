use async_trait::async_trait;

use super::User;
use crate::domain::DomainResult;
use crate::shared::CursorPage;

/// Persistence boundary for the user aggregate.
///
/// The store holds one document per user, keyed by `id`. Implementations
/// add no locking and no retries; each call is a single round trip and
/// the store's per-document atomicity is the only write guarantee.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Point lookup by id. Returns `DomainError::UserNotFound` when no
    /// document has that key.
    async fn get(&self, user_id: &str) -> DomainResult<User>;

    /// Cursor-paginated listing in ascending id order.
    ///
    /// Pass the empty string as `exclusive_start_key` on the first call;
    /// on every later call pass the previous page's `last_evaluated_key`.
    /// An empty `last_evaluated_key` in the response means the scan is
    /// done — feeding it back in would restart from the beginning.
    ///
    /// `limit` caps the page size; zero or negative means unlimited
    /// (the whole remainder in one page).
    async fn list(&self, exclusive_start_key: &str, limit: i64) -> DomainResult<CursorPage<User>>;

    /// Upsert: fully overwrites the document for `user.id`, creating it
    /// if absent. Never a partial update.
    async fn put(&self, user: &User) -> DomainResult<()>;

    /// Idempotent removal. Deleting an id with no document is success,
    /// not an error.
    async fn delete(&self, user_id: &str) -> DomainResult<()>;
}
