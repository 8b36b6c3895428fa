use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};

use crate::domain::{DomainError, DomainResult, User, UserRepository, UserStatus};
use crate::infrastructure::database::entities::user;
use crate::shared::{split_page, CursorPage};

pub struct SeaOrmUserRepository {
    db: DatabaseConnection,
}

impl SeaOrmUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn entity_status_to_domain(status: user::UserStatus) -> UserStatus {
    match status {
        user::UserStatus::Normal => UserStatus::Normal,
        user::UserStatus::Frozen => UserStatus::Frozen,
    }
}

fn domain_status_to_entity(status: UserStatus) -> user::UserStatus {
    match status {
        UserStatus::Normal => user::UserStatus::Normal,
        UserStatus::Frozen => user::UserStatus::Frozen,
    }
}

fn user_model_to_domain(model: user::Model) -> User {
    User {
        id: model.id,
        name: model.name,
        status: entity_status_to_domain(model.status),
        registered_at: model.registered_at,
    }
}

// ── Repository implementation ───────────────────────────────────

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn get(&self, user_id: &str) -> DomainResult<User> {
        let model = user::Entity::find_by_id(user_id).one(&self.db).await?;

        match model {
            Some(model) => Ok(user_model_to_domain(model)),
            None => Err(DomainError::UserNotFound {
                user_id: user_id.to_string(),
            }),
        }
    }

    async fn list(&self, exclusive_start_key: &str, limit: i64) -> DomainResult<CursorPage<User>> {
        let mut query = user::Entity::find().order_by_asc(user::Column::Id);

        if !exclusive_start_key.is_empty() {
            query = query.filter(user::Column::Id.gt(exclusive_start_key));
        }

        // Fetch one row beyond the page so a second round trip is never
        // needed to learn whether the scan can continue.
        if limit > 0 {
            query = query.limit(limit as u64 + 1);
        }

        let models = query.all(&self.db).await?;
        let users: Vec<User> = models.into_iter().map(user_model_to_domain).collect();

        Ok(split_page(users, limit, |u| u.id.as_str()))
    }

    async fn put(&self, user: &User) -> DomainResult<()> {
        let document = user::ActiveModel {
            id: Set(user.id.clone()),
            name: Set(user.name.clone()),
            status: Set(domain_status_to_entity(user.status)),
            registered_at: Set(user.registered_at),
        };

        // Upsert: every column is overwritten on conflict, so the stored
        // document always matches the supplied aggregate in full.
        user::Entity::insert(document)
            .on_conflict(
                OnConflict::column(user::Column::Id)
                    .update_columns([
                        user::Column::Name,
                        user::Column::Status,
                        user::Column::RegisteredAt,
                    ])
                    .to_owned(),
            )
            .exec(&self.db)
            .await?;

        Ok(())
    }

    async fn delete(&self, user_id: &str) -> DomainResult<()> {
        // Zero rows affected means the document was already gone, which
        // is success under the idempotent-delete contract.
        user::Entity::delete_by_id(user_id).exec(&self.db).await?;

        Ok(())
    }
}
