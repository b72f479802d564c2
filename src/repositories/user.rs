//! User repository for database operations.

use anyhow::Result;
use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter};
use uuid::Uuid;

use crate::entities::user;

/// Repository for author lookups and registration.
pub struct UserRepository;

impl UserRepository {
    /// Insert a user with a fresh UUID.
    pub async fn create<C>(conn: &C, name: &str, email: &str) -> Result<user::Model>
    where
        C: ConnectionTrait,
    {
        let model = user::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4().to_string()),
            name: ActiveValue::Set(name.to_string()),
            email: ActiveValue::Set(email.to_string()),
        };
        Ok(model.insert(conn).await?)
    }

    /// Get a single user by id.
    pub async fn get_by_id<C>(conn: &C, id: &str) -> Result<Option<user::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(user::Entity::find_by_id(id.to_string()).one(conn).await?)
    }

    /// Get a single user by email.
    pub async fn get_by_email<C>(conn: &C, email: &str) -> Result<Option<user::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .one(conn)
            .await?)
    }
}
