//! SeaORM implementation of UserRepository

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use crate::domain::{DomainError, NewUser, User, UserRepository};
use crate::models::user::{ActiveModel, Column, Entity as UserEntity};

/// SeaORM-based implementation of UserRepository
pub struct SeaOrmUserRepository {
    db: DatabaseConnection,
}

impl SeaOrmUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, DomainError> {
        Ok(UserEntity::find_by_id(id).one(&self.db).await?)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        Ok(UserEntity::find()
            .filter(Column::Username.eq(username))
            .one(&self.db)
            .await?)
    }

    async fn create(&self, user: NewUser) -> Result<User, DomainError> {
        let active = ActiveModel {
            username: Set(user.username),
            password_hash: Set(user.password_hash),
            phone_number: Set(user.phone_number),
            email: Set(user.email),
            registration_date: Set(chrono::Utc::now().to_rfc3339()),
            ..Default::default()
        };

        active.insert(&self.db).await.map_err(|e| {
            DomainError::on_unique_violation(
                e,
                DomainError::Conflict("Username already taken".to_string()),
            )
        })
    }

    async fn update_email(&self, id: i32, email: Option<String>) -> Result<User, DomainError> {
        let existing = UserEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(DomainError::NotFound)?;

        let mut active: ActiveModel = existing.into();
        active.email = Set(email);

        Ok(active.update(&self.db).await?)
    }
}
