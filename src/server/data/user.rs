use chrono::Utc;
use entity::user::UserRole;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::user::{CreateUserParams, User};

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new user row.
    ///
    /// # Returns
    /// - `Ok(Model)`: The created user including its password hash
    /// - `Err(DbErr)`: Database error, including unique violations on `email`
    pub async fn create(&self, params: CreateUserParams) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            first_name: ActiveValue::Set(params.first_name),
            last_name: ActiveValue::Set(params.last_name),
            email: ActiveValue::Set(params.email),
            password_hash: ActiveValue::Set(params.password_hash),
            role: ActiveValue::Set(params.role),
            created_at: ActiveValue::Set(Utc::now()),
            created_by: ActiveValue::Set(params.created_by),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds a non-deleted user by id.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(id)
            .filter(entity::user::Column::DeletedAt.is_null())
            .one(self.db)
            .await
    }

    /// Finds a non-deleted user by exact email.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .filter(entity::user::Column::DeletedAt.is_null())
            .one(self.db)
            .await
    }

    /// Gets all non-deleted users with the given role, newest first.
    pub async fn get_by_role(&self, role: UserRole) -> Result<Vec<User>, DbErr> {
        let users = entity::prelude::User::find()
            .filter(entity::user::Column::Role.eq(role))
            .filter(entity::user::Column::DeletedAt.is_null())
            .order_by_desc(entity::user::Column::CreatedAt)
            .order_by_desc(entity::user::Column::Id)
            .all(self.db)
            .await?;

        Ok(users.into_iter().map(User::from_entity).collect())
    }
}
