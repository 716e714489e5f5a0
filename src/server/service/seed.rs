//! Startup seeding of lookup data and the bootstrap admin account.

use entity::user::UserRole;
use sea_orm::DatabaseConnection;

use crate::server::{
    config::Config,
    data::{shift_role::ShiftRoleRepository, user::UserRepository},
    error::AppError,
    model::user::CreateUserParams,
    util::password::hash_password,
};

/// Roles inserted into an empty role table.
pub const DEFAULT_SHIFT_ROLES: [&str; 3] = ["Cleaner", "Cook", "Mover"];

const SEED_ACTOR: &str = "system";

pub struct SeedService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SeedService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Seeds default roles and the configured admin. Safe to run on every start.
    pub async fn seed(&self, config: &Config) -> Result<(), AppError> {
        self.seed_roles().await?;

        if let (Some(email), Some(password)) =
            (&config.seed_admin_email, &config.seed_admin_password)
        {
            self.seed_admin(email, password).await?;
        }

        Ok(())
    }

    /// Inserts the default roles when no role row exists.
    ///
    /// # Returns
    /// - `Ok(n)` - Number of roles inserted (0 when the table was not empty)
    pub async fn seed_roles(&self) -> Result<usize, AppError> {
        let role_repo = ShiftRoleRepository::new(self.db);

        if role_repo.count().await? > 0 {
            return Ok(0);
        }

        for role_name in DEFAULT_SHIFT_ROLES {
            role_repo
                .create(role_name.to_string(), SEED_ACTOR.to_string())
                .await?;
        }

        tracing::info!("Seeded {} shift roles", DEFAULT_SHIFT_ROLES.len());

        Ok(DEFAULT_SHIFT_ROLES.len())
    }

    /// Creates an admin account unless the email is already registered.
    ///
    /// # Returns
    /// - `Ok(true)` - Admin created
    /// - `Ok(false)` - Email already taken; nothing changed
    pub async fn seed_admin(&self, email: &str, password: &str) -> Result<bool, AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.find_by_email(email).await?.is_some() {
            return Ok(false);
        }

        let password_hash = hash_password(password)?;
        user_repo
            .create(CreateUserParams {
                first_name: "admin".to_string(),
                last_name: "rms".to_string(),
                email: email.to_string(),
                password_hash,
                role: UserRole::Admin,
                created_by: SEED_ACTOR.to_string(),
            })
            .await?;

        tracing::info!("Seeded admin account {}", email);

        Ok(true)
    }
}
