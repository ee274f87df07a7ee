use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use crate::{
    db::DbPool,
    error::{AppError, Result},
    models::user::User,
};

/// User store for database operations
#[derive(Clone)]
pub struct UserStore {
    pool: DbPool,
}

impl UserStore {
    /// Create a new UserStore with the provided database pool
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a user by username
    pub async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = ?")
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?;

        Ok(user)
    }

    /// Create a user, storing an argon2 hash of the password
    pub async fn create_user(&self, username: &str, password: &str) -> Result<User> {
        if self.get_user_by_username(username).await?.is_some() {
            return Err(AppError::BadRequest(format!(
                "User '{}' already exists",
                username
            )));
        }

        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)?
            .to_string();

        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, password_hash)
            VALUES (?, ?)
            RETURNING id, username, password_hash
            "#,
        )
        .bind(username)
        .bind(&password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)?;

        tracing::info!("Created user {} ({})", user.username, user.id);

        Ok(user)
    }

    /// Check a username/password pair
    pub async fn verify_credentials(&self, username: &str, password: &str) -> Result<User> {
        let invalid = || AppError::Auth("Invalid username or password".into());

        let user = self.get_user_by_username(username).await?.ok_or_else(invalid)?;
        let parsed = PasswordHash::new(&user.password_hash)?;

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .map_err(|_| invalid())?;

        Ok(user)
    }

    /// Create the default account if no user exists yet
    pub async fn seed_default_user(&self, username: &str, password: &str) -> Result<()> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if count.0 == 0 {
            self.create_user(username, password).await?;
        }

        Ok(())
    }
}
