use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Database user model
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
}

/// JSON representation of a user for API responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDto {
    pub id: i64,
    pub username: String,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
        }
    }
}

/// Login request from a client
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login response to a client
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub authenticated: bool,
    #[serde(flatten)]
    pub user: UserDto,
}

impl LoginResponse {
    pub fn success(user: User) -> Self {
        Self {
            authenticated: true,
            user: UserDto::from(user),
        }
    }
}
