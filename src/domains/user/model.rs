use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

#[derive(Debug, Clone, FromRow)]
pub struct User {
  pub id: i32,
  pub email: String,
  pub name: String,
  pub password_hash: String,
  pub created_at: DateTime<Utc>,
}

/// Projection of a user safe to return to callers. The password hash never
/// leaves the service layer.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PublicUser {
  pub id: i32,
  pub email: String,
  pub name: String,
  pub created_at: DateTime<Utc>,
}

impl From<User> for PublicUser {
  fn from(user: User) -> Self {
    Self {
      id: user.id,
      email: user.email,
      name: user.name,
      created_at: user.created_at,
    }
  }
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct RegisterRequest {
  #[validate(email(message = "Invalid email address"))]
  pub email: String,
  #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
  pub password: String,
  #[validate(length(min = 1, message = "Name is required"))]
  pub name: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoginRequest {
  pub email: String,
  pub password: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthResponse {
  pub user: PublicUser,
  pub token: String,
}
