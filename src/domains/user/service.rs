use async_trait::async_trait;
use std::error::Error;
use validator::Validate;

use super::{
  model::{AuthResponse, LoginRequest, RegisterRequest},
  repository::UserRepository,
};
use crate::utils::{hash_password, jwt::issue_token};

#[derive(Debug)]
pub enum UserServiceError {
  ValidationError(String),
  EmailAlreadyExists(String),
  InvalidCredentials(String),
  InternalServerError(String),
}

impl Error for UserServiceError {}

impl std::fmt::Display for UserServiceError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      UserServiceError::ValidationError(msg) => write!(f, "Validation Error: {}", msg),
      UserServiceError::EmailAlreadyExists(msg) => write!(f, "Email Already Exists: {}", msg),
      UserServiceError::InvalidCredentials(msg) => write!(f, "Invalid Credentials: {}", msg),
      UserServiceError::InternalServerError(msg) => write!(f, "Internal Server Error: {}", msg),
    }
  }
}

impl From<sqlx::Error> for UserServiceError {
  fn from(err: sqlx::Error) -> Self {
    UserServiceError::InternalServerError(format!("Database error: {}", err))
  }
}

#[async_trait]
pub trait UserService: Send + Sync {
  async fn register(&self, req: RegisterRequest) -> Result<AuthResponse, UserServiceError>;
  async fn login(&self, req: LoginRequest) -> Result<AuthResponse, UserServiceError>;
}

pub struct UserServiceImpl<U> {
  user_repository: U,
}

impl<U> UserServiceImpl<U>
where
  U: UserRepository,
{
  pub fn new(user_repository: U) -> Self {
    Self { user_repository }
  }
}

#[async_trait]
impl<U> UserService for UserServiceImpl<U>
where
  U: UserRepository,
{
  async fn register(&self, req: RegisterRequest) -> Result<AuthResponse, UserServiceError> {
    req
      .validate()
      .map_err(|e| UserServiceError::ValidationError(format!("Validation failed: {}", e)))?;

    let password_hash = hash_password(&req.password);

    // The unique constraint on users.email decides the duplicate case, so two
    // concurrent registrations cannot both succeed.
    let user = match self.user_repository.create(&req.email, &req.name, &password_hash).await {
      Ok(user) => user,
      Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
        return Err(UserServiceError::EmailAlreadyExists(
          "User with this email already exists".to_string(),
        ));
      }
      Err(e) => {
        return Err(UserServiceError::InternalServerError(format!(
          "Failed to create user: {}",
          e
        )));
      }
    };

    let token = issue_token(user.id, &user.email)
      .map_err(|e| UserServiceError::InternalServerError(format!("Token encoding failed: {}", e)))?;

    tracing::info!("Registered user {}", user.id);

    Ok(AuthResponse {
      user: user.into(),
      token,
    })
  }

  async fn login(&self, req: LoginRequest) -> Result<AuthResponse, UserServiceError> {
    let user = self
      .user_repository
      .find_by_email(&req.email)
      .await
      .map_err(|e| UserServiceError::InternalServerError(format!("Database error: {}", e)))?;

    // Unknown email and wrong password collapse into one message so callers
    // cannot probe which field was wrong.
    let user = match user {
      Some(user) => user,
      None => {
        return Err(UserServiceError::InvalidCredentials(
          "Invalid email or password".to_string(),
        ));
      }
    };

    if user.password_hash != hash_password(&req.password) {
      return Err(UserServiceError::InvalidCredentials(
        "Invalid email or password".to_string(),
      ));
    }

    let token = issue_token(user.id, &user.email)
      .map_err(|e| UserServiceError::InternalServerError(format!("Token encoding failed: {}", e)))?;

    Ok(AuthResponse {
      user: user.into(),
      token,
    })
  }
}
