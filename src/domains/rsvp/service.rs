use async_trait::async_trait;
use sqlx::PgPool;
use std::error::Error;

use super::model::{CreateRsvpRequest, Rsvp, UserRsvpsResponse};
use super::repository;

#[derive(Debug)]
pub enum RsvpServiceError {
  AlreadyRsvpd(String),
  InvalidReference(String),
  InternalServerError(String),
}

impl Error for RsvpServiceError {}

impl std::fmt::Display for RsvpServiceError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      RsvpServiceError::AlreadyRsvpd(msg) => write!(f, "Already RSVP'd: {}", msg),
      RsvpServiceError::InvalidReference(msg) => write!(f, "Invalid Reference: {}", msg),
      RsvpServiceError::InternalServerError(msg) => write!(f, "Internal Server Error: {}", msg),
    }
  }
}

impl From<sqlx::Error> for RsvpServiceError {
  fn from(err: sqlx::Error) -> Self {
    RsvpServiceError::InternalServerError(format!("Database error: {}", err))
  }
}

#[async_trait]
pub trait RsvpService: Send + Sync {
  async fn create_rsvp(&self, req: CreateRsvpRequest) -> Result<Rsvp, RsvpServiceError>;
  async fn get_user_rsvps(&self, user_id: i32) -> Result<UserRsvpsResponse, RsvpServiceError>;
}

pub struct RsvpServiceImpl {
  db: PgPool,
}

impl RsvpServiceImpl {
  pub fn new(db: PgPool) -> Self {
    Self { db }
  }
}

#[async_trait]
impl RsvpService for RsvpServiceImpl {
  async fn create_rsvp(&self, req: CreateRsvpRequest) -> Result<Rsvp, RsvpServiceError> {
    // The (user_id, meetup_id) unique constraint arbitrates concurrent
    // duplicate attempts: one insert wins, the other lands here.
    match repository::create(&self.db, req.user_id, req.meetup_id).await {
      Ok(rsvp) => Ok(rsvp),
      Err(sqlx::Error::Database(db)) if db.is_unique_violation() => Err(RsvpServiceError::AlreadyRsvpd(
        "You may have already RSVP'd to this meetup".to_string(),
      )),
      Err(sqlx::Error::Database(db)) if db.is_foreign_key_violation() => Err(RsvpServiceError::InvalidReference(
        "User or meetup does not exist".to_string(),
      )),
      Err(e) => {
        tracing::error!("Failed to create RSVP: {:?}", e);
        Err(RsvpServiceError::InternalServerError(format!(
          "Failed to create RSVP: {}",
          e
        )))
      }
    }
  }

  async fn get_user_rsvps(&self, user_id: i32) -> Result<UserRsvpsResponse, RsvpServiceError> {
    let meetups = repository::find_meetups_for_user(&self.db, user_id).await?;
    Ok(UserRsvpsResponse { meetups })
  }
}
