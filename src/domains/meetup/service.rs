use async_trait::async_trait;
use sqlx::PgPool;
use std::error::Error;
use validator::Validate;

use super::model::{CreateMeetupRequest, Meetup, UpcomingMeetupsResponse};
use super::repository;

#[derive(Debug)]
pub enum MeetupServiceError {
  ValidationError(String),
  OrganizerNotFound(String),
  InternalServerError(String),
}

impl Error for MeetupServiceError {}

impl std::fmt::Display for MeetupServiceError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      MeetupServiceError::ValidationError(msg) => write!(f, "Validation Error: {}", msg),
      MeetupServiceError::OrganizerNotFound(msg) => write!(f, "Organizer Not Found: {}", msg),
      MeetupServiceError::InternalServerError(msg) => write!(f, "Internal Server Error: {}", msg),
    }
  }
}

impl From<sqlx::Error> for MeetupServiceError {
  fn from(err: sqlx::Error) -> Self {
    MeetupServiceError::InternalServerError(format!("Database error: {}", err))
  }
}

#[async_trait]
pub trait MeetupService: Send + Sync {
  async fn create_meetup(&self, req: CreateMeetupRequest) -> Result<Meetup, MeetupServiceError>;
  async fn get_upcoming_meetups(&self) -> Result<UpcomingMeetupsResponse, MeetupServiceError>;
}

pub struct MeetupServiceImpl {
  db: PgPool,
}

impl MeetupServiceImpl {
  pub fn new(db: PgPool) -> Self {
    Self { db }
  }
}

#[async_trait]
impl MeetupService for MeetupServiceImpl {
  async fn create_meetup(&self, req: CreateMeetupRequest) -> Result<Meetup, MeetupServiceError> {
    // Future-date and time-format checks run here, before any row is written.
    req
      .validate()
      .map_err(|e| MeetupServiceError::ValidationError(format!("Validation failed: {}", e)))?;

    match repository::create(
      &self.db,
      &req.title,
      &req.description,
      req.date,
      &req.time,
      &req.location,
      req.organizer_id,
    )
    .await
    {
      Ok(meetup) => Ok(meetup),
      Err(sqlx::Error::Database(db)) if db.is_foreign_key_violation() => Err(MeetupServiceError::OrganizerNotFound(
        "Organizer does not exist".to_string(),
      )),
      Err(e) => {
        tracing::error!("Failed to create meetup: {:?}", e);
        Err(MeetupServiceError::InternalServerError(format!(
          "Failed to create meetup: {}",
          e
        )))
      }
    }
  }

  async fn get_upcoming_meetups(&self) -> Result<UpcomingMeetupsResponse, MeetupServiceError> {
    let meetups = repository::find_upcoming_with_rsvp_counts(&self.db).await?;
    Ok(UpcomingMeetupsResponse { meetups })
  }
}
