use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

#[derive(Debug, Clone, FromRow, Deserialize, Serialize)]
pub struct Meetup {
  pub id: i32,
  pub title: String,
  pub description: String,
  pub date: DateTime<Utc>,
  pub time: String,
  pub location: String,
  pub organizer_id: i32,
  pub created_at: DateTime<Utc>,
}

/// A meetup projected together with the number of RSVPs referencing it.
/// Only used by the upcoming listing.
#[derive(Debug, Clone, FromRow, Deserialize, Serialize)]
pub struct MeetupWithRsvpCount {
  pub id: i32,
  pub title: String,
  pub description: String,
  pub date: DateTime<Utc>,
  pub time: String,
  pub location: String,
  pub organizer_id: i32,
  pub created_at: DateTime<Utc>,
  pub rsvp_count: i64,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct CreateMeetupRequest {
  #[validate(length(min = 1, message = "Title is required"))]
  pub title: String,
  #[validate(length(min = 1, message = "Description is required"))]
  pub description: String,
  #[validate(custom(function = crate::utils::validate_future_date))]
  pub date: DateTime<Utc>,
  #[validate(custom(function = crate::utils::validate_time_format))]
  pub time: String,
  #[validate(length(min = 1, message = "Location is required"))]
  pub location: String,
  pub organizer_id: i32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpcomingMeetupsResponse {
  pub meetups: Vec<MeetupWithRsvpCount>,
}
