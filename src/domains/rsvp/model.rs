use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::domains::meetup::model::Meetup;

#[derive(Debug, Clone, FromRow, Deserialize, Serialize)]
pub struct Rsvp {
  pub id: i32,
  pub user_id: i32,
  pub meetup_id: i32,
  pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CreateRsvpRequest {
  pub user_id: i32,
  pub meetup_id: i32,
}

/// The meetups a user has RSVP'd to, as full meetup records.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UserRsvpsResponse {
  pub meetups: Vec<Meetup>,
}
