use axum::{
  extract::{Json, State},
  response::Json as JsonResponse,
  routing::{get, post},
  Router,
};

use super::model::{CreateMeetupRequest, Meetup, UpcomingMeetupsResponse};
use crate::{
  state::{AppState, SharedAppState},
  AppError,
};

pub fn meetup_routes() -> Router<SharedAppState> {
  Router::new()
    .route("/meetups", post(create_meetup_handler))
    .route("/meetups/upcoming", get(get_upcoming_meetups_handler))
}

pub async fn create_meetup_handler(
  State(state): State<SharedAppState>,
  Json(payload): Json<CreateMeetupRequest>,
) -> Result<JsonResponse<Meetup>, AppError> {
  state.create_meetup(payload).await.map(JsonResponse).map_err(Into::into)
}

pub async fn get_upcoming_meetups_handler(
  State(state): State<SharedAppState>,
) -> Result<JsonResponse<UpcomingMeetupsResponse>, AppError> {
  state
    .get_upcoming_meetups()
    .await
    .map(JsonResponse)
    .map_err(Into::into)
}

#[cfg(test)]
mod tests {
  use super::super::model::{CreateMeetupRequest, Meetup, UpcomingMeetupsResponse};
  use crate::test_support::{app_with_pool, create_user, get, post_json};
  use axum::http::StatusCode;
  use chrono::{Duration, Utc};

  fn meetup_payload(organizer_id: i32) -> CreateMeetupRequest {
    CreateMeetupRequest {
      title: "Rust Meetup".to_string(),
      description: "Monthly Rust get-together".to_string(),
      date: Utc::now() + Duration::days(1),
      time: "18:00".to_string(),
      location: "Community Hall".to_string(),
      organizer_id,
    }
  }

  #[sqlx::test(migrations = "./migrations")]
  async fn create_meetup_success(pool: sqlx::PgPool) -> Result<(), sqlx::Error> {
    let app = app_with_pool(pool.clone()).await;
    let user = create_user(&pool, "organizer@example.com").await;

    let (status, body) = post_json(app, "/api/v1/meetups", &meetup_payload(user.id)).await;
    assert_eq!(status, StatusCode::OK);

    let meetup: Meetup = serde_json::from_slice(&body).expect("deserialize response");
    assert_eq!(meetup.title, "Rust Meetup");
    assert_eq!(meetup.organizer_id, user.id);
    assert!(meetup.id > 0);

    Ok(())
  }

  #[sqlx::test(migrations = "./migrations")]
  async fn create_meetup_past_date_rejected(pool: sqlx::PgPool) -> Result<(), sqlx::Error> {
    let app = app_with_pool(pool.clone()).await;
    let user = create_user(&pool, "past-date@example.com").await;

    let mut payload = meetup_payload(user.id);
    payload.date = Utc::now() - Duration::days(1);

    let (status, _) = post_json(app, "/api/v1/meetups", &payload).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Rejected before any row was written.
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM meetups")
      .fetch_one(&pool)
      .await?;
    assert_eq!(count, 0);

    Ok(())
  }

  #[sqlx::test(migrations = "./migrations")]
  async fn create_meetup_invalid_time_rejected(pool: sqlx::PgPool) -> Result<(), sqlx::Error> {
    let app = app_with_pool(pool.clone()).await;
    let user = create_user(&pool, "bad-time@example.com").await;

    let mut payload = meetup_payload(user.id);
    payload.time = "24:00".to_string();

    let (status, _) = post_json(app, "/api/v1/meetups", &payload).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    Ok(())
  }

  #[sqlx::test(migrations = "./migrations")]
  async fn create_meetup_empty_title_rejected(pool: sqlx::PgPool) -> Result<(), sqlx::Error> {
    let app = app_with_pool(pool.clone()).await;
    let user = create_user(&pool, "empty-title@example.com").await;

    let mut payload = meetup_payload(user.id);
    payload.title = "".to_string();

    let (status, _) = post_json(app, "/api/v1/meetups", &payload).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    Ok(())
  }

  #[sqlx::test(migrations = "./migrations")]
  async fn create_meetup_unknown_organizer_rejected(pool: sqlx::PgPool) -> Result<(), sqlx::Error> {
    let app = app_with_pool(pool).await;

    let (status, body) = post_json(app, "/api/v1/meetups", &meetup_payload(99999)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let error: serde_json::Value = serde_json::from_slice(&body).expect("deserialize error");
    assert_eq!(error["error"], "Organizer does not exist");

    Ok(())
  }

  #[sqlx::test(migrations = "./migrations")]
  async fn upcoming_meetups_empty(pool: sqlx::PgPool) -> Result<(), sqlx::Error> {
    let app = app_with_pool(pool).await;

    let (status, body) = get(app, "/api/v1/meetups/upcoming").await;
    assert_eq!(status, StatusCode::OK);

    let response: UpcomingMeetupsResponse = serde_json::from_slice(&body).expect("deserialize response");
    assert!(response.meetups.is_empty());

    Ok(())
  }

  #[sqlx::test(migrations = "./migrations")]
  async fn upcoming_meetups_reports_counts(pool: sqlx::PgPool) -> Result<(), sqlx::Error> {
    let app = app_with_pool(pool.clone()).await;
    let organizer = create_user(&pool, "upcoming-organizer@example.com").await;
    let attendee = create_user(&pool, "upcoming-attendee@example.com").await;

    let meetup = crate::test_support::create_meetup(&pool, organizer.id, Utc::now() + Duration::days(1)).await;
    crate::domains::rsvp::repository::create(&pool, attendee.id, meetup.id).await?;

    let (status, body) = get(app, "/api/v1/meetups/upcoming").await;
    assert_eq!(status, StatusCode::OK);

    let response: UpcomingMeetupsResponse = serde_json::from_slice(&body).expect("deserialize response");
    assert_eq!(response.meetups.len(), 1);
    assert_eq!(response.meetups[0].id, meetup.id);
    assert_eq!(response.meetups[0].rsvp_count, 1);

    Ok(())
  }
}
