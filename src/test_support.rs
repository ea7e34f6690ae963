use axum::{
  body::{Body, Bytes},
  http::{Request, StatusCode},
  Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;
use tower::ServiceExt;

use crate::{
  app::create_app,
  domains::{
    meetup::model::Meetup,
    user::{
      model::User,
      repository::{SqlxUserRepository, UserRepository},
    },
  },
  state::SharedAppState,
};

pub async fn app_with_pool(pool: PgPool) -> Router {
  let state = SharedAppState::new(pool).await;
  create_app(state)
}

pub async fn post_json<T: Serialize>(app: Router, uri: &str, body: &T) -> (StatusCode, Bytes) {
  let request = Request::builder()
    .method("POST")
    .uri(uri)
    .header("content-type", "application/json")
    .body(Body::from(serde_json::to_vec(body).expect("serialize request body")))
    .expect("build request");

  let response = app.oneshot(request).await.expect("handle request");
  let status = response.status();
  let body = axum::body::to_bytes(response.into_body(), usize::MAX)
    .await
    .expect("read response body");
  (status, body)
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, Bytes) {
  let request = Request::builder()
    .method("GET")
    .uri(uri)
    .body(Body::empty())
    .expect("build request");

  let response = app.oneshot(request).await.expect("handle request");
  let status = response.status();
  let body = axum::body::to_bytes(response.into_body(), usize::MAX)
    .await
    .expect("read response body");
  (status, body)
}

pub async fn create_user(pool: &PgPool, email: &str) -> User {
  SqlxUserRepository::new(pool.clone())
    .create(email, "Test User", &crate::utils::hash_password("password123"))
    .await
    .expect("create test user")
}

pub async fn create_meetup(pool: &PgPool, organizer_id: i32, date: DateTime<Utc>) -> Meetup {
  crate::domains::meetup::repository::create(
    pool,
    "Test Meetup",
    "A meetup for testing",
    date,
    "18:00",
    "Test Location",
    organizer_id,
  )
  .await
  .expect("create test meetup")
}
