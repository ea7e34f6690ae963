use axum::{response::Json as JsonResponse, routing::get, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;

use crate::{
  domains::{meetup::rest::meetup_routes, rsvp::rest::rsvp_routes, user::rest::user_routes},
  state::SharedAppState,
};

pub fn create_app(state: SharedAppState) -> Router {
  let api_routes = Router::new()
    .route("/healthcheck", get(healthcheck_handler))
    .merge(user_routes())
    .merge(meetup_routes())
    .merge(rsvp_routes());

  Router::new()
    .nest("/api/v1", api_routes)
    .layer(CorsLayer::permissive())
    .with_state(state)
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HealthcheckResponse {
  pub status: String,
  pub timestamp: DateTime<Utc>,
}

pub async fn healthcheck_handler() -> JsonResponse<HealthcheckResponse> {
  JsonResponse(HealthcheckResponse {
    status: "ok".to_string(),
    timestamp: Utc::now(),
  })
}
