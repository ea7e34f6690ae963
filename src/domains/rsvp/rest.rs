use axum::{
  extract::{Json, Path, State},
  response::Json as JsonResponse,
  routing::{get, post},
  Router,
};

use super::model::{CreateRsvpRequest, Rsvp, UserRsvpsResponse};
use crate::{
  state::{AppState, SharedAppState},
  AppError,
};

pub fn rsvp_routes() -> Router<SharedAppState> {
  Router::new()
    .route("/rsvps", post(create_rsvp_handler))
    .route("/users/{user_id}/rsvps", get(get_user_rsvps_handler))
}

pub async fn create_rsvp_handler(
  State(state): State<SharedAppState>,
  Json(payload): Json<CreateRsvpRequest>,
) -> Result<JsonResponse<Rsvp>, AppError> {
  state.create_rsvp(payload).await.map(JsonResponse).map_err(Into::into)
}

pub async fn get_user_rsvps_handler(
  State(state): State<SharedAppState>,
  Path(user_id): Path<i32>,
) -> Result<JsonResponse<UserRsvpsResponse>, AppError> {
  state
    .get_user_rsvps(user_id)
    .await
    .map(JsonResponse)
    .map_err(Into::into)
}
