use axum::{
  extract::{Json, State},
  response::Json as JsonResponse,
  routing::{post, Router},
};

use super::model::{AuthResponse, LoginRequest, RegisterRequest};
use crate::{
  state::{AppState, SharedAppState},
  AppError,
};

pub fn user_routes() -> Router<SharedAppState> {
  Router::new()
    .route("/register", post(register_handler))
    .route("/login", post(login_handler))
}

pub async fn register_handler(
  State(state): State<SharedAppState>,
  Json(payload): Json<RegisterRequest>,
) -> Result<JsonResponse<AuthResponse>, AppError> {
  state.register_user(payload).await.map(JsonResponse).map_err(Into::into)
}

pub async fn login_handler(
  State(state): State<SharedAppState>,
  Json(payload): Json<LoginRequest>,
) -> Result<JsonResponse<AuthResponse>, AppError> {
  state.login_user(payload).await.map(JsonResponse).map_err(Into::into)
}
