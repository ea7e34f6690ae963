use axum::{
  http::StatusCode,
  response::{IntoResponse, Response},
  Json,
};
use serde_json::json;

#[derive(Debug)]
pub struct AppError {
  pub status_code: StatusCode,
  pub message: String,
}

impl AppError {
  pub fn new(status_code: StatusCode, message: impl Into<String>) -> Self {
    Self {
      status_code,
      message: message.into(),
    }
  }

  pub fn bad_request(message: impl Into<String>) -> Self {
    Self::new(StatusCode::BAD_REQUEST, message)
  }

  pub fn unauthorized(message: impl Into<String>) -> Self {
    Self::new(StatusCode::UNAUTHORIZED, message)
  }

  pub fn conflict(message: impl Into<String>) -> Self {
    Self::new(StatusCode::CONFLICT, message)
  }

  pub fn internal_server_error(message: impl Into<String>) -> Self {
    Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
  }
}

impl IntoResponse for AppError {
  fn into_response(self) -> Response {
    let body = Json(json!({
      "error": self.message,
      "status_code": self.status_code.as_u16(),
    }));

    (self.status_code, body).into_response()
  }
}

impl From<crate::domains::user::service::UserServiceError> for AppError {
  fn from(error: crate::domains::user::service::UserServiceError) -> Self {
    use crate::domains::user::service::UserServiceError;
    match error {
      UserServiceError::ValidationError(msg) => AppError::bad_request(msg),
      UserServiceError::EmailAlreadyExists(msg) => AppError::conflict(msg),
      UserServiceError::InvalidCredentials(msg) => AppError::unauthorized(msg),
      UserServiceError::InternalServerError(msg) => AppError::internal_server_error(msg),
    }
  }
}

impl From<crate::domains::meetup::service::MeetupServiceError> for AppError {
  fn from(error: crate::domains::meetup::service::MeetupServiceError) -> Self {
    use crate::domains::meetup::service::MeetupServiceError;
    match error {
      MeetupServiceError::ValidationError(msg) => AppError::bad_request(msg),
      MeetupServiceError::OrganizerNotFound(msg) => AppError::bad_request(msg),
      MeetupServiceError::InternalServerError(msg) => AppError::internal_server_error(msg),
    }
  }
}

impl From<crate::domains::rsvp::service::RsvpServiceError> for AppError {
  fn from(error: crate::domains::rsvp::service::RsvpServiceError) -> Self {
    use crate::domains::rsvp::service::RsvpServiceError;
    match error {
      RsvpServiceError::AlreadyRsvpd(msg) => AppError::conflict(msg),
      RsvpServiceError::InvalidReference(msg) => AppError::bad_request(msg),
      RsvpServiceError::InternalServerError(msg) => AppError::internal_server_error(msg),
    }
  }
}
