use std::sync::Arc;

use sqlx::PgPool;

use crate::domains::{
  meetup::{
    model::{CreateMeetupRequest, Meetup, UpcomingMeetupsResponse},
    service::{MeetupService, MeetupServiceError, MeetupServiceImpl},
  },
  rsvp::{
    model::{CreateRsvpRequest, Rsvp, UserRsvpsResponse},
    service::{RsvpService, RsvpServiceError, RsvpServiceImpl},
  },
  user::{
    model::{AuthResponse, LoginRequest, RegisterRequest},
    repository::SqlxUserRepository,
    service::{UserService, UserServiceError, UserServiceImpl},
  },
};

pub trait AppState: Clone + Send + Sync + 'static {
  fn register_user(
    &self,
    req: RegisterRequest,
  ) -> impl std::future::Future<Output = Result<AuthResponse, UserServiceError>> + Send;
  fn login_user(
    &self,
    req: LoginRequest,
  ) -> impl std::future::Future<Output = Result<AuthResponse, UserServiceError>> + Send;
  fn create_meetup(
    &self,
    req: CreateMeetupRequest,
  ) -> impl std::future::Future<Output = Result<Meetup, MeetupServiceError>> + Send;
  fn get_upcoming_meetups(
    &self,
  ) -> impl std::future::Future<Output = Result<UpcomingMeetupsResponse, MeetupServiceError>> + Send;
  fn create_rsvp(
    &self,
    req: CreateRsvpRequest,
  ) -> impl std::future::Future<Output = Result<Rsvp, RsvpServiceError>> + Send;
  fn get_user_rsvps(
    &self,
    user_id: i32,
  ) -> impl std::future::Future<Output = Result<UserRsvpsResponse, RsvpServiceError>> + Send;
}

#[derive(Clone)]
pub struct SharedAppState {
  pub user_service: Arc<UserServiceImpl<SqlxUserRepository>>,
  pub meetup_service: Arc<MeetupServiceImpl>,
  pub rsvp_service: Arc<RsvpServiceImpl>,
}

impl SharedAppState {
  pub async fn new(pool: PgPool) -> Self {
    let user_repository = SqlxUserRepository::new(pool.clone());
    let user_service = Arc::new(UserServiceImpl::new(user_repository));
    let meetup_service = Arc::new(MeetupServiceImpl::new(pool.clone()));
    let rsvp_service = Arc::new(RsvpServiceImpl::new(pool));

    Self {
      user_service,
      meetup_service,
      rsvp_service,
    }
  }
}

impl AppState for SharedAppState {
  async fn register_user(&self, req: RegisterRequest) -> Result<AuthResponse, UserServiceError> {
    self.user_service.register(req).await
  }

  async fn login_user(&self, req: LoginRequest) -> Result<AuthResponse, UserServiceError> {
    self.user_service.login(req).await
  }

  async fn create_meetup(&self, req: CreateMeetupRequest) -> Result<Meetup, MeetupServiceError> {
    self.meetup_service.create_meetup(req).await
  }

  async fn get_upcoming_meetups(&self) -> Result<UpcomingMeetupsResponse, MeetupServiceError> {
    self.meetup_service.get_upcoming_meetups().await
  }

  async fn create_rsvp(&self, req: CreateRsvpRequest) -> Result<Rsvp, RsvpServiceError> {
    self.rsvp_service.create_rsvp(req).await
  }

  async fn get_user_rsvps(&self, user_id: i32) -> Result<UserRsvpsResponse, RsvpServiceError> {
    self.rsvp_service.get_user_rsvps(user_id).await
  }
}
