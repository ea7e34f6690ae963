use sqlx::{Executor, PgPool, Postgres};

use super::model::Rsvp;
use crate::domains::meetup::model::Meetup;

pub async fn create(db: &PgPool, user_id: i32, meetup_id: i32) -> Result<Rsvp, sqlx::Error> {
  create_with_executor(db, user_id, meetup_id).await
}

pub async fn create_with_executor<'e, E>(executor: E, user_id: i32, meetup_id: i32) -> Result<Rsvp, sqlx::Error>
where
  E: Executor<'e, Database = Postgres>,
{
  sqlx::query_as::<_, Rsvp>(
    r#"
    INSERT INTO rsvps (user_id, meetup_id)
    VALUES ($1, $2)
    RETURNING id, user_id, meetup_id, created_at
    "#,
  )
  .bind(user_id)
  .bind(meetup_id)
  .fetch_one(executor)
  .await
}

pub async fn find_meetups_for_user(db: &PgPool, user_id: i32) -> Result<Vec<Meetup>, sqlx::Error> {
  find_meetups_for_user_with_executor(db, user_id).await
}

pub async fn find_meetups_for_user_with_executor<'e, E>(executor: E, user_id: i32) -> Result<Vec<Meetup>, sqlx::Error>
where
  E: Executor<'e, Database = Postgres>,
{
  sqlx::query_as::<_, Meetup>(
    r#"
    SELECT m.id, m.title, m.description, m.date, m.time, m.location, m.organizer_id, m.created_at
    FROM rsvps r
    INNER JOIN meetups m ON m.id = r.meetup_id
    WHERE r.user_id = $1
    "#,
  )
  .bind(user_id)
  .fetch_all(executor)
  .await
}
