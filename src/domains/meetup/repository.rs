use chrono::{DateTime, Utc};
use sqlx::{Executor, PgPool, Postgres};

use super::model::{Meetup, MeetupWithRsvpCount};

pub async fn create(
  db: &PgPool,
  title: &str,
  description: &str,
  date: DateTime<Utc>,
  time: &str,
  location: &str,
  organizer_id: i32,
) -> Result<Meetup, sqlx::Error> {
  create_with_executor(db, title, description, date, time, location, organizer_id).await
}

pub async fn create_with_executor<'e, E>(
  executor: E,
  title: &str,
  description: &str,
  date: DateTime<Utc>,
  time: &str,
  location: &str,
  organizer_id: i32,
) -> Result<Meetup, sqlx::Error>
where
  E: Executor<'e, Database = Postgres>,
{
  sqlx::query_as::<_, Meetup>(
    r#"
    INSERT INTO meetups (title, description, date, time, location, organizer_id)
    VALUES ($1, $2, $3, $4, $5, $6)
    RETURNING id, title, description, date, time, location, organizer_id, created_at
    "#,
  )
  .bind(title)
  .bind(description)
  .bind(date)
  .bind(time)
  .bind(location)
  .bind(organizer_id)
  .fetch_one(executor)
  .await
}

/// Upcoming meetups with their RSVP counts, soonest first. Meetups without
/// RSVPs are included with a count of zero.
pub async fn find_upcoming_with_rsvp_counts(db: &PgPool) -> Result<Vec<MeetupWithRsvpCount>, sqlx::Error> {
  find_upcoming_with_rsvp_counts_with_executor(db).await
}

pub async fn find_upcoming_with_rsvp_counts_with_executor<'e, E>(
  executor: E,
) -> Result<Vec<MeetupWithRsvpCount>, sqlx::Error>
where
  E: Executor<'e, Database = Postgres>,
{
  sqlx::query_as::<_, MeetupWithRsvpCount>(
    r#"
    SELECT
      m.id,
      m.title,
      m.description,
      m.date,
      m.time,
      m.location,
      m.organizer_id,
      m.created_at,
      COUNT(r.id) AS rsvp_count
    FROM meetups m
    LEFT JOIN rsvps r ON r.meetup_id = m.id
    WHERE m.date >= now()
    GROUP BY m.id
    ORDER BY m.date ASC
    "#,
  )
  .fetch_all(executor)
  .await
}
