use async_trait::async_trait;
use sqlx::PgPool;

use super::model::User;

#[async_trait]
pub trait UserRepository: Send + Sync {
  async fn create(&self, email: &str, name: &str, password_hash: &str) -> Result<User, sqlx::Error>;
  async fn find_by_email(&self, email: &str) -> Result<Option<User>, sqlx::Error>;
}

pub struct SqlxUserRepository {
  pub pool: PgPool,
}

impl SqlxUserRepository {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

#[async_trait]
impl UserRepository for SqlxUserRepository {
  async fn create(&self, email: &str, name: &str, password_hash: &str) -> Result<User, sqlx::Error> {
    sqlx::query_as::<_, User>(
      r#"
      INSERT INTO users (email, name, password_hash)
      VALUES ($1, $2, $3)
      RETURNING id, email, name, password_hash, created_at
      "#,
    )
    .bind(email)
    .bind(name)
    .bind(password_hash)
    .fetch_one(&self.pool)
    .await
  }

  async fn find_by_email(&self, email: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
      r#"
      SELECT id, email, name, password_hash, created_at
      FROM users
      WHERE email = $1
      "#,
    )
    .bind(email)
    .fetch_optional(&self.pool)
    .await
  }

}

#[cfg(test)]
mod tests {
  use super::*;

  #[sqlx::test(migrations = "./migrations")]
  async fn create_and_find_user(pool: sqlx::PgPool) -> Result<(), sqlx::Error> {
    let repo = SqlxUserRepository::new(pool);

    let created = repo.create("repo-test@example.com", "Repo Test", "hashed").await?;
    assert_eq!(created.email, "repo-test@example.com");
    assert_eq!(created.name, "Repo Test");
    assert_eq!(created.password_hash, "hashed");

    let found = repo.find_by_email("repo-test@example.com").await?;
    assert!(found.is_some());
    assert_eq!(found.unwrap().id, created.id);

    Ok(())
  }

  #[sqlx::test(migrations = "./migrations")]
  async fn find_by_email_returns_none(pool: sqlx::PgPool) -> Result<(), sqlx::Error> {
    let repo = SqlxUserRepository::new(pool);

    let found = repo.find_by_email("missing@example.com").await?;
    assert!(found.is_none());

    Ok(())
  }

  #[sqlx::test(migrations = "./migrations")]
  async fn duplicate_email_is_unique_violation(pool: sqlx::PgPool) -> Result<(), sqlx::Error> {
    let repo = SqlxUserRepository::new(pool);

    repo.create("dup@example.com", "First", "hashed").await?;
    let result = repo.create("dup@example.com", "Second", "hashed").await;

    match result {
      Err(sqlx::Error::Database(db)) => assert!(db.is_unique_violation()),
      other => panic!("Expected unique violation, got {:?}", other),
    }

    Ok(())
  }
}
