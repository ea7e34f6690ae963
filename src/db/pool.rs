use sqlx::{postgres::PgPoolOptions, PgPool};

pub async fn create_pool() -> Result<PgPool, sqlx::Error> {
  let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL environment variable must be set.");

  PgPoolOptions::new().max_connections(5).connect(&database_url).await
}
