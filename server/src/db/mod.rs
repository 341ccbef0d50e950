//! Database initialization and migration runner.
//!
//! SYSTEM CONTEXT
//! ==============
//! Startup uses this module to create the shared SQLx pool and apply the
//! user/session schema before accepting API traffic. Migrations carry schema
//! only; demo accounts are inserted by [`seed_demo_users`] when the operator
//! opts in.

use sqlx::PgPool;
use sqlx::migrate::Migrator;
use sqlx::postgres::PgPoolOptions;

pub static MIGRATOR: Migrator = sqlx::migrate!("src/db/migrations");

const DEMO_USERS_SQL: &str = include_str!("seed/demo_users.sql");

/// Initialize the `PostgreSQL` connection pool and run migrations.
///
/// # Errors
///
/// Returns an error if the connection or migrations fail.
pub async fn init_pool(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;

    MIGRATOR.run(&pool).await?;

    Ok(pool)
}

/// Insert the demo student, organizer and admin accounts. Existing rows are
/// left alone. Returns the number of accounts created.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub async fn seed_demo_users(pool: &PgPool) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(DEMO_USERS_SQL).execute(pool).await?;
    Ok(result.rows_affected())
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
