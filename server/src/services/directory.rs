//! User directory backed by the `users` table.
//!
//! This is the server side of the Auth Query Service: the client resolves
//! emails through `GET /api/auth/lookup`, and `POST /api/auth/login` resolves
//! them here directly.

use async_trait::async_trait;
use sqlx::PgPool;
use usm_session::user::ParseRoleError;
use usm_session::{LookupError, Role, User, UserLookup};
use uuid::Uuid;

const USER_COLUMNS: &str = "id, email, name, role, matric_number, organization_id";

/// Raw `users` row before the role column is validated.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRecord {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub role: String,
    pub matric_number: Option<String>,
    pub organization_id: Option<String>,
}

impl TryFrom<UserRecord> for User {
    type Error = ParseRoleError;

    fn try_from(record: UserRecord) -> Result<Self, Self::Error> {
        Ok(User {
            id: record.id.to_string(),
            email: record.email,
            name: record.name,
            role: record.role.parse()?,
            matric_number: record.matric_number,
            organization_id: record.organization_id,
        })
    }
}

pub(crate) fn decode(record: UserRecord) -> Result<User, sqlx::Error> {
    User::try_from(record).map_err(|e| sqlx::Error::ColumnDecode { index: "role".to_owned(), source: Box::new(e) })
}

#[derive(Debug, Clone)]
pub struct PgDirectory {
    pool: PgPool,
}

impl PgDirectory {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a user by email, ignoring case.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, sqlx::Error> {
        let record = sqlx::query_as::<_, UserRecord>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE lower(email) = lower($1)"
        ))
        .bind(email.trim())
        .fetch_optional(&self.pool)
        .await?;
        record.map(decode).transpose()
    }

    /// Find a user by id. Ids that are not UUIDs match nothing.
    pub async fn find_by_id(&self, id: &str) -> Result<Option<User>, sqlx::Error> {
        let Ok(id) = Uuid::parse_str(id) else {
            return Ok(None);
        };
        let record = sqlx::query_as::<_, UserRecord>(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        record.map(decode).transpose()
    }

    /// List users ordered by name, optionally restricted to one role.
    pub async fn list(&self, role: Option<Role>) -> Result<Vec<User>, sqlx::Error> {
        let records = sqlx::query_as::<_, UserRecord>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE $1::text IS NULL OR role = $1 ORDER BY name, email"
        ))
        .bind(role.map(Role::as_str))
        .fetch_all(&self.pool)
        .await?;
        records.into_iter().map(decode).collect()
    }
}

#[async_trait]
impl UserLookup for PgDirectory {
    async fn lookup(&self, email: &str) -> Result<Option<User>, LookupError> {
        self.find_by_email(email).await.map_err(|e| LookupError::Transport(e.to_string()))
    }
}

#[cfg(test)]
#[path = "directory_test.rs"]
mod tests;
