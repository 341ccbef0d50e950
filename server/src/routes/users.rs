//! Role-gated user directory routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use usm_session::{Role, User};

use super::auth::AuthUser;
use crate::state::AppState;

pub(crate) const ADMIN_ROLES: &[Role] = &[Role::Admin];
pub(crate) const ORGANIZER_ROLES: &[Role] = &[Role::Organizer, Role::Admin];

fn internal(e: sqlx::Error) -> StatusCode {
    tracing::error!(error = %e, "user directory query failed");
    StatusCode::INTERNAL_SERVER_ERROR
}

/// `GET /api/admin/users` — every user. Admin only.
pub async fn list_all(State(state): State<AppState>, auth: AuthUser) -> Result<Json<Vec<User>>, StatusCode> {
    auth.require(ADMIN_ROLES)?;
    state.directory.list(None).await.map(Json).map_err(internal)
}

/// `GET /api/organizer/students` — student accounts, for event rosters.
pub async fn list_students(State(state): State<AppState>, auth: AuthUser) -> Result<Json<Vec<User>>, StatusCode> {
    auth.require(ORGANIZER_ROLES)?;
    state.directory.list(Some(Role::Student)).await.map(Json).map_err(internal)
}

/// `GET /api/users/{id}` — any signed-in user.
pub async fn get_user(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(user_id): Path<String>,
) -> Result<Json<User>, StatusCode> {
    state
        .directory
        .find_by_id(&user_id)
        .await
        .map_err(internal)?
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}
