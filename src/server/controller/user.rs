use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::server::{
    error::AppError,
    middleware::{auth::AuthGuard, session::FlashSession},
    service::dashboard::DashboardService,
    state::AppState,
};

/// GET /api/flash - Drain pending flash notices
///
/// Available without logging in so failed logins can show their notice.
pub async fn get_flash(session: Session) -> Result<impl IntoResponse, AppError> {
    let messages = FlashSession::new(&session).take_all().await?;

    Ok((StatusCode::OK, Json(messages)))
}

/// GET /api/user/guilds - Guilds the current user administers
///
/// Returns the list captured at login.
///
/// # Returns
/// - `200 OK` - JSON array of GuildDto
/// - `401 Unauthorized` - Not logged in
pub async fn get_user_guilds(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let auth = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok((StatusCode::OK, Json(auth.session.guilds)))
}

/// GET /api/dashboard - Overview of the user's guilds
///
/// # Returns
/// - `200 OK` - DashboardDto
/// - `401 Unauthorized` - Not logged in
pub async fn get_dashboard(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let auth = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let summary = DashboardService::new(&state.db)
        .summary(auth.user, auth.session.guilds)
        .await?;

    Ok((StatusCode::OK, Json(summary.into_dto())))
}
