use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::api::FlashLevel,
    server::{
        error::{auth::AuthError, AppError},
        middleware::{
            auth::AuthGuard,
            session::{AuthSession, CsrfSession, FlashSession, SessionUser},
        },
        service::auth::DiscordAuthService,
        state::AppState,
    },
};

/// Where a successful login lands.
const LOGIN_SUCCESS_REDIRECT: &str = "/dashboard";
/// Where failed logins and logouts land.
const HOME_REDIRECT: &str = "/";

/// Query parameters for the OAuth callback endpoint.
///
/// Both are optional so that a denied callback still reaches the handler and ends in a
/// redirect with a notice.
#[derive(Deserialize)]
pub struct CallbackParams {
    /// CSRF state token to be validated against the session value.
    pub state: Option<String>,
    /// Authorization code from Discord for token exchange.
    pub code: Option<String>,
}

/// GET /api/auth/login - Redirect to Discord's authorize page
///
/// Stores a fresh CSRF state in the session before redirecting.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = DiscordAuthService::new(
        &state.db,
        &state.http_client,
        &state.oauth_client,
        &state.config,
    );

    let (url, csrf_token) = auth_service.login_url();

    CsrfSession::new(&session)
        .set_token(csrf_token.secret().clone())
        .await?;

    Ok(Redirect::temporary(url.as_str()))
}

/// GET /api/auth/callback - Complete the Discord login
///
/// Any failure, including a query string that does not decode, redirects to `/` with a
/// flash notice and leaves the session logged out.
///
/// # Returns
/// - `303 See Other` to `/dashboard` - Login completed
/// - `303 See Other` to `/` - Login failed
/// - `500 Internal Server Error` - The session itself could not be written
pub async fn callback(
    State(state): State<AppState>,
    session: Session,
    query: Result<Query<CallbackParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let params = match query {
        Ok(Query(params)) => params,
        Err(rejection) => {
            let err = AuthError::MalformedCallback;
            tracing::warn!("Login failed: {}: {}", err, rejection.body_text());
            FlashSession::new(&session)
                .push(FlashLevel::Error, err.login_message())
                .await?;

            return Ok(Redirect::to(HOME_REDIRECT));
        }
    };

    match complete_login(&state, &session, params).await {
        Ok(user_id) => {
            tracing::info!("User {} logged in", user_id);
            FlashSession::new(&session)
                .push(FlashLevel::Success, "Logged in successfully.")
                .await?;

            Ok(Redirect::to(LOGIN_SUCCESS_REDIRECT))
        }
        Err(AppError::AuthErr(err)) => {
            tracing::warn!("Login failed: {}", err);
            FlashSession::new(&session)
                .push(FlashLevel::Error, err.login_message())
                .await?;

            Ok(Redirect::to(HOME_REDIRECT))
        }
        Err(err) => {
            tracing::error!("Login failed: {}", err);
            FlashSession::new(&session)
                .push(
                    FlashLevel::Error,
                    "Discord could not be reached, please try again.",
                )
                .await?;

            Ok(Redirect::to(HOME_REDIRECT))
        }
    }
}

async fn complete_login(
    state: &AppState,
    session: &Session,
    params: CallbackParams,
) -> Result<u64, AppError> {
    let stored_state = CsrfSession::new(session).take_token().await?;
    match (stored_state, params.state) {
        (Some(stored), Some(received)) if stored == received => {}
        _ => return Err(AuthError::CsrfValidationFailed.into()),
    }

    let Some(code) = params.code.filter(|code| !code.is_empty()) else {
        return Err(AuthError::MissingAuthorizationCode.into());
    };

    let auth_service = DiscordAuthService::new(
        &state.db,
        &state.http_client,
        &state.oauth_client,
        &state.config,
    );
    let login = auth_service.callback(code).await?;

    let session_user = SessionUser {
        user_id: login.user.discord_id,
        guilds: login.guilds,
    };
    AuthSession::new(session).login(&session_user).await?;

    Ok(session_user.user_id)
}

/// GET /api/auth/logout - End the session and return home
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;

    Ok(Redirect::to(HOME_REDIRECT))
}

/// GET /api/auth/user - Current user
///
/// # Returns
/// - `200 OK` - The logged-in user
/// - `401 Unauthorized` - Not logged in
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let auth = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok((StatusCode::OK, Json(auth.user.into_dto())))
}
