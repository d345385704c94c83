use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No authenticated user is stored in the session.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("User not found in session")]
    UserNotInSession,

    /// The session refers to a user that no longer exists in the database.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(u64),

    /// The user lacks the permission the route requires.
    ///
    /// Results in a 403 Forbidden response. The message is logged only.
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(u64, String),

    /// The requested guild is not in the session's guild list.
    ///
    /// Results in a 403 Forbidden response, whether or not a record exists for it.
    #[error("User {user_id} attempted to access guild {guild_id} not in their session")]
    GuildAccessDenied { user_id: u64, guild_id: u64 },

    /// A Config Sync API request carried no API key or the wrong one.
    ///
    /// Results in a 403 Forbidden response with `{"error": "Unauthorized"}`.
    #[error("Missing or invalid API key")]
    InvalidApiKey,

    /// CSRF state validation failed during OAuth callback.
    ///
    /// The state in the callback URL does not match the token stored in the session.
    /// Results in a 400 Bad Request response.
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,

    /// The OAuth callback arrived without an authorization code.
    #[error("OAuth callback is missing the authorization code")]
    MissingAuthorizationCode,

    /// The OAuth callback query string could not be decoded, e.g. a repeated parameter.
    #[error("OAuth callback query string is malformed")]
    MalformedCallback,

    /// The token endpoint rejected the code or answered without an access token.
    #[error("Failed to exchange authorization code: {0}")]
    TokenExchange(String),
}

impl AuthError {
    /// Message shown to the user when this error ends a login attempt.
    pub fn login_message(&self) -> &'static str {
        match self {
            Self::CsrfValidationFailed => "Your login session expired, please try again.",
            Self::MissingAuthorizationCode => "Login was cancelled or no code was received.",
            _ => "There was an issue logging you in, please try again.",
        }
    }
}

/// Converts authentication errors into HTTP responses.
///
/// All errors are logged at debug level for diagnostics while keeping client-facing messages
/// generic to avoid revealing whether a record exists.
///
/// # Returns
/// - 400 Bad Request - For login flow failures
/// - 401 Unauthorized - For missing or unknown session users
/// - 403 Forbidden - For permission, guild access and API key failures
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => {
                (StatusCode::UNAUTHORIZED, "Not logged in")
            }
            Self::AccessDenied(_, _) | Self::GuildAccessDenied { .. } => {
                (StatusCode::FORBIDDEN, "Access denied")
            }
            Self::InvalidApiKey => (StatusCode::FORBIDDEN, "Unauthorized"),
            Self::CsrfValidationFailed
            | Self::MissingAuthorizationCode
            | Self::MalformedCallback
            | Self::TokenExchange(_) => (
                StatusCode::BAD_REQUEST,
                "There was an issue logging you in, please try again.",
            ),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
