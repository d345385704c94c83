use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::{AuthSession, SessionUser},
    model::user::User,
};

/// Requirements a route may place on the logged-in user.
pub enum Permission {
    /// User must be the configured bot owner.
    Owner,
    /// Guild must be in the session's guild list.
    Guild(u64),
}

/// Logged-in user together with the session's guild snapshot.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user: User,
    pub session: SessionUser,
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Checks that a user is logged in and satisfies every permission.
    ///
    /// Guild checks only consult the session; no store is read for the guild.
    ///
    /// # Returns
    /// - `Ok(AuthenticatedUser)` - All requirements met
    /// - `Err(AuthError::UserNotInSession)` - Nobody is logged in
    /// - `Err(AuthError::UserNotInDatabase)` - Session refers to an unknown user
    /// - `Err(AuthError::AccessDenied)` - Owner required and user is not the owner
    /// - `Err(AuthError::GuildAccessDenied)` - Guild is not in the session's list
    pub async fn require(&self, permissions: &[Permission]) -> Result<AuthenticatedUser, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(session_user) = AuthSession::new(self.session).get_user().await? else {
            return Err(AuthError::UserNotInSession.into());
        };
        let user_id = session_user.user_id;

        let Some(user) = user_repo.find_by_discord_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::Owner => {
                    if !user.is_owner {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "Owner-only route requested by a non-owner".to_string(),
                        )
                        .into());
                    }
                }
                Permission::Guild(guild_id) => {
                    if session_user.guild(*guild_id).is_none() {
                        return Err(AuthError::GuildAccessDenied {
                            user_id,
                            guild_id: *guild_id,
                        }
                        .into());
                    }
                }
            }
        }

        Ok(AuthenticatedUser {
            user,
            session: session_user,
        })
    }
}
