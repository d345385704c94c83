use oauth2::{AuthorizationCode, TokenResponse};

use crate::{
    model::discord::GuildDto,
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, AppError},
        model::{
            discord::{DiscordGuild, DiscordUser},
            user::UpsertUserParam,
        },
        service::auth::{login::OAUTH_SCOPES, CompletedLogin, DiscordAuthService},
    },
};

impl<'a> DiscordAuthService<'a> {
    /// Completes a login from the authorization code returned by Discord.
    ///
    /// Exchanges the code for an access token, fetches the user's profile and guilds,
    /// keeps only the guilds where the user is an administrator and records the login.
    ///
    /// # Returns
    /// - `Ok(CompletedLogin)` - User recorded and guild list ready for the session
    /// - `Err(AuthError::TokenExchange)` - Token endpoint failed or sent no access token
    /// - `Err(AppError::ReqwestErr)` - Profile or guild request failed
    /// - `Err(AppError::DbErr)` - Failed to record the user
    pub async fn callback(&self, authorization_code: String) -> Result<CompletedLogin, AppError> {
        let user_repo = UserRepository::new(self.db);

        let token = self
            .oauth_client
            .exchange_code(AuthorizationCode::new(authorization_code))
            .add_extra_param("scope", OAUTH_SCOPES.join(" "))
            .request_async(self.http_client)
            .await
            .map_err(|e| AuthError::TokenExchange(e.to_string()))?;
        let access_token = token.access_token().secret();

        let discord_user = self.fetch_discord_user(access_token).await?;
        let guilds = self.fetch_admin_guilds(access_token).await?;

        let is_owner = discord_user.id == self.config.owner_id;
        if is_owner {
            tracing::info!("Bot owner {} logged in", discord_user.id);
        }

        let user = user_repo
            .upsert(UpsertUserParam {
                discord_id: discord_user.id,
                avatar_url: Some(discord_user.avatar_url()),
                name: discord_user.username,
                is_owner,
            })
            .await?;

        Ok(CompletedLogin { user, guilds })
    }

    /// Retrieves the Discord user for the access token.
    async fn fetch_discord_user(&self, access_token: &str) -> Result<DiscordUser, AppError> {
        let user = self
            .http_client
            .get(format!("{}/users/@me", self.config.discord_api_url))
            .bearer_auth(access_token)
            .send()
            .await?
            .error_for_status()?
            .json::<DiscordUser>()
            .await?;

        Ok(user)
    }

    /// Retrieves the user's guilds, keeping those where they hold ADMINISTRATOR.
    async fn fetch_admin_guilds(&self, access_token: &str) -> Result<Vec<GuildDto>, AppError> {
        let guilds = self
            .http_client
            .get(format!("{}/users/@me/guilds", self.config.discord_api_url))
            .query(&[("with_counts", "true")])
            .bearer_auth(access_token)
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<DiscordGuild>>()
            .await?;

        Ok(guilds
            .into_iter()
            .filter(DiscordGuild::is_admin)
            .map(DiscordGuild::into_dto)
            .collect())
    }
}
