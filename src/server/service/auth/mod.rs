//! OAuth2 login with Discord

use sea_orm::DatabaseConnection;

use crate::{
    model::discord::GuildDto,
    server::{config::Config, model::user::User, state::OAuth2Client},
};

pub mod callback;
pub mod login;

/// Result of a completed login.
#[derive(Debug, Clone)]
pub struct CompletedLogin {
    pub user: User,
    /// Guilds where the user holds ADMINISTRATOR, in Discord's order.
    pub guilds: Vec<GuildDto>,
}

pub struct DiscordAuthService<'a> {
    pub db: &'a DatabaseConnection,
    pub http_client: &'a reqwest::Client,
    pub oauth_client: &'a OAuth2Client,
    pub config: &'a Config,
}

impl<'a> DiscordAuthService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        http_client: &'a reqwest::Client,
        oauth_client: &'a OAuth2Client,
        config: &'a Config,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
            config,
        }
    }
}
