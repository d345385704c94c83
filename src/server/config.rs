use url::Url;

use crate::server::error::config::ConfigError;

const DISCORD_AUTH_URL: &str = "https://discord.com/oauth2/authorize";
const DISCORD_TOKEN_URL: &str = "https://discord.com/api/oauth2/token";
const DISCORD_API_URL: &str = "https://discord.com/api";

const DEFAULT_BOT_API_URL: &str = "http://localhost:5001";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";

pub struct Config {
    pub database_url: String,

    pub discord_client_id: String,
    pub discord_client_secret: String,
    pub discord_redirect_url: String,

    pub discord_auth_url: String,
    pub discord_token_url: String,
    /// Base URL of Discord's REST API, without a trailing slash.
    pub discord_api_url: String,

    /// Discord ID of the bot owner, who may use the owner-only bot routes.
    pub owner_id: u64,

    /// Shared secret the bot must send in `X-API-Key` to use the Config Sync API.
    pub dashboard_api_key: String,

    /// Base URL of the bot's own HTTP API, without a trailing slash.
    pub bot_api_url: String,
    /// Secret sent in `X-API-Key` on calls to the bot's API.
    pub bot_api_key: String,

    pub bind_addr: String,
}

impl Config {
    /// Loads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads configuration through the provided variable lookup.
    ///
    /// Empty values are treated as missing.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables were present and valid
    /// - `Err(ConfigError::MissingEnvVar)` - A required variable is absent
    /// - `Err(ConfigError::InvalidEnvVar)` - A variable could not be parsed
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let optional = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let required = |name: &str| {
            optional(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        let discord_redirect_url = required("DISCORD_REDIRECT_URL")?;
        validate_url("DISCORD_REDIRECT_URL", &discord_redirect_url)?;

        let owner_id = required("OWNER_ID")?;
        let owner_id = owner_id
            .trim()
            .parse::<u64>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                name: "OWNER_ID".to_string(),
                reason: e.to_string(),
            })?;

        let dashboard_api_key = required("DASHBOARD_API_KEY")?;

        let bot_api_url = optional("BOT_API_URL").unwrap_or_else(|| DEFAULT_BOT_API_URL.to_string());
        validate_url("BOT_API_URL", &bot_api_url)?;

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            discord_client_id: required("DISCORD_CLIENT_ID")?,
            discord_client_secret: required("DISCORD_CLIENT_SECRET")?,
            discord_redirect_url,
            discord_auth_url: DISCORD_AUTH_URL.to_string(),
            discord_token_url: DISCORD_TOKEN_URL.to_string(),
            discord_api_url: DISCORD_API_URL.to_string(),
            owner_id,
            bot_api_key: optional("BOT_API_KEY").unwrap_or_else(|| dashboard_api_key.clone()),
            dashboard_api_key,
            bot_api_url: bot_api_url.trim_end_matches('/').to_string(),
            bind_addr: optional("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
        })
    }

    /// Whether the dashboard is served over HTTPS, judged from the OAuth redirect URL.
    pub fn uses_https(&self) -> bool {
        self.discord_redirect_url.starts_with("https://")
    }
}

fn validate_url(name: &str, value: &str) -> Result<(), ConfigError> {
    Url::parse(value).map_err(|e| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        reason: e.to_string(),
    })?;

    Ok(())
}
