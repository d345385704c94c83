//! Client for the bot process's own HTTP API.
//!
//! Every call degrades to a fallback value: a non-200 status, network error, timeout or
//! undecodable body is logged at warn level and never reaches the caller.

use std::time::Duration;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::{
    model::bot::BotStatsDto,
    server::{config::Config, error::AppError, middleware::api_key::API_KEY_HEADER},
};

/// Per-request timeout for bot API calls.
const BOT_API_TIMEOUT: Duration = Duration::from_secs(5);

pub struct BotApiService<'a> {
    http_client: &'a reqwest::Client,
    base_url: &'a str,
    api_key: &'a str,
}

impl<'a> BotApiService<'a> {
    pub fn new(http_client: &'a reqwest::Client, config: &'a Config) -> Self {
        Self {
            http_client,
            base_url: &config.bot_api_url,
            api_key: &config.bot_api_key,
        }
    }

    /// Live statistics, or all zeros when the bot can't be reached.
    pub async fn get_bot_stats(&self) -> BotStatsDto {
        self.get_json("/api/stats", &[])
            .await
            .unwrap_or_else(|e| fallback("stats", e))
    }

    /// Latest moderation actions known to the bot, or an empty list.
    pub async fn get_moderation_actions(&self, limit: u64) -> Vec<serde_json::Value> {
        self.get_json("/api/moderation/latest", &[("limit", limit.to_string())])
            .await
            .unwrap_or_else(|e| fallback("moderation actions", e))
    }

    /// Giveaways the bot is currently running, or an empty list.
    pub async fn get_active_giveaways(&self) -> Vec<serde_json::Value> {
        self.get_json("/api/giveaways/active", &[])
            .await
            .unwrap_or_else(|e| fallback("active giveaways", e))
    }

    /// Asks the bot to end a giveaway now. Returns whether the bot accepted.
    pub async fn end_giveaway(&self, message_id: u64) -> bool {
        let result = async {
            let response = self
                .http_client
                .post(format!("{}/api/giveaways/{}/end", self.base_url, message_id))
                .header(API_KEY_HEADER, self.api_key)
                .timeout(BOT_API_TIMEOUT)
                .send()
                .await?;

            ensure_ok("/api/giveaways/end", response.status())
        }
        .await;

        match result {
            Ok(()) => true,
            Err(e) => fallback("end giveaway", e),
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, AppError> {
        let response = self
            .http_client
            .get(format!("{}{}", self.base_url, path))
            .header(API_KEY_HEADER, self.api_key)
            .query(query)
            .timeout(BOT_API_TIMEOUT)
            .send()
            .await?;

        ensure_ok(path, response.status())?;

        Ok(response.json::<T>().await?)
    }
}

fn ensure_ok(path: &str, status: StatusCode) -> Result<(), AppError> {
    if status != StatusCode::OK {
        return Err(AppError::InternalError(format!(
            "Bot API {} returned {}",
            path, status
        )));
    }

    Ok(())
}

fn fallback<T: Default>(call: &str, err: AppError) -> T {
    tracing::warn!("Bot API {} unavailable, using fallback: {}", call, err);
    T::default()
}
