//! Guild configuration business logic.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::guild_config::GuildConfigRepository,
    error::AppError,
    model::guild_config::{CreateGuildConfigParam, GuildConfig, GuildConfigPatch},
};

pub struct GuildConfigService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildConfigService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a guild's configuration without creating it.
    pub async fn get(&self, guild_id: u64) -> Result<Option<GuildConfig>, AppError> {
        let repo = GuildConfigRepository::new(self.db);

        Ok(repo.find_by_guild_id(guild_id).await?)
    }

    /// Gets a guild's configuration, creating it with defaults on first access.
    pub async fn get_or_create(&self, param: CreateGuildConfigParam) -> Result<GuildConfig, AppError> {
        let repo = GuildConfigRepository::new(self.db);

        Ok(repo.get_or_create(param).await?)
    }

    /// Ensures the configuration exists, then applies the patch to it.
    ///
    /// # Returns
    /// - `Ok(GuildConfig)` - Configuration after the update
    /// - `Err(AppError::NotFound)` - Configuration vanished between creation and update
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn update(
        &self,
        param: CreateGuildConfigParam,
        patch: GuildConfigPatch,
    ) -> Result<GuildConfig, AppError> {
        let repo = GuildConfigRepository::new(self.db);
        let guild_id = param.guild_id;

        repo.get_or_create(param).await?;

        let changed = patch.changes.len();
        let config = repo
            .apply_partial_update(guild_id, patch)
            .await?
            .ok_or_else(|| AppError::NotFound("Guild configuration not found".to_string()))?;

        tracing::debug!("Updated {} configuration field(s) for guild {}", changed, guild_id);

        Ok(config)
    }
}
