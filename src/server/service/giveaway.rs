//! Giveaway business logic.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::giveaway::GiveawayRepository,
    error::AppError,
    model::giveaway::{CreateGiveawayParam, Giveaway, UpdateGiveawayParam},
};

pub struct GiveawayService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GiveawayService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a giveaway.
    ///
    /// # Returns
    /// - `Ok(Giveaway)` - Stored giveaway
    /// - `Err(AppError::BadRequest)` - Fewer than one winner
    /// - `Err(AppError::Conflict)` - Message id already registered
    pub async fn create(&self, param: CreateGiveawayParam) -> Result<Giveaway, AppError> {
        if param.winners < 1 {
            return Err(AppError::BadRequest(format!(
                "Invalid value for 'winners': must be at least 1, got {}",
                param.winners
            )));
        }

        let repo = GiveawayRepository::new(self.db);
        let message_id = param.message_id;

        repo.create(param).await?.ok_or_else(|| {
            AppError::Conflict(format!("Giveaway {} is already registered", message_id))
        })
    }

    pub async fn get_by_guild(&self, guild_id: u64) -> Result<Vec<Giveaway>, AppError> {
        let repo = GiveawayRepository::new(self.db);

        Ok(repo.get_by_guild(guild_id).await?)
    }

    /// Updates entrants and/or ended flag.
    ///
    /// # Returns
    /// - `Ok(Giveaway)` - Giveaway after the update
    /// - `Err(AppError::BadRequest)` - Negative entrant count
    /// - `Err(AppError::NotFound)` - No such giveaway in the guild
    pub async fn update(&self, param: UpdateGiveawayParam) -> Result<Giveaway, AppError> {
        if let Some(entrants) = param.entrants.filter(|entrants| *entrants < 0) {
            return Err(AppError::BadRequest(format!(
                "Invalid value for 'entrants': must not be negative, got {}",
                entrants
            )));
        }

        let repo = GiveawayRepository::new(self.db);

        repo.update(param)
            .await?
            .ok_or_else(|| AppError::NotFound("Giveaway not found".to_string()))
    }
}
