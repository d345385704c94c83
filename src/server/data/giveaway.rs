//! Giveaway repository.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::giveaway::{CreateGiveawayParam, Giveaway, UpdateGiveawayParam};

use entity::giveaway::Column;

pub struct GiveawayRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GiveawayRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a giveaway.
    ///
    /// # Returns
    /// - `Ok(Some(Giveaway))` - The stored giveaway
    /// - `Ok(None)` - A giveaway with this message id already exists
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateGiveawayParam) -> Result<Option<Giveaway>, DbErr> {
        let message_id = param.message_id;

        let inserted = entity::prelude::Giveaway::insert(entity::giveaway::ActiveModel {
            message_id: ActiveValue::Set(param.message_id.to_string()),
            guild_id: ActiveValue::Set(param.guild_id.to_string()),
            channel_id: ActiveValue::Set(param.channel_id.to_string()),
            prize: ActiveValue::Set(param.prize),
            winners: ActiveValue::Set(param.winners),
            entrants: ActiveValue::Set(0),
            host_id: ActiveValue::Set(param.host_id.to_string()),
            host_name: ActiveValue::Set(param.host_name),
            end_time: ActiveValue::Set(param.end_time),
            ended: ActiveValue::Set(false),
            required_role_id: ActiveValue::Set(param.required_role_id.map(|id| id.to_string())),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        })
        .on_conflict(OnConflict::column(Column::MessageId).do_nothing().to_owned())
        .exec_without_returning(self.db)
        .await?;

        if inserted == 0 {
            return Ok(None);
        }

        self.find_by_message_id(message_id).await
    }

    pub async fn find_by_message_id(&self, message_id: u64) -> Result<Option<Giveaway>, DbErr> {
        let entity = entity::prelude::Giveaway::find()
            .filter(Column::MessageId.eq(message_id.to_string()))
            .one(self.db)
            .await?;

        Ok(entity.map(Giveaway::from_entity))
    }

    /// Gets all giveaways of a guild, newest first.
    pub async fn get_by_guild(&self, guild_id: u64) -> Result<Vec<Giveaway>, DbErr> {
        let entities = entity::prelude::Giveaway::find()
            .filter(Column::GuildId.eq(guild_id.to_string()))
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Giveaway::from_entity).collect())
    }

    /// Counts giveaways that have not ended across the given guilds.
    pub async fn count_active_for_guilds(&self, guild_ids: &[u64]) -> Result<u64, DbErr> {
        if guild_ids.is_empty() {
            return Ok(0);
        }

        entity::prelude::Giveaway::find()
            .filter(Column::GuildId.is_in(guild_ids.iter().map(|id| id.to_string())))
            .filter(Column::Ended.eq(false))
            .count(self.db)
            .await
    }

    /// Updates entrant count and/or ended flag of a guild's giveaway.
    ///
    /// # Returns
    /// - `Ok(Some(Giveaway))` - Updated giveaway
    /// - `Ok(None)` - No giveaway with this message id in the guild
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, param: UpdateGiveawayParam) -> Result<Option<Giveaway>, DbErr> {
        let filter = Condition::all()
            .add(Column::MessageId.eq(param.message_id.to_string()))
            .add(Column::GuildId.eq(param.guild_id.to_string()));

        let Some(existing) = entity::prelude::Giveaway::find()
            .filter(filter.clone())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        if param.entrants.is_none() && param.ended.is_none() {
            return Ok(Some(Giveaway::from_entity(existing)));
        }

        let mut active = entity::giveaway::ActiveModel {
            ..Default::default()
        };
        if let Some(entrants) = param.entrants {
            active.entrants = ActiveValue::Set(entrants);
        }
        if let Some(ended) = param.ended {
            active.ended = ActiveValue::Set(ended);
        }

        entity::prelude::Giveaway::update_many()
            .set(active)
            .filter(filter)
            .exec(self.db)
            .await?;

        self.find_by_message_id(param.message_id).await
    }
}
