//! Giveaway domain models.

use chrono::{DateTime, Utc};

use crate::model::giveaway::{CreateGiveawayDto, GiveawayDto, UpdateGiveawayDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Giveaway {
    pub id: i32,
    pub message_id: String,
    pub guild_id: String,
    pub channel_id: String,
    pub prize: String,
    pub winners: i32,
    pub entrants: i32,
    pub host_id: String,
    pub host_name: Option<String>,
    pub end_time: Option<DateTime<Utc>>,
    pub ended: bool,
    pub required_role_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Giveaway {
    pub fn from_entity(entity: entity::giveaway::Model) -> Self {
        Self {
            id: entity.id,
            message_id: entity.message_id,
            guild_id: entity.guild_id,
            channel_id: entity.channel_id,
            prize: entity.prize,
            winners: entity.winners,
            entrants: entity.entrants,
            host_id: entity.host_id,
            host_name: entity.host_name,
            end_time: entity.end_time,
            ended: entity.ended,
            required_role_id: entity.required_role_id,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> GiveawayDto {
        GiveawayDto {
            id: self.id,
            message_id: self.message_id,
            guild_id: self.guild_id,
            channel_id: self.channel_id,
            prize: self.prize,
            winners: self.winners,
            entrants: self.entrants,
            host_id: self.host_id,
            host_name: self.host_name,
            end_time: self.end_time,
            ended: self.ended,
            required_role_id: self.required_role_id,
            created_at: self.created_at,
        }
    }
}

/// Parameters for registering a giveaway posted by the bot.
#[derive(Debug, Clone)]
pub struct CreateGiveawayParam {
    pub guild_id: u64,
    pub message_id: u64,
    pub channel_id: u64,
    pub prize: String,
    pub winners: i32,
    pub host_id: u64,
    pub host_name: Option<String>,
    pub end_time: Option<DateTime<Utc>>,
    pub required_role_id: Option<u64>,
}

impl CreateGiveawayParam {
    pub fn from_dto(guild_id: u64, dto: CreateGiveawayDto) -> Self {
        Self {
            guild_id,
            message_id: dto.message_id,
            channel_id: dto.channel_id,
            prize: dto.prize,
            winners: dto.winners,
            host_id: dto.host_id,
            host_name: dto.host_name,
            end_time: dto.end_time,
            required_role_id: dto.required_role_id,
        }
    }
}

/// Parameters for updating the mutable giveaway fields.
///
/// `None` leaves the field unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateGiveawayParam {
    pub guild_id: u64,
    pub message_id: u64,
    pub entrants: Option<i32>,
    pub ended: Option<bool>,
}

impl UpdateGiveawayParam {
    pub fn from_dto(guild_id: u64, message_id: u64, dto: UpdateGiveawayDto) -> Self {
        Self {
            guild_id,
            message_id,
            entrants: dto.entrants,
            ended: dto.ended,
        }
    }
}
