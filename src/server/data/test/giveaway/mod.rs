use crate::server::{
    data::giveaway::GiveawayRepository,
    model::giveaway::{CreateGiveawayParam, UpdateGiveawayParam},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod count_active_for_guilds;
mod create;
mod update;

fn giveaway(guild_id: u64, message_id: u64) -> CreateGiveawayParam {
    CreateGiveawayParam {
        guild_id,
        message_id,
        channel_id: 300,
        prize: "Nitro".to_string(),
        winners: 2,
        host_id: 400,
        host_name: Some("Host".to_string()),
        end_time: None,
        required_role_id: Some(500),
    }
}
