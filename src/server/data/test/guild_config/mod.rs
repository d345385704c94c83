use crate::server::{
    data::guild_config::GuildConfigRepository,
    model::guild_config::{CreateGuildConfigParam, GuildConfigPatch},
};
use sea_orm::DbErr;
use serde_json::json;
use test_utils::{builder::TestBuilder, factory};

mod apply_partial_update;
mod find_by_guild_id;
mod get_or_create;

fn param(guild_id: u64) -> CreateGuildConfigParam {
    CreateGuildConfigParam {
        guild_id,
        ..Default::default()
    }
}

fn patch(body: serde_json::Value) -> GuildConfigPatch {
    GuildConfigPatch::from_json(&body).unwrap()
}
