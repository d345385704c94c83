use crate::{
    model::discord::GuildDto,
    server::{
        error::{auth::AuthError, AppError},
        middleware::{
            auth::{AuthGuard, Permission},
            session::{AuthSession, SessionUser},
        },
    },
};
use test_utils::{builder::TestBuilder, factory};

mod require;

fn guild(id: u64) -> GuildDto {
    GuildDto {
        id,
        name: format!("Guild {}", id),
        icon: None,
        icon_url: None,
        approximate_member_count: Some(10),
    }
}

fn session_user(user_id: u64, guild_ids: &[u64]) -> SessionUser {
    SessionUser {
        user_id,
        guilds: guild_ids.iter().copied().map(guild).collect(),
    }
}
