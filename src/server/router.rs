use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::server::{
    controller::{auth, bot, guild, sync, user},
    state::AppState,
};

/// Builds every route of the application.
///
/// Session-authenticated dashboard routes live under `/api`; the Config Sync API used
/// by the bot lives under `/guild` and authenticates with the shared API key.
pub fn router() -> Router<AppState> {
    Router::new().merge(dashboard_routes()).merge(sync_routes())
}

fn dashboard_routes() -> Router<AppState> {
    Router::new()
        .route("/api/auth/login", get(auth::login))
        .route("/api/auth/callback", get(auth::callback))
        .route("/api/auth/logout", get(auth::logout))
        .route("/api/auth/user", get(auth::get_user))
        .route("/api/flash", get(user::get_flash))
        .route("/api/user/guilds", get(user::get_user_guilds))
        .route("/api/dashboard", get(user::get_dashboard))
        .route(
            "/api/guild/{guild_id}/config",
            get(guild::get_guild_config).post(guild::update_guild_config),
        )
        .route(
            "/api/guild/{guild_id}/moderation",
            get(guild::get_guild_moderation),
        )
        .route(
            "/api/guild/{guild_id}/giveaways",
            get(guild::get_guild_giveaways),
        )
        .route("/api/bot/stats", get(bot::get_bot_stats))
        .route("/api/bot/moderation", get(bot::get_bot_moderation))
        .route("/api/bot/giveaways", get(bot::get_bot_giveaways))
        .route(
            "/api/bot/giveaways/{message_id}/end",
            post(bot::end_bot_giveaway),
        )
}

fn sync_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/guild/{guild_id}/config",
            get(sync::get_config).post(sync::update_config),
        )
        .route("/guild/{guild_id}/moderation", post(sync::record_moderation))
        .route("/guild/{guild_id}/giveaways", post(sync::create_giveaway))
        .route(
            "/guild/{guild_id}/giveaways/{message_id}",
            patch(sync::update_giveaway),
        )
}
