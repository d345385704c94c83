//! Owner-only views backed by the bot's own API.
//!
//! Bot API failures never surface here; the proxy returns fallback values instead.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{api::SuccessDto, bot::LimitParams},
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::moderation::clamp_limit,
        service::bot_api::BotApiService,
        state::AppState,
        util::extract::{ApiPath, ApiQuery},
    },
};

/// GET /api/bot/stats - Live bot statistics
pub async fn get_bot_stats(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Owner])
        .await?;

    let stats = BotApiService::new(&state.http_client, &state.config)
        .get_bot_stats()
        .await;

    Ok((StatusCode::OK, Json(stats)))
}

/// GET /api/bot/moderation - Latest moderation actions across all guilds
pub async fn get_bot_moderation(
    State(state): State<AppState>,
    session: Session,
    ApiQuery(params): ApiQuery<LimitParams>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Owner])
        .await?;

    let actions = BotApiService::new(&state.http_client, &state.config)
        .get_moderation_actions(clamp_limit(params.limit))
        .await;

    Ok((StatusCode::OK, Json(actions)))
}

/// GET /api/bot/giveaways - Giveaways the bot is running
pub async fn get_bot_giveaways(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Owner])
        .await?;

    let giveaways = BotApiService::new(&state.http_client, &state.config)
        .get_active_giveaways()
        .await;

    Ok((StatusCode::OK, Json(giveaways)))
}

/// POST /api/bot/giveaways/{message_id}/end - Ask the bot to end a giveaway
pub async fn end_bot_giveaway(
    State(state): State<AppState>,
    session: Session,
    ApiPath(message_id): ApiPath<u64>,
) -> Result<impl IntoResponse, AppError> {
    let auth = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Owner])
        .await?;

    let success = BotApiService::new(&state.http_client, &state.config)
        .end_giveaway(message_id)
        .await;

    tracing::info!(
        "Owner {} requested end of giveaway {}: {}",
        auth.user.discord_id,
        message_id,
        if success { "accepted" } else { "failed" }
    );

    Ok((StatusCode::OK, Json(SuccessDto { success })))
}
