//! Config Sync API used by the bot process.
//!
//! Every handler takes `SyncApiKey` first, so requests without the shared secret are
//! rejected before the body is read or the store is touched.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::Value;

use crate::{
    model::{
        api::SuccessDto,
        giveaway::{CreateGiveawayDto, UpdateGiveawayDto},
        moderation::CreateModerationLogDto,
    },
    server::{
        error::AppError,
        middleware::api_key::SyncApiKey,
        model::{
            giveaway::{CreateGiveawayParam, UpdateGiveawayParam},
            guild_config::{CreateGuildConfigParam, GuildConfigPatch},
            moderation::RecordModerationParam,
        },
        service::{
            giveaway::GiveawayService, guild_config::GuildConfigService,
            moderation::ModerationService,
        },
        state::AppState,
        util::extract::{ApiJson, ApiPath},
    },
};

/// GET /guild/{guild_id}/config - Configuration as stored
///
/// Never creates a configuration.
///
/// # Returns
/// - `200 OK` - GuildConfigDto
/// - `403 Forbidden` - Missing or wrong API key
/// - `404 Not Found` - No configuration for the guild
pub async fn get_config(
    _key: SyncApiKey,
    State(state): State<AppState>,
    ApiPath(guild_id): ApiPath<u64>,
) -> Result<impl IntoResponse, AppError> {
    let config = GuildConfigService::new(&state.db)
        .get(guild_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Guild configuration not found".to_string()))?;

    Ok((StatusCode::OK, Json(config.into_dto())))
}

/// POST /guild/{guild_id}/config - Create if needed and partially update
///
/// # Returns
/// - `200 OK` - `{"success": true}`
/// - `400 Bad Request` - Malformed body or wrong-typed value
/// - `403 Forbidden` - Missing or wrong API key
pub async fn update_config(
    _key: SyncApiKey,
    State(state): State<AppState>,
    ApiPath(guild_id): ApiPath<u64>,
    ApiJson(payload): ApiJson<Value>,
) -> Result<impl IntoResponse, AppError> {
    let patch = GuildConfigPatch::from_json(&payload)?;

    GuildConfigService::new(&state.db)
        .update(
            CreateGuildConfigParam {
                guild_id,
                ..Default::default()
            },
            patch,
        )
        .await?;

    Ok((StatusCode::OK, Json(SuccessDto { success: true })))
}

/// POST /guild/{guild_id}/moderation - Record a moderation action
///
/// # Returns
/// - `201 Created` - The stored ModerationLogDto
/// - `400 Bad Request` - Malformed body
/// - `403 Forbidden` - Missing or wrong API key
pub async fn record_moderation(
    _key: SyncApiKey,
    State(state): State<AppState>,
    ApiPath(guild_id): ApiPath<u64>,
    ApiJson(payload): ApiJson<CreateModerationLogDto>,
) -> Result<impl IntoResponse, AppError> {
    let entry = ModerationService::new(&state.db)
        .record(RecordModerationParam::from_dto(guild_id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(entry.into_dto())))
}

/// POST /guild/{guild_id}/giveaways - Register a giveaway
///
/// # Returns
/// - `201 Created` - The stored GiveawayDto
/// - `403 Forbidden` - Missing or wrong API key
/// - `409 Conflict` - Message id already registered
pub async fn create_giveaway(
    _key: SyncApiKey,
    State(state): State<AppState>,
    ApiPath(guild_id): ApiPath<u64>,
    ApiJson(payload): ApiJson<CreateGiveawayDto>,
) -> Result<impl IntoResponse, AppError> {
    let giveaway = GiveawayService::new(&state.db)
        .create(CreateGiveawayParam::from_dto(guild_id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(giveaway.into_dto())))
}

/// PATCH /guild/{guild_id}/giveaways/{message_id} - Update entrants or ended flag
///
/// # Returns
/// - `200 OK` - Updated GiveawayDto
/// - `403 Forbidden` - Missing or wrong API key
/// - `404 Not Found` - No such giveaway in the guild
pub async fn update_giveaway(
    _key: SyncApiKey,
    State(state): State<AppState>,
    ApiPath((guild_id, message_id)): ApiPath<(u64, u64)>,
    ApiJson(payload): ApiJson<UpdateGiveawayDto>,
) -> Result<impl IntoResponse, AppError> {
    let giveaway = GiveawayService::new(&state.db)
        .update(UpdateGiveawayParam::from_dto(guild_id, message_id, payload))
        .await?;

    Ok((StatusCode::OK, Json(giveaway.into_dto())))
}
