use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::Value;
use tower_sessions::Session;

use crate::{
    model::bot::LimitParams,
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, AuthenticatedUser, Permission},
        model::guild_config::{CreateGuildConfigParam, GuildConfigPatch},
        service::{
            giveaway::GiveawayService, guild_config::GuildConfigService,
            moderation::ModerationService,
        },
        state::AppState,
        util::extract::{ApiJson, ApiPath, ApiQuery},
    },
};

/// Seeds a new configuration with the name and icon from the session's guild list.
fn seed_from_session(auth: &AuthenticatedUser, guild_id: u64) -> CreateGuildConfigParam {
    let guild = auth.session.guild(guild_id);

    CreateGuildConfigParam {
        guild_id,
        guild_name: guild.map(|guild| guild.name.clone()),
        guild_icon: guild.and_then(|guild| guild.icon_url.clone()),
    }
}

/// GET /api/guild/{guild_id}/config - Guild configuration
///
/// Creates the configuration with defaults on first access.
///
/// # Access Control
/// - `Guild(guild_id)` - Guild must be in the session's guild list
///
/// # Returns
/// - `200 OK` - GuildConfigDto
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Guild not in the session
pub async fn get_guild_config(
    State(state): State<AppState>,
    session: Session,
    ApiPath(guild_id): ApiPath<u64>,
) -> Result<impl IntoResponse, AppError> {
    let auth = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Guild(guild_id)])
        .await?;

    let config = GuildConfigService::new(&state.db)
        .get_or_create(seed_from_session(&auth, guild_id))
        .await?;

    Ok((StatusCode::OK, Json(config.into_dto())))
}

/// POST /api/guild/{guild_id}/config - Partially update the guild configuration
///
/// Unknown keys are ignored; a recognized key with a wrong-typed value rejects the
/// whole request.
///
/// # Access Control
/// - `Guild(guild_id)` - Guild must be in the session's guild list
///
/// # Returns
/// - `200 OK` - Updated GuildConfigDto
/// - `400 Bad Request` - Malformed body or wrong-typed value
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Guild not in the session
pub async fn update_guild_config(
    State(state): State<AppState>,
    session: Session,
    ApiPath(guild_id): ApiPath<u64>,
    ApiJson(payload): ApiJson<Value>,
) -> Result<impl IntoResponse, AppError> {
    let auth = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Guild(guild_id)])
        .await?;

    let patch = GuildConfigPatch::from_json(&payload)?;

    let config = GuildConfigService::new(&state.db)
        .update(seed_from_session(&auth, guild_id), patch)
        .await?;

    Ok((StatusCode::OK, Json(config.into_dto())))
}

/// GET /api/guild/{guild_id}/moderation - Latest moderation entries
///
/// `limit` defaults to 10 and is capped at 100.
pub async fn get_guild_moderation(
    State(state): State<AppState>,
    session: Session,
    ApiPath(guild_id): ApiPath<u64>,
    ApiQuery(params): ApiQuery<LimitParams>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Guild(guild_id)])
        .await?;

    let entries = ModerationService::new(&state.db)
        .get_latest(guild_id, params.limit)
        .await?;

    let entries_dto: Vec<_> = entries.into_iter().map(|e| e.into_dto()).collect();

    Ok((StatusCode::OK, Json(entries_dto)))
}

/// GET /api/guild/{guild_id}/giveaways - Guild giveaways, newest first
pub async fn get_guild_giveaways(
    State(state): State<AppState>,
    session: Session,
    ApiPath(guild_id): ApiPath<u64>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Guild(guild_id)])
        .await?;

    let giveaways = GiveawayService::new(&state.db).get_by_guild(guild_id).await?;

    let giveaways_dto: Vec<_> = giveaways.into_iter().map(|g| g.into_dto()).collect();

    Ok((StatusCode::OK, Json(giveaways_dto)))
}
