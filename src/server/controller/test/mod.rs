//! Handler tests.
//!
//! Sync API tests drive the full router with `oneshot`; session-authenticated handlers
//! are called directly with the test context's session. Discord and the bot API are
//! replaced by small axum servers bound to an ephemeral local port.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::{IntoResponse, Response},
    Router,
};
use http_body_util::BodyExt;
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use tower::ServiceExt;
use tower_sessions::Session;

use crate::{
    model::discord::GuildDto,
    server::{
        config::Config,
        middleware::session::{AuthSession, SessionUser},
        router,
        startup::{setup_oauth_client, setup_reqwest_client},
        state::AppState,
    },
};
use test_utils::{builder::TestBuilder, factory};


const TEST_API_KEY: &str = "test-api-key";
const OWNER_ID: u64 = 111;
/// Nothing listens here, so every request fails to connect.
const UNREACHABLE_URL: &str = "http://127.0.0.1:1";

fn test_config(base_url: &str) -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        discord_client_id: "client-id".to_string(),
        discord_client_secret: "client-secret".to_string(),
        discord_redirect_url: "http://localhost:5000/api/auth/callback".to_string(),
        discord_auth_url: format!("{}/oauth2/authorize", base_url),
        discord_token_url: format!("{}/api/oauth2/token", base_url),
        discord_api_url: format!("{}/api", base_url),
        owner_id: OWNER_ID,
        dashboard_api_key: TEST_API_KEY.to_string(),
        bot_api_url: base_url.to_string(),
        bot_api_key: "bot-api-key".to_string(),
        bind_addr: "127.0.0.1:0".to_string(),
    }
}

fn app_state(db: &DatabaseConnection, config: Config) -> AppState {
    let http_client = setup_reqwest_client().unwrap();
    let oauth_client = setup_oauth_client(&config).unwrap();

    AppState::new(db.clone(), http_client, oauth_client, Arc::new(config))
}

/// Serves `router` on an ephemeral port and returns its base URL.
async fn spawn_mock(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{}", addr)
}

async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn session_guild(id: u64, name: &str) -> GuildDto {
    GuildDto {
        id,
        name: name.to_string(),
        icon: Some("abc".to_string()),
        icon_url: Some(format!("https://cdn.discordapp.com/icons/{}/abc.png", id)),
        approximate_member_count: Some(25),
    }
}

/// Stores a user and logs them into `session` with the given guilds.
async fn login_as(db: &DatabaseConnection, session: &Session, user_id: u64, guilds: Vec<GuildDto>) {
    factory::user::UserFactory::new(db)
        .discord_id(user_id.to_string())
        .owner(user_id == OWNER_ID)
        .build()
        .await
        .unwrap();

    AuthSession::new(session)
        .login(&SessionUser { user_id, guilds })
        .await
        .unwrap();
}
