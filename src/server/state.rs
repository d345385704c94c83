//! Shared handles passed to every handler through `State<AppState>`.

use std::sync::Arc;

use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    Client, EmptyExtraTokenFields, EndpointNotSet, EndpointSet, RevocationErrorResponseType,
    StandardErrorResponse, StandardRevocableToken, StandardTokenIntrospectionResponse,
    StandardTokenResponse,
};
use sea_orm::DatabaseConnection;

use crate::server::config::Config;

/// Discord OAuth2 client with the authorize and token endpoints set.
pub(crate) type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

/// Cloned per request; every field is a pool, an `Arc` or otherwise cheap to clone.
#[derive(Clone)]
pub struct AppState {
    /// Sqlite pool shared with the session store.
    pub db: DatabaseConnection,
    /// Outbound client for Discord and the bot API. Never follows redirects.
    pub http_client: reqwest::Client,
    pub oauth_client: OAuth2Client,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        oauth_client: OAuth2Client,
        config: Arc<Config>,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
            config,
        }
    }
}
