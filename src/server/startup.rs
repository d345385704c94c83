use std::time::Duration;

use oauth2::{basic::BasicClient, AuthType, AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};
use sea_orm::DatabaseConnection;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
    state::OAuth2Client,
};

/// Overall timeout for outbound HTTP requests.
const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Sessions expire after this many days without a request.
const SESSION_INACTIVITY_DAYS: i64 = 7;

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session layer backed by the application's Sqlite database.
///
/// Sessions are stored in the same pool as the rest of the data. The cookie is marked
/// secure when the dashboard is served over HTTPS.
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Layer ready to wrap the router
/// - `Err(AppError::SqlxErr)` - Failed to create the session table
pub async fn connect_to_session(
    db: &DatabaseConnection,
    config: &Config,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());

    session_store.migrate().await?;

    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(config.uses_https())
        .with_expiry(Expiry::OnInactivity(time::Duration::days(
            SESSION_INACTIVITY_DAYS,
        )));

    Ok(session_layer)
}

/// Builds the shared HTTP client.
///
/// Redirects are disabled so a compromised upstream can't bounce requests to
/// internal addresses.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(HTTP_TIMEOUT)
        .build()?;

    Ok(client)
}

/// Builds the OAuth2 client for Discord login.
///
/// Discord expects the client credentials in the request body of the token exchange.
pub fn setup_oauth_client(config: &Config) -> Result<OAuth2Client, AppError> {
    let invalid = |name: &str, e: oauth2::url::ParseError| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        reason: e.to_string(),
    };

    let client = BasicClient::new(ClientId::new(config.discord_client_id.clone()))
        .set_client_secret(ClientSecret::new(config.discord_client_secret.clone()))
        .set_auth_uri(
            AuthUrl::new(config.discord_auth_url.clone())
                .map_err(|e| invalid("DISCORD_AUTH_URL", e))?,
        )
        .set_token_uri(
            TokenUrl::new(config.discord_token_url.clone())
                .map_err(|e| invalid("DISCORD_TOKEN_URL", e))?,
        )
        .set_redirect_uri(
            RedirectUrl::new(config.discord_redirect_url.clone())
                .map_err(|e| invalid("DISCORD_REDIRECT_URL", e))?,
        )
        .set_auth_type(AuthType::RequestBody);

    Ok(client)
}
