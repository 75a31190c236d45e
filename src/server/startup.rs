use oauth2::{basic::BasicClient, AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};
use sea_orm::DatabaseConnection;
use time::Duration;
use tower_sessions::{cookie::SameSite, session_store::ExpiredDeletion, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
    state::OAuth2Client,
};

/// How often expired sessions are purged from the store.
const SESSION_CLEANUP_INTERVAL: std::time::Duration = std::time::Duration::from_secs(60);

/// Connects to the Sqlite database and runs pending migrations.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
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
/// Sessions expire after 7 days of inactivity. A background task deletes expired rows
/// for the lifetime of the process.
pub async fn connect_to_session(
    db: &DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());
    session_store.migrate().await?;

    let cleanup_store = session_store.clone();
    tokio::spawn(async move {
        if let Err(e) = cleanup_store
            .continuously_delete_expired(SESSION_CLEANUP_INTERVAL)
            .await
        {
            tracing::error!("Session cleanup task stopped: {}", e);
        }
    });

    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)));

    Ok(session_layer)
}

/// HTTP client for outbound calls. Redirects are not followed.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(client)
}

pub fn setup_oauth_client(config: &Config) -> Result<OAuth2Client, AppError> {
    let auth_url = AuthUrl::new(config.oauth_auth_url.clone())
        .map_err(|source| invalid_url("OAUTH_AUTH_URL", source))?;
    let token_url = TokenUrl::new(config.oauth_token_url.clone())
        .map_err(|source| invalid_url("OAUTH_TOKEN_URL", source))?;
    let redirect_url = RedirectUrl::new(config.oauth_redirect_url.clone())
        .map_err(|source| invalid_url("OAUTH_REDIRECT_URL", source))?;

    let client = BasicClient::new(ClientId::new(config.oauth_client_id.clone()))
        .set_client_secret(ClientSecret::new(config.oauth_client_secret.clone()))
        .set_auth_uri(auth_url)
        .set_token_uri(token_url)
        .set_redirect_uri(redirect_url);

    Ok(client)
}

fn invalid_url(name: &str, source: url::ParseError) -> AppError {
    ConfigError::InvalidUrl {
        name: name.to_string(),
        source,
    }
    .into()
}
