use axum::Router;
use sea_orm::DatabaseConnection;
use tower_sessions::{SessionManagerLayer, SessionStore};
use tower_sessions_redis_store::RedisStore;

use crate::server::{
    config::Config, error::Error, model::app::AppState, router, service::auth::AuthService,
};

/// Name of the session cookie.
pub const SESSION_COOKIE_NAME: &str = "dealership_session";

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Connect to Valkey/Redis and configure session management
pub async fn connect_to_session(
    config: &Config,
) -> Result<SessionManagerLayer<RedisStore<tower_sessions_redis_store::fred::prelude::Pool>>, Error>
{
    use time::Duration;
    use tower_sessions::{cookie::SameSite, Expiry};
    use tower_sessions_redis_store::fred::prelude::*;

    let config = Config::from_url(&config.valkey_url)?;
    let pool = Pool::new(config, None, None, None, 6)?;

    pool.connect();
    pool.wait_for_connect().await?;

    let session_store = RedisStore::new(pool);

    // Secure cookies outside of debug builds
    let secure_cookies = !cfg!(debug_assertions);

    let session = SessionManagerLayer::new(session_store)
        .with_name(SESSION_COOKIE_NAME)
        .with_secure(secure_cookies)
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)));

    Ok(session)
}

/// Create the admin account, or reset its password, when `ADMIN_PASSWORD` is configured
pub async fn seed_admin(config: &Config, db: &DatabaseConnection) -> Result<(), Error> {
    let Some(password) = config.admin_password.as_deref() else {
        return Ok(());
    };

    AuthService::new(db, &config.admin_username)
        .ensure_admin(password)
        .await
}

/// Assemble the application from its state and a session layer
pub fn app<S>(state: AppState, session: SessionManagerLayer<S>) -> Router
where
    S: SessionStore + Clone,
{
    router::routes().with_state(state).layer(session)
}
