use anyhow::Result;
use std::sync::Arc;

use travelmate_backend::{
    app,
    auth::TokenIssuer,
    config, db, logging,
    store::{MemoryUserRepository, PgUserRepository, UserRepository},
};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let settings = config::Settings::from_env()?;

    logging::init_logging(&settings.env);

    tracing::info!(
        env = ?settings.env,
        server_addr = %settings.server_addr,
        "Starting TravelMate backend"
    );

    if settings.uses_dev_secret() {
        tracing::warn!("JWT_SECRET not set - using the development secret");
    }

    let store: Arc<dyn UserRepository> = match &settings.database_url {
        Some(database_url) => {
            let pool = db::create_pool(&settings, database_url).await?;
            db::run_migrations(&pool).await?;
            Arc::new(PgUserRepository::new(pool))
        }
        None => {
            tracing::warn!("DATABASE_URL not set - using in-memory store, data is lost on restart");
            Arc::new(MemoryUserRepository::new())
        }
    };

    let tokens = TokenIssuer::new(settings.jwt_secret.as_bytes(), settings.jwt_ttl_seconds);

    let state = app::AppState::new(store, settings.clone(), tokens);
    let app = app::create_app(state);

    let listener = tokio::net::TcpListener::bind(&settings.server_addr).await?;
    tracing::info!("Listening on {}", settings.server_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
