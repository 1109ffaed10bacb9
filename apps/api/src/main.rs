use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;

use roster_api::api::{router, AppState};
use roster_api::config::AppConfig;
use roster_api::domain::repositories::RosterRepository;
use roster_api::infrastructure::repositories::{InMemoryRosterRepository, PostgresRosterRepository};
use roster_api::telemetry;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    telemetry::init_tracing();

    let config = AppConfig::from_env()?;

    let repository: Arc<dyn RosterRepository> = match &config.database_url {
        Some(database_url) => {
            tracing::info!("Connecting to database...");
            let pool = PgPoolOptions::new()
                .max_connections(config.max_connections)
                .connect(database_url)
                .await?;

            let repository = PostgresRosterRepository::new(pool);
            repository.migrate().await?;
            tracing::info!("Database connected and migrated");
            Arc::new(repository)
        }
        None => {
            tracing::warn!("DATABASE_URL not set, rosters are kept in memory only");
            Arc::new(InMemoryRosterRepository::new())
        }
    };

    tracing::info!(backend = repository.backend(), "Storage ready");
    let app = router(AppState::new(repository));

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
