use anyhow::Result;
use tracing::info;

use offgrid_api::{app, config, middleware};
use persistence::seed;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Load configuration
    let config = config::Config::load()?;

    // Initialize logging
    middleware::logging::init_logging(&config.logging);

    info!("Starting Off-Grid Manager API v{}", env!("CARGO_PKG_VERSION"));

    // Create database pool
    let pool = config.database_config().connect().await?;

    // Run migrations
    info!("Running database migrations...");
    sqlx::migrate!("../persistence/src/migrations")
        .run(&pool)
        .await?;
    info!("Migrations completed");

    // Optional startup seeding (both guards skip non-empty tables)
    if config.seed.default_inventory {
        seed::seed_default_inventory(&pool).await?;
    }
    if config.seed.sample_data {
        seed::seed_sample_data(&pool).await?;
    }

    // Build application
    let app = app::create_app(config.clone(), pool);

    // Start server
    let addr = config.socket_addr();
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
