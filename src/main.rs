use dotenvy::dotenv;
use product_inventory::{
    api::{self, ApiState},
    config::{self, database},
    core::CreatePolicy,
    errors::Result,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; variables may also be set externally
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Load settings
    let settings = config::load_settings()?;

    // 4. Connect and ensure the product table exists
    let db = database::create_connection(&settings.database_url)
        .await
        .inspect_err(|e| error!("Failed to connect to database: {}", e))?;
    database::create_tables(&db)
        .await
        .inspect(|_| info!("Database initialized successfully."))
        .inspect_err(|e| error!("Failed to initialize database: {}", e))?;

    // 5. Serve until Ctrl+C
    let state = ApiState::new(
        db,
        CreatePolicy {
            allow_duplicate_snapshots: settings.allow_duplicate_snapshots,
        },
    );
    let app = api::create_router(state);
    let listener = tokio::net::TcpListener::bind(&settings.bind_address)
        .await
        .inspect_err(|e| error!("Failed to bind {}: {}", settings.bind_address, e))?;
    info!("API server listening on http://{}", settings.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down.");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received.");
}
