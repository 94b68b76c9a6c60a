// Iron Fish API server entry point

use std::net::SocketAddr;
use std::sync::Arc;

use ironfish_api::config::ApiConfig;
use ironfish_api::db::{DbPool, SeaOrmLedger};
use ironfish_api::handlers::ApiState;
use ironfish_api::logging;
use ironfish_api::queue::{AssetLoaderQueue, AssetLoaderWorker};
use ironfish_api::routes::create_router;
use ironfish_api::services::asset_loader::AssetLoader;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    logging::init();

    // Load API configuration from environment
    let config = ApiConfig::from_env();
    tracing::info!(
        "Configuration loaded (database: {})",
        logging::redact_database_url(&config.database.url)
    );

    // Establish database connection pool
    let db_pool = DbPool::new(&config).await?;
    tracing::info!("Connected to database");

    // Start the asset loader worker
    let (asset_loader_queue, receiver) = AssetLoaderQueue::new();
    let loader = AssetLoader::new(SeaOrmLedger::new(db_pool.shared_connection()));
    let worker = AssetLoaderWorker::new(
        loader,
        asset_loader_queue.stats(),
        receiver,
        config.asset_loader.clone(),
    );
    tokio::spawn(async move {
        if let Err(e) = worker.start().await {
            tracing::error!("Asset loader worker stopped: {}", e);
        }
    });

    let state = Arc::new(ApiState {
        repositories: db_pool.repositories(),
        asset_loader_queue,
    });
    let app = create_router(state, config.server.request_timeout);

    // Parse server address from config
    let addr: SocketAddr = config.server_addr().parse()?;

    // Start HTTP server
    tracing::info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
