use std::net::SocketAddr;

use tracing::{error, info};

use forum_api::{build_router, AppState};
use forum_infrastructure::database::connection;
use forum_shared::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    // Load configuration
    let config = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize telemetry; the guard flushes buffered logs on exit
    let _telemetry_guard = forum_shared::telemetry::init_telemetry(config.app.log_format)?;

    info!("{} starting ({})...", config.app.name, config.app.env);

    // Connect to Database
    info!("Opening database at {}...", config.database.url);
    let pool = connection::create_pool(&config.database).await?;
    if let Err(e) = connection::run_migrations(&pool).await {
        error!("Failed to run migrations: {}", e);
        return Err(e.into());
    }
    info!("Database ready.");

    // Build router
    let state = AppState::new(pool, config.session.clone());
    let app = build_router(state);

    // Bind address
    let host: std::net::IpAddr = config.app.host.parse()?;
    let addr = SocketAddr::from((host, config.app.port));
    info!("Listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
