use election_api::config::ServerConfig;
use election_api::db;
use election_api::startup::AppState;
use tracing_subscriber::EnvFilter;

#[macro_use]
extern crate tracing;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    // initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::from_env()?;

    // the listener is only bound once the database is open
    let pool = db::init_db(&config.database_url).await.map_err(|e| {
        error!("could not open {}: {e}", config.database_url);
        e
    })?;
    info!("Connected to the election database.");

    let app = election_api::app(AppState::new(pool));

    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server running on {addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
