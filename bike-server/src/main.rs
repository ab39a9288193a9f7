use std::process::ExitCode;

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use bike_server::cache::CachedStationSource;
use bike_server::config::{Config, REQUIRED_VARIABLES};
use bike_server::provider::{StationClient, StationError};
use bike_server::web::{AppState, create_router};

/// Filter used until configuration is known, or if it is unparseable.
const FALLBACK_LOG_LEVEL: &str = "info";

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error("failed to create station client: {0}")]
    Client(#[from] StationError),

    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    let config = Config::from_env();

    let log_level = config
        .as_ref()
        .map_or(FALLBACK_LOG_LEVEL, |c| c.log_level.as_str());
    init_tracing(log_level);

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            error!(
                "config: {e}. Check all required environment variables ({}) are set.",
                REQUIRED_VARIABLES.join(", ")
            );
            return ExitCode::FAILURE;
        }
    };

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Install the global subscriber, filtering with `directive`.
fn init_tracing(directive: &str) {
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|e| {
        eprintln!("Warning: invalid LOG_LEVEL {directive:?} ({e}), using {FALLBACK_LOG_LEVEL}");
        EnvFilter::new(FALLBACK_LOG_LEVEL)
    });

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn run(config: Config) -> Result<(), StartupError> {
    config.log();

    let client = StationClient::new(&config.provider())?;

    let cache_config = config.cache();
    if cache_config.ttl.is_zero() {
        warn!("station cache disabled");
    }
    let source = CachedStationSource::new(client, &cache_config);

    let state = AppState::new(source, config.contract.as_str());
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    info!("Bike station finder listening on http://{}", config.listen_addr);
    info!("  POST /fulfillment  - assistant webhook");
    info!("  GET  /health       - health check");

    axum::serve(listener, app).await?;

    Ok(())
}
