use config::{AnthemConfig, Args};
use server::logging::{self, LoggingConfig};
use server::{app, metrics, state::AppState};
use std::net::{IpAddr, SocketAddr};

#[cfg(not(target_os = "windows"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse_args();
    let loaded_env = args.load_env_file();

    let config = AnthemConfig::from_env()?;
    logging::init(LoggingConfig::from(&config.log))?;

    if let Some(path) = loaded_env {
        tracing::info!("Loaded environment from {}", path.display());
    }

    if config.metrics.enabled {
        metrics::init(&config.metrics.prometheus_prefix);
    }

    // Extract values we need before handing config to the state
    let host: IpAddr = config.express.bind_host.parse()?;
    let port = config.express.port;
    let log_level = config.log.level.clone();

    let state = AppState::new(config)?;
    let app = app::create_app(state);

    let addr = SocketAddr::new(host, port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Log level: {}", log_level);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
