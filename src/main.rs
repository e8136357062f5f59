use clap::Parser;
use incident_resolver::{
    config::Config,
    error::AppError,
    search::IncidentSearchClient,
    telemetry,
    web::{build_router, AppState},
};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "incident-resolver")]
#[command(about = "Web form for looking up past incidents", version)]
struct Args {
    /// Configuration file (TOML)
    #[arg(short, long, env = "CONFIG_PATH")]
    config: Option<PathBuf>,

    /// Override the listen host
    #[arg(long)]
    host: Option<String>,

    /// Override the listen port
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Load configuration
    let mut config = Config::load(args.config.as_deref()).map_err(AppError::from)?;
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    telemetry::init_tracing(&config.observability);
    tracing::info!("Starting incident-resolver v{}", env!("CARGO_PKG_VERSION"));

    // The same client construction as the CLI; one handle for the process lifetime
    let client = IncidentSearchClient::from_config(&config.search).map_err(AppError::from)?;
    tracing::info!(
        endpoint = %client.endpoint(),
        index = %client.index_name(),
        "✅ Search client configured"
    );

    let app = build_router(AppState::new(Arc::new(client)));

    let http_addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&http_addr).await?;

    tracing::info!("🚀 Web form listening on http://{}", http_addr);
    tracing::info!("   Health check: http://{}/health", http_addr);
    tracing::info!("   JSON lookup: http://{}/v1/incidents/search?q=...", http_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shutting down gracefully...");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
