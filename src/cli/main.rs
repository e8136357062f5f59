use clap::Parser;
use incident_resolver::{
    config::Config,
    error::AppError,
    search::IncidentSearchClient,
    shell::{SessionEnd, Shell},
    telemetry,
};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "incident-resolver-cli")]
#[command(about = "Interactive lookup of past incidents", long_about = None, version)]
struct Cli {
    /// Configuration file (TOML)
    #[arg(short, long, env = "CONFIG_PATH")]
    config: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref()).map_err(AppError::from)?;
    telemetry::init_tracing(&config.observability);

    let client = match IncidentSearchClient::from_config(&config.search) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!(error = %e, "Search client configuration rejected");
            eprintln!("❌ {}", e);
            return Ok(ExitCode::FAILURE);
        }
    };

    let stdin = io::stdin();
    let mut shell = Shell::new(&client, stdin.lock(), io::stdout());

    match shell.run(client.endpoint(), client.index_name()).await? {
        SessionEnd::Completed => Ok(ExitCode::SUCCESS),
        SessionEnd::Unreachable => Ok(ExitCode::FAILURE),
    }
}
