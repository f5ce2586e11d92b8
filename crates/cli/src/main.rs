use clap::Parser;
use rrda_api::AppState;
use rrda_application::use_cases::LookupUseCase;
use rrda_domain::CliOverrides;
use rrda_infrastructure::dns::{ResolverConfig, UpstreamResolver};
use std::sync::Arc;
use tracing::info;

mod bootstrap;
mod server;

#[derive(Parser)]
#[command(name = "RRDA", bin_name = "rrda")]
#[command(version)]
#[command(about = "RRDA - REST DNS API: DNS lookups over HTTP with JSON responses")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Address to listen on
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Upstream query timeout in milliseconds
    #[arg(short = 't', long)]
    timeout: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        bind_address: cli.host,
        web_port: cli.port,
        query_timeout: cli.timeout,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        config_file = cli.config.as_deref().unwrap_or("default"),
        timeout_ms = config.dns.query_timeout,
        "Starting RRDA"
    );

    let resolver = Arc::new(UpstreamResolver::new(ResolverConfig::from(&config.dns)));
    let lookup = Arc::new(LookupUseCase::new(resolver));
    let app_state = AppState::new(lookup);

    server::start_web_server(&config.server.listen_address(), app_state).await?;

    info!("Server shutdown complete");
    Ok(())
}
