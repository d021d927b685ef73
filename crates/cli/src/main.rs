use clap::{Parser, Subcommand};
use std::sync::Arc;
use tracing::{debug, error, info};
use zonecheck_domain::CliOverrides;

mod bootstrap;
mod commands;
mod di;

#[derive(Parser)]
#[command(name = "zonecheck")]
#[command(version)]
#[command(about = "Zonecheck - verify DNS providers against live nameservers")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Provider credentials and test domains
    #[arg(long, value_name = "FILE")]
    providers: Option<String>,

    /// Simulate a second DNS provider's nameservers
    #[arg(long)]
    dual_providers: bool,

    /// Actually query DNS servers to verify results
    #[arg(long)]
    query: bool,

    /// Per-query timeout in milliseconds
    #[arg(long, value_name = "MS")]
    timeout_ms: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the integration suite against every configured provider (default)
    Test,

    /// Flatten a domain's SPF record by inlining whitelisted includes
    Spf(commands::spf::SpfArgs),
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        log_level: cli.log_level.clone(),
        timeout_ms: cli.timeout_ms,
        providers_file: cli.providers.clone(),
        dual_providers: cli.dual_providers,
        verify_live: cli.query,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config.logging);

    info!("Starting zonecheck v{}", env!("CARGO_PKG_VERSION"));
    debug!(
        providers_file = %config.harness.providers_file,
        timeout_ms = config.query.timeout_ms,
        dual_providers = config.harness.dual_providers,
        verify_live = config.harness.verify_live,
        "Configuration loaded"
    );

    let succeeded = match cli.command.unwrap_or(Command::Test) {
        Command::Test => {
            let registry = Arc::new(di::build_registry(&config)?);
            commands::harness::run(&config, registry).await?
        }
        Command::Spf(args) => commands::spf::run(&config, args).await?,
    };

    if !succeeded {
        error!("zonecheck finished with failures");
        std::process::exit(1);
    }

    Ok(())
}
