//! # Netpanel
//!
//! Serves the DNS configuration API: compiles zone and option definitions
//! into BIND artifacts, checks them and reloads the resolver.

mod bootstrap;
mod di;
mod server;

use clap::Parser;
use netpanel_domain::{CliOverrides, ExecutionMode};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "netpanel")]
#[command(version)]
#[command(about = "DNS configuration compiler and resolver control panel")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// Bind address for the web server
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Web server port
    #[arg(short = 'w', long)]
    web_port: Option<u16>,

    /// Execution mode: production, or simulation/development
    #[arg(short = 'm', long)]
    mode: Option<ExecutionMode>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'l', long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        bind_address: cli.bind,
        web_port: cli.web_port,
        mode: cli.mode,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;
    bootstrap::init_logging(&config);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        mode = %config.bind.mode,
        "Starting netpanel"
    );
    if config.bind.mode.is_simulation() {
        warn!(
            sandbox = %config.bind.sandbox_dir.display(),
            "Simulation mode: artifacts go to the sandbox, checker and reload are only logged"
        );
    }

    let services = di::Services::new(&config);
    server::start_web_server(&config, services.into_state()).await?;

    info!("Netpanel stopped");
    Ok(())
}
