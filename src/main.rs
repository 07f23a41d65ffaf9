//! Kitz Tool Gateway entry point.
//!
//! Parses command-line flags, initializes logging, loads configuration and
//! serves the built-in tools over HTTP until Ctrl-C.

use anyhow::Result;
use clap::Parser;
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

use kitz_gateway::{Config, Gateway, TransportService};

/// Command-line flags.
#[derive(Debug, Parser)]
#[command(name = "kitz-gateway", version, about = "Run Kitz Tool Gateway (v0.1).")]
struct Args {
    /// Host interface (default: 0.0.0.0)
    #[arg(long)]
    host: Option<String>,

    /// Port (default: 8787)
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration from environment
    let config = Config::from_env();

    // Initialize logging
    init_logging(&config.logging.level);

    // Command-line flags win over the environment
    let config = config.with_bind(args.host, args.port);
    config.validate()?;

    info!("Starting {} v{}", config.server.name, config.server.version);

    let transport = TransportService::new(config.transport.clone());
    let gateway = Gateway::new(config);

    transport.run(gateway).await?;

    info!("Server shutting down");

    Ok(())
}

/// Initialize the logging subsystem.
fn init_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .init();
}
