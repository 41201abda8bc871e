//! Courseware-RS - course platform backend
//!
//! Serves the course API with role-gated routes.

#![allow(missing_docs)]

use clap::Parser;
use courseware_rs::{Config, Courseware};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "courseware", version, about)]
struct Args {
    /// Path to a YAML configuration file
    #[arg(short, long, env = "COURSEWARE_CONFIG")]
    config: Option<PathBuf>,

    /// Override the bind host
    #[arg(long)]
    host: Option<String>,

    /// Override the bind port
    #[arg(short, long)]
    port: Option<u16>,

    /// Emit logs as JSON
    #[arg(long, env = "COURSEWARE_LOG_JSON")]
    json_logs: bool,
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn load_config(args: &Args) -> courseware_rs::Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::from_file(path).await?,
        None => Config::from_env()?,
    };

    if let Some(host) = &args.host {
        config.app.server.host = host.clone();
    }
    if let Some(port) = args.port {
        config.app.server.port = port;
    }
    config.validate()?;
    Ok(config)
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let args = Args::parse();
    init_tracing(args.json_logs);

    let config = match load_config(&args).await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if args.config.is_none() {
        info!("No config file given, using environment configuration");
    }
    if config.seed().seed_on_start {
        warn!("Sample data will be seeded on startup");
    }

    let result = match Courseware::new(config).await {
        Ok(service) => service.run().await,
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
