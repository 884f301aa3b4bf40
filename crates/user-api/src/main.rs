//! User API Server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p user-api -- --config config/default.yaml
//! ```
//!
//! Any setting can be overridden with `APP__SECTION__KEY` environment
//! variables, e.g. `APP__DATABASE__URL`.

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};
use user_common::{
    try_init_tracing_with_config, AppConfig, AppError, TracingConfig, DEFAULT_CONFIG_PATH,
};

/// User CRUD API server
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Path to the YAML configuration file
    #[arg(short, long, env = "APP_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match AppConfig::load(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Failed to load configuration from {}: {e}",
                cli.config.display()
            );
            std::process::exit(AppError::from(e).exit_code());
        }
    };

    if let Err(e) = try_init_tracing_with_config(&TracingConfig::from(&config.log)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    info!(
        address = %config.server.address(),
        config = %cli.config.display(),
        "Starting User API Server..."
    );

    if let Err(e) = user_api::run(config).await {
        error!(error = %e, "Server failed");
        std::process::exit(e.exit_code());
    }
}
