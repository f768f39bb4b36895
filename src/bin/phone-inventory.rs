use std::path::PathBuf;

use clap::Parser;
use reqwest::Client;
use phone_inventory::inventory;
use phone_inventory::utils::config_loader;
use phone_inventory::utils::logging;
use anyhow::Result;
use phone_inventory::utils::logging::LogLevel;
use tracing::{error, info};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, env = "CONFIG", default_value = "phone-inventory.yaml")]
    config: String,
    #[arg(long, env = "ENV_FILE", default_value = ".env")]
    env_file: String,
    #[arg(long, env = "LOG_LEVEL", value_enum, ignore_case = true)]
    log_level: Option<LogLevel>,
    /// overrides settings.output_dir
    #[arg(short, long)]
    output_dir: Option<PathBuf>,
    /// query the provider for unassigned numbers only
    #[arg(long)]
    unassigned_only: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // -------------------------------
    // 1. Read args, .env and YAML config
    // -------------------------------

    let args = Args::parse();
    let mut service_config = config_loader::run(&args.config, &args.env_file)?;

    if let Some(output_dir) = args.output_dir {
        service_config.settings.output_dir = output_dir;
    }
    service_config.settings.unassigned_only |= args.unassigned_only;

    // -------------------------------
    // 2. Logging
    // -------------------------------

    logging::run(&service_config, args.log_level)?;
    info!(">>>   Phone Number Inventory   <<<");
    info!("settings loaded from '{}' / '{}'", args.config, args.env_file);

    // -------------------------------
    // 3. Create request client
    // -------------------------------

    let client = Client::new();

    // -------------------------------
    // 4. Authenticate, fetch, write files
    // -------------------------------

    let report = inventory::run(&service_config, &client)
        .await
        .inspect_err(|e| error!("inventory run failed: {}", e))?;

    for path in &report.written {
        info!("wrote {}", path.display());
    }
    Ok(())
}
