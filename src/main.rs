use anyhow::{Context, Result};
use std::env;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;
use transfer_sweeper::api::client::TransmissionClient;
use transfer_sweeper::core::config::Config;
use transfer_sweeper::core::error::SweepError;
use transfer_sweeper::core::tracing_init::init_tracing;
use transfer_sweeper::sweeper::{sweep, write_banner};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    let config_path = if args.len() > 1 {
        PathBuf::from(&args[1])
    } else {
        PathBuf::from("config.toml")
    };

    // Load and validate configuration
    let config = Config::from_file(&config_path)
        .context(format!(
            "Failed to load configuration from '{}'. \
            Copy config.example.toml to config.toml and point it at your Transmission daemon.",
            config_path.display()
        ))?;

    init_tracing(&config.logging);

    // One sequential pass; no worker threads needed
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to build Tokio runtime")?;

    runtime.block_on(async_main(config, config_path))
}

async fn async_main(config: Config, config_path: PathBuf) -> Result<()> {
    info!(
        config_path = %config_path.display(),
        url = %config.transmission.rpc_url(),
        seeder_threshold = config.policy.seeder_threshold,
        log_level = %config.logging.level,
        "Transfer sweeper starting"
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    write_banner(&mut out, &config.policy).context("Failed to write to stdout")?;

    let mut client = TransmissionClient::connect(&config.transmission)
        .await
        .map_err(SweepError::Connectivity)
        .context(format!(
            "Failed to connect to Transmission at {}",
            config.transmission.rpc_url()
        ))?;

    let paused = sweep(&mut client, &config.policy, &mut out)
        .await
        .context("Sweep aborted")?;

    out.flush().context("Failed to flush stdout")?;

    info!(paused = paused, "Transfer sweeper finished");

    Ok(())
}
