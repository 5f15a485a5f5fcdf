mod logging;

use anyhow::Context;
use aspace_client::{AspaceClient, ClientConfig};
use clap::Parser;
use destroyer_core::constants::{
    DEFAULT_CONFIG_FILE, DEFAULT_LOG_FILE, DEFAULT_TIMEOUT_SECS, TOOL_NAME,
};
use destroyer_core::{RunConfig, RunContext};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "thumbnail-destroyer")]
#[command(about = "Unlink and delete thumbnail-only digital objects from a resource's archival objects")]
#[command(version)]
struct Cli {
    /// Client configuration file (YAML keyed by environment)
    #[arg(long, env = "ASPACE_CONFIG", default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,
    /// Environment to use from the configuration file
    #[arg(long, env = "ASPACE_ENV")]
    env: String,
    /// Classify only; nothing is unlinked or deleted
    #[arg(long, alias = "test")]
    dry_run: bool,
    /// Log file, recreated on every run
    #[arg(long, default_value = DEFAULT_LOG_FILE)]
    log: PathBuf,
    /// Repository ID of the target resource
    #[arg(long, env = "ASPACE_REPOSITORY")]
    repository: i64,
    /// Resource ID whose archival objects are checked
    #[arg(long, env = "ASPACE_RESOURCE")]
    resource: i64,
    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout: u64,
}

/// Writes `msg` to the log and echoes it to stdout.
fn announce(msg: &str) {
    tracing::info!("{}", msg);
    println!("[INFO] {}", msg);
}

fn run(cli: Cli) -> anyhow::Result<()> {
    announce(&format!(
        "running `{}` v{}",
        TOOL_NAME,
        env!("CARGO_PKG_VERSION")
    ));

    let run_config = RunConfig::new(cli.repository, cli.resource, cli.dry_run)?;

    let client_config = ClientConfig::from_file(&cli.config, &cli.env).with_context(|| {
        format!(
            "failed to load environment '{}' from {}",
            cli.env,
            cli.config.display()
        )
    })?;
    let client = AspaceClient::connect(&client_config, cli.timeout)
        .with_context(|| format!("failed to connect to {}", client_config.url))?;
    announce(&format!("client created for {}", client.root_url()));

    if run_config.dry_run() {
        println!("[INFO] running in dry-run mode, no digital objects will be unlinked or deleted");
    }

    let mut ctx = RunContext::new(client, run_config);
    let summary = ctx.run();
    println!("[INFO] {}", summary);

    Ok(())
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    logging::init(&cli.log)?;

    run(cli).inspect_err(|e| tracing::error!("{:#}", e))
}
