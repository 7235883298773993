use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::process;
use tracing::info;

use fair_billing::config::{Config, SortKey};
use fair_billing::logging::init_logging;
use fair_billing::BillingAnalyzer;

#[derive(Parser)]
#[command(name = "fair-billing")]
#[command(about = "Per-user session counts and billed seconds from a start/end event log")]
#[command(version)]
struct Cli {
    /// Log file with one `HH:MM:SS <user> <Start|End>` record per line
    #[arg(short, long)]
    input: PathBuf,

    /// Output in JSON format
    #[arg(long)]
    json: bool,

    /// Order users by name, billed seconds or session count
    #[arg(long, value_enum)]
    sort_by: Option<SortKey>,

    /// Decimal places for billed seconds
    #[arg(long)]
    precision: Option<usize>,

    /// Log level (overridden by RUST_LOG)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => return handle_error(e, cli.json),
    };
    let _guard = init_logging(&config);
    let json = config.output.json;

    if let Some(path) = &config.source {
        info!(config_file = %path.display(), "Loaded configuration from file");
    }
    info!(input = %cli.input.display(), "Executing fair billing");

    let analyzer = BillingAnalyzer::new();
    match analyzer.run(&cli.input, &config.output).await {
        Ok(report) => {
            if !report.is_empty() {
                println!("{}", report);
            }
            info!("Done");
            Ok(())
        }
        Err(e) => handle_error(e, json),
    }
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load()?;

    if cli.json {
        config.output.json = true;
    }
    if let Some(sort_by) = cli.sort_by {
        config.output.sort_by = sort_by;
    }
    if let Some(precision) = cli.precision {
        config.output.seconds_precision = precision;
    }
    if let Some(level) = &cli.log_level {
        config.logging.level = level.clone();
    }

    config.validate()?;
    Ok(config)
}

fn handle_error(e: anyhow::Error, json: bool) -> Result<(), anyhow::Error> {
    if json {
        println!("{}", serde_json::json!({ "error": format!("{:#}", e) }));
    } else {
        eprintln!("Error: {:#}", e);
    }
    process::exit(1);
}
