use std::{
    io::{self, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use price_store::{
    config::LoaderConfig,
    db::create::create_schema,
    populate::{PopulateOptions, populate},
    symbols::SymbolSource,
};
use quote_ingestor::{
    models::{date_range::DateRange, period::Period},
    providers::yahoo_csv::YahooCsvProvider,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version, about = "Load daily price history into a SQLite database")]
struct Cli {
    /// TOML config file (db_path, endpoint, date_format, period, timeout_secs)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Database file; overrides config and PRICE_DB_PATH
    #[arg(long, global = true, value_name = "PATH")]
    db: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Fetch and save prices for a set of symbols
    Populate(PopulateArgs),
    /// Create an empty price database (fails if the file exists)
    CreateDb,
}

#[derive(Args)]
struct PopulateArgs {
    #[command(flatten)]
    symbols: SymbolArgs,

    /// First date to request (default: one year ago)
    #[arg(long)]
    start: Option<String>,

    /// Last date to request (default: yesterday)
    #[arg(long)]
    end: Option<String>,

    /// strftime format of --start / --end
    #[arg(long, value_name = "FMT")]
    date_format: Option<String>,

    /// Sampling period: d (daily), w (weekly), m (monthly)
    #[arg(long)]
    period: Option<Period>,

    /// Quote endpoint URL
    #[arg(long, value_name = "URL")]
    endpoint: Option<String>,
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct SymbolArgs {
    /// Comma-separated list of symbols (e.g. "AAPL,MSFT")
    #[arg(long, value_delimiter = ',')]
    symbols: Vec<String>,

    /// Delimited file whose first column holds the symbols
    #[arg(long, value_name = "FILE")]
    symbol_file: Option<PathBuf>,
}

impl SymbolArgs {
    fn into_source(self) -> SymbolSource {
        match self.symbol_file {
            Some(path) => SymbolSource::File(path),
            None => SymbolSource::explicit(self.symbols),
        }
    }
}

fn load_config(cli: &Cli) -> Result<LoaderConfig> {
    let mut cfg = match &cli.config {
        Some(path) => LoaderConfig::load(path)?,
        None => LoaderConfig::default(),
    };
    cfg.apply_env()?;
    if let Some(db) = &cli.db {
        cfg.db_path = db.clone();
    }
    Ok(cfg)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut cfg = load_config(&cli)?;

    match cli.cmd {
        Cmd::CreateDb => {
            create_schema(&cfg.db_path)?;
            println!("Created {}", cfg.db_path.display());
        }
        Cmd::Populate(args) => {
            if let Some(endpoint) = args.endpoint {
                cfg.endpoint = endpoint;
            }
            if let Some(format) = args.date_format {
                cfg.date_format = format;
            }
            if let Some(period) = args.period {
                cfg.period = period;
            }

            // 1) Resolve inputs up front
            let range = DateRange::resolve_local(
                args.start.as_deref(),
                args.end.as_deref(),
                &cfg.date_format,
            )?;
            let symbols = args.symbols.into_source().resolve()?;

            // 2) Provider
            let provider = YahooCsvProvider::new(&cfg.endpoint, cfg.timeout())
                .context("failed to set up quote provider")?;

            // 3) Load
            let options = PopulateOptions {
                range,
                period: cfg.period,
                db_path: cfg.db_path.clone(),
            };
            println!("loading data ...");
            let mut stdout = io::stdout();
            let summary = populate(&provider, &symbols, &options, |symbol, _report| {
                let _ = write!(stdout, "{symbol} ");
                let _ = stdout.flush();
            })
            .await?;
            println!();

            println!(
                "Saved {} records for {} out of {} symbols",
                summary.records_saved, summary.symbols_saved, summary.symbols_attempted
            );
        }
    }

    Ok(())
}
