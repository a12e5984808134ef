//! StockCrawl CLI: fetch daily price tables and save them as `<SYMBOL>.csv`.
//!
//! With no arguments, fetches AAL, DAL, UAL, LCC, JBLU and LUV for
//! 2016-09-21 into the current directory. A TOML config file and flags can
//! override the symbol list, date, output directory, endpoint and timeout;
//! flags win over the file.
//!
//! Logging goes through `env_logger` (default level `warn`; set `RUST_LOG=info`
//! to see one line per written file).

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;
use stockcrawl_core::{
    crawl, planned_requests, CrawlConfig, HttpTransport, LogProgress, PlannedRequest, QuoteDate,
};

#[derive(Parser, Debug)]
#[command(
    name = "stockcrawl",
    version,
    about = "Fetch historical daily price tables into <SYMBOL>.csv files"
)]
struct Cli {
    /// TOML config file. Flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Symbols to fetch, in order (e.g. --symbols AAL DAL or --symbols AAL,DAL).
    #[arg(long, num_args = 1.., value_delimiter = ',')]
    symbols: Option<Vec<String>>,

    /// Calendar date (YYYY-MM-DD). Converted to the endpoint's zero-based month.
    #[arg(long, conflicts_with_all = ["month", "day", "year"])]
    date: Option<String>,

    /// Zero-based month (0 = January).
    #[arg(long)]
    month: Option<u32>,

    /// Day of month.
    #[arg(long)]
    day: Option<u32>,

    /// Year.
    #[arg(long)]
    year: Option<i32>,

    /// Directory that receives the CSV files. Defaults to the current directory.
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Endpoint the query string is appended to.
    #[arg(long)]
    base_url: Option<String>,

    /// Request timeout in seconds; 0 disables the timeout. Defaults to 30.
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Print the requests that would be made and exit without fetching.
    #[arg(long, default_value_t = false)]
    dry_run: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    log::debug!("command line: {cli:?}");

    let config = build_config(&cli)?;

    if cli.dry_run {
        for request in dry_run_plan(&config)? {
            println!("{} -> {}", request.url, request.path.display());
        }
        return Ok(());
    }

    let transport = HttpTransport::from_config(&config)?;
    let summary = crawl(&config, &transport, &LogProgress)?;

    let suspect = summary.suspect_symbols();
    if !suspect.is_empty() {
        log::warn!(
            "{} of {} file(s) do not look like CSV price tables: {}",
            suspect.len(),
            summary.written.len(),
            suspect.join(", ")
        );
    }

    Ok(())
}

/// Requests a crawl of `config` would make. `crawl` validates on its own, so
/// only this path checks the config up front.
fn dry_run_plan(config: &CrawlConfig) -> Result<Vec<PlannedRequest>> {
    config.validate().context("invalid configuration")?;
    Ok(planned_requests(config))
}

/// Defaults, then the config file, then individual flags.
fn build_config(cli: &Cli) -> Result<CrawlConfig> {
    let mut config = match &cli.config {
        Some(path) => CrawlConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => CrawlConfig::default(),
    };

    if let Some(symbols) = &cli.symbols {
        config.symbols = symbols.clone();
    }

    if let Some(date) = &cli.date {
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .with_context(|| format!("--date '{date}' is not YYYY-MM-DD"))?;
        config.date = QuoteDate::from_calendar(date);
    }
    if let Some(month) = cli.month {
        config.date.month = month;
    }
    if let Some(day) = cli.day {
        config.date.day = day;
    }
    if let Some(year) = cli.year {
        config.date.year = year;
    }

    if let Some(dir) = &cli.output_dir {
        config.output_dir = dir.clone();
    }
    if let Some(url) = &cli.base_url {
        config.base_url = url.clone();
    }
    if let Some(secs) = cli.timeout_secs {
        config.timeout_secs = Some(secs);
    }

    Ok(config)
}
