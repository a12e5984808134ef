//! Crawl configuration: symbol list, quote date, and output location.
//!
//! The configuration is an immutable value handed to [`crate::crawl::crawl`].
//! Its defaults reproduce the fixed airline list and date, so a run with no
//! config file and no flags fetches exactly those six tables into the
//! current directory. A TOML file may override any subset of the keys:
//!
//! ```toml
//! symbols = ["AAL", "DAL"]
//! output_dir = "data"
//! timeout_secs = 0        # 0 = no timeout
//!
//! [date]
//! month = 0               # zero-based: 0 = January
//! day = 3
//! year = 2017
//! ```

use crate::endpoint::DEFAULT_BASE_URL;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Symbols fetched when nothing else is configured, in fetch order.
pub const DEFAULT_SYMBOLS: [&str; 6] = ["AAL", "DAL", "UAL", "LCC", "JBLU", "LUV"];

/// Request timeout applied when the config does not say otherwise.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read config file {}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("month {0} out of range (zero-based, expected 0..=11)")]
    InvalidMonth(u32),

    #[error("day {0} out of range (expected 1..=31)")]
    InvalidDay(u32),

    #[error("invalid symbol '{0}': must be non-empty and usable as a file name")]
    InvalidSymbol(String),
}

/// A single calendar date in the endpoint's convention.
///
/// `month` is zero-based (0 = January, 8 = September); `day` and `year` are
/// plain calendar values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuoteDate {
    pub month: u32,
    pub day: u32,
    pub year: i32,
}

impl QuoteDate {
    pub fn new(month: u32, day: u32, year: i32) -> Self {
        Self { month, day, year }
    }

    /// Convert a calendar date (January = 1) to the zero-based form.
    pub fn from_calendar(date: NaiveDate) -> Self {
        Self {
            month: date.month0(),
            day: date.day(),
            year: date.year(),
        }
    }
}

impl Default for QuoteDate {
    /// 21 September 2016.
    fn default() -> Self {
        Self::new(8, 21, 2016)
    }
}

/// Everything one crawl needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrawlConfig {
    /// Ticker symbols, fetched in this order. Duplicates are kept.
    pub symbols: Vec<String>,

    /// Date sent with every request.
    pub date: QuoteDate,

    /// Directory that receives `<SYMBOL>.csv`.
    pub output_dir: PathBuf,

    /// Endpoint the query string is appended to.
    pub base_url: String,

    /// Whole-request timeout in seconds. `None` or `Some(0)` means unbounded.
    pub timeout_secs: Option<u64>,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            symbols: DEFAULT_SYMBOLS.iter().map(|s| s.to_string()).collect(),
            date: QuoteDate::default(),
            output_dir: PathBuf::from("."),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: Some(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl CrawlConfig {
    /// Load a config from a TOML file. Missing keys take their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parse a config from a TOML string. Missing keys take their defaults.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Check ranges and that every symbol maps to a plain file name.
    ///
    /// An empty symbol list is accepted; the crawl then writes nothing.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.date.month > 11 {
            return Err(ConfigError::InvalidMonth(self.date.month));
        }
        if !(1..=31).contains(&self.date.day) {
            return Err(ConfigError::InvalidDay(self.date.day));
        }
        for symbol in &self.symbols {
            if !is_file_safe(symbol) {
                return Err(ConfigError::InvalidSymbol(symbol.clone()));
            }
        }
        Ok(())
    }

    /// Request timeout, or `None` for no limit.
    pub fn timeout(&self) -> Option<Duration> {
        match self.timeout_secs {
            None | Some(0) => None,
            Some(secs) => Some(Duration::from_secs(secs)),
        }
    }

    /// Output file for a symbol: `{output_dir}/{SYMBOL}.csv`.
    pub fn output_path(&self, symbol: &str) -> PathBuf {
        self.output_dir.join(format!("{symbol}.csv"))
    }
}

fn is_file_safe(symbol: &str) -> bool {
    !symbol.is_empty()
        && symbol != "."
        && symbol != ".."
        && !symbol.contains(['/', '\\', '\0'])
}
