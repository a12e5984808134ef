//! Crawl orchestrator: fetch each symbol in order and write its body to disk.
//!
//! The loop is strictly sequential: symbol N+1 is not requested until symbol
//! N's file has been written and closed. The first fetch or write error stops
//! the batch. Files written before the failure stay on disk; symbols after it
//! are never requested and their files are not touched.

use crate::config::{ConfigError, CrawlConfig};
use crate::endpoint::table_url;
use crate::inspect::{inspect_body, BodyKind};
use crate::transport::{FetchError, Transport};
use crate::writer::write_body;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("invalid crawl config")]
    Config(#[from] ConfigError),

    #[error("fetch {symbol} from {url}")]
    Fetch {
        symbol: String,
        url: String,
        source: FetchError,
    },

    #[error("write {symbol} to {}", .path.display())]
    Write {
        symbol: String,
        path: PathBuf,
        source: io::Error,
    },
}

impl CrawlError {
    /// Symbol whose fetch or write failed, if any.
    pub fn symbol(&self) -> Option<&str> {
        match self {
            CrawlError::Config(_) => None,
            CrawlError::Fetch { symbol, .. } | CrawlError::Write { symbol, .. } => Some(symbol),
        }
    }
}

/// One file produced by the crawl.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    pub symbol: String,
    pub path: PathBuf,
    pub bytes: usize,
    pub kind: BodyKind,
}

/// Outcome of a crawl in which every symbol succeeded.
#[derive(Debug, Default)]
pub struct CrawlSummary {
    /// In fetch order.
    pub written: Vec<WrittenFile>,
}

impl CrawlSummary {
    /// Symbols whose body was written but does not look like a CSV table.
    pub fn suspect_symbols(&self) -> Vec<&str> {
        self.written
            .iter()
            .filter(|f| f.kind.is_suspect())
            .map(|f| f.symbol.as_str())
            .collect()
    }

    pub fn total_bytes(&self) -> usize {
        self.written.iter().map(|f| f.bytes).sum()
    }
}

/// A request the crawl would perform, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedRequest {
    pub symbol: String,
    pub url: String,
    pub path: PathBuf,
}

/// Progress callback for the crawl.
pub trait CrawlProgress {
    /// Called before the GET for a symbol.
    fn on_start(&self, symbol: &str, index: usize, total: usize);

    /// Called after a symbol's fetch and write, successful or not.
    fn on_complete(
        &self,
        symbol: &str,
        index: usize,
        total: usize,
        result: &Result<WrittenFile, CrawlError>,
    );

    /// Called once every symbol has been written.
    fn on_batch_complete(&self, summary: &CrawlSummary);
}

/// Reports progress through the `log` facade.
pub struct LogProgress;

impl CrawlProgress for LogProgress {
    fn on_start(&self, symbol: &str, index: usize, total: usize) {
        log::debug!("[{}/{}] fetching {symbol}", index + 1, total);
    }

    fn on_complete(
        &self,
        symbol: &str,
        index: usize,
        total: usize,
        result: &Result<WrittenFile, CrawlError>,
    ) {
        match result {
            Ok(file) => log::info!(
                "[{}/{}] {symbol}: wrote {} bytes to {}",
                index + 1,
                total,
                file.bytes,
                file.path.display()
            ),
            // The error itself is returned to the caller.
            Err(e) => log::debug!("[{}/{}] {symbol}: {e}", index + 1, total),
        }
    }

    fn on_batch_complete(&self, summary: &CrawlSummary) {
        log::info!(
            "crawl complete: {} file(s), {} bytes",
            summary.written.len(),
            summary.total_bytes()
        );
    }
}

/// Discards all progress events.
pub struct NoProgress;

impl CrawlProgress for NoProgress {
    fn on_start(&self, _symbol: &str, _index: usize, _total: usize) {}

    fn on_complete(
        &self,
        _symbol: &str,
        _index: usize,
        _total: usize,
        _result: &Result<WrittenFile, CrawlError>,
    ) {
    }

    fn on_batch_complete(&self, _summary: &CrawlSummary) {}
}

/// Fetch every configured symbol in order and write `<SYMBOL>.csv` for each.
///
/// Returns on the first error without touching the remaining symbols.
pub fn crawl(
    config: &CrawlConfig,
    transport: &dyn Transport,
    progress: &dyn CrawlProgress,
) -> Result<CrawlSummary, CrawlError> {
    config.validate()?;

    let total = config.symbols.len();
    let mut summary = CrawlSummary {
        written: Vec::with_capacity(total),
    };

    for (i, symbol) in config.symbols.iter().enumerate() {
        progress.on_start(symbol, i, total);

        let result = crawl_single(config, transport, symbol);
        progress.on_complete(symbol, i, total, &result);

        summary.written.push(result?);
    }

    progress.on_batch_complete(&summary);
    Ok(summary)
}

/// Fetch → inspect → write for one symbol.
fn crawl_single(
    config: &CrawlConfig,
    transport: &dyn Transport,
    symbol: &str,
) -> Result<WrittenFile, CrawlError> {
    let url = table_url(&config.base_url, symbol, &config.date);
    log::debug!("GET {url}");

    let body = transport.get(&url).map_err(|source| CrawlError::Fetch {
        symbol: symbol.to_string(),
        url: url.clone(),
        source,
    })?;

    let kind = inspect_body(&body);
    if kind.is_suspect() {
        log::warn!("{symbol}: response is not a CSV price table ({kind:?}), writing it unchanged");
    }

    let path = config.output_path(symbol);
    write_body(&path, &body).map_err(|source| CrawlError::Write {
        symbol: symbol.to_string(),
        path: path.clone(),
        source,
    })?;

    Ok(WrittenFile {
        symbol: symbol.to_string(),
        path,
        bytes: body.len(),
        kind,
    })
}

/// The symbol / URL / output path triples a crawl of `config` would perform.
pub fn planned_requests(config: &CrawlConfig) -> Vec<PlannedRequest> {
    config
        .symbols
        .iter()
        .map(|symbol| PlannedRequest {
            symbol: symbol.clone(),
            url: table_url(&config.base_url, symbol, &config.date),
            path: config.output_path(symbol),
        })
        .collect()
}
