//! StockCrawl Core: fetch daily price tables and persist them as `<SYMBOL>.csv`.
//!
//! This crate contains the whole fetch pipeline:
//! - Immutable crawl configuration (symbol list, zero-based quote date, output dir)
//! - Request URL construction for the historical-quotes CSV export
//! - Blocking HTTP transport behind a mockable trait
//! - Strictly sequential fetch → write loop that fails fast on the first error
//! - Body inspection that flags non-CSV responses without altering output

pub mod config;
pub mod crawl;
pub mod endpoint;
pub mod inspect;
pub mod transport;
pub mod writer;

pub use config::{ConfigError, CrawlConfig, QuoteDate};
pub use crawl::{
    crawl, planned_requests, CrawlError, CrawlProgress, CrawlSummary, LogProgress, NoProgress,
    PlannedRequest, WrittenFile,
};
pub use endpoint::{table_url, DEFAULT_BASE_URL};
pub use inspect::{inspect_body, BodyKind};
pub use transport::{FetchError, HttpTransport, Transport};
