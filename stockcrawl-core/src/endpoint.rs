//! Historical-quotes CSV export URL.
//!
//! Query parameters: `s` symbol, `d` zero-based month, `e` day, `f` year,
//! `g=d` daily rows, `ignore=.csv` so the export is served as a CSV file.

use crate::config::QuoteDate;

pub const DEFAULT_BASE_URL: &str = "http://chart.finance.yahoo.com/table.csv";

/// Build the request URL for one symbol.
///
/// The symbol is inserted verbatim, without percent-encoding.
pub fn table_url(base_url: &str, symbol: &str, date: &QuoteDate) -> String {
    format!(
        "{base_url}?s={symbol}&d={month}&e={day}&f={year}&g=d&ignore=.csv",
        month = date.month,
        day = date.day,
        year = date.year,
    )
}
