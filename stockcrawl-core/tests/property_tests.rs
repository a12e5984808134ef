//! Property tests for request URL construction and config validation.
//!
//! Uses proptest to verify:
//! 1. URL shape: every parameter appears once, in order, verbatim
//! 2. Calendar conversion: the zero-based month is always one less
//! 3. Output paths: one `<SYMBOL>.csv` per symbol inside the output dir

use chrono::NaiveDate;
use proptest::prelude::*;
use std::path::PathBuf;
use stockcrawl_core::{planned_requests, table_url, CrawlConfig, QuoteDate, DEFAULT_BASE_URL};

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_symbol() -> impl Strategy<Value = String> {
    "[A-Z]{1,5}(\\.[A-Z])?"
}

fn arb_quote_date() -> impl Strategy<Value = QuoteDate> {
    (0u32..12, 1u32..=31, 1970i32..2100).prop_map(|(m, d, y)| QuoteDate::new(m, d, y))
}

fn arb_calendar_date() -> impl Strategy<Value = NaiveDate> {
    (0i64..40_000).prop_map(|offset| {
        NaiveDate::from_ymd_opt(1970, 1, 1).unwrap() + chrono::Duration::days(offset)
    })
}

// ── 1. URL shape ─────────────────────────────────────────────────────

proptest! {
    #[test]
    fn url_has_fixed_shape(symbol in arb_symbol(), date in arb_quote_date()) {
        let url = table_url(DEFAULT_BASE_URL, &symbol, &date);
        let expected = format!(
            "http://chart.finance.yahoo.com/table.csv?s={}&d={}&e={}&f={}&g=d&ignore=.csv",
            symbol, date.month, date.day, date.year
        );
        prop_assert_eq!(url, expected);
    }

    #[test]
    fn url_query_parameters_in_order(symbol in arb_symbol(), date in arb_quote_date()) {
        let url = table_url(DEFAULT_BASE_URL, &symbol, &date);
        let query = url.split_once('?').map(|(_, q)| q).unwrap();
        let keys: Vec<&str> = query
            .split('&')
            .map(|pair| pair.split_once('=').map(|(k, _)| k).unwrap())
            .collect();
        prop_assert_eq!(keys, vec!["s", "d", "e", "f", "g", "ignore"]);
    }
}

// ── 2. Calendar conversion ───────────────────────────────────────────

proptest! {
    #[test]
    fn calendar_month_minus_one(date in arb_calendar_date()) {
        use chrono::Datelike;
        let quote = QuoteDate::from_calendar(date);
        prop_assert_eq!(quote.month + 1, date.month());
        prop_assert_eq!(quote.day, date.day());
        prop_assert_eq!(quote.year, date.year());
        prop_assert!(quote.month <= 11);
    }
}

// ── 3. Output paths ──────────────────────────────────────────────────

proptest! {
    #[test]
    fn one_plan_entry_per_symbol(symbols in prop::collection::vec(arb_symbol(), 0..10)) {
        let config = CrawlConfig {
            symbols: symbols.clone(),
            output_dir: PathBuf::from("out"),
            ..CrawlConfig::default()
        };
        prop_assert!(config.validate().is_ok());

        let plan = planned_requests(&config);
        prop_assert_eq!(plan.len(), symbols.len());
        for (entry, symbol) in plan.iter().zip(&symbols) {
            prop_assert_eq!(&entry.symbol, symbol);
            prop_assert_eq!(&entry.path, &PathBuf::from("out").join(format!("{symbol}.csv")));
        }
    }
}
