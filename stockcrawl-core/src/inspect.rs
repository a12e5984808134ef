//! Response body sniffing.
//!
//! The endpoint can answer HTTP 200 with an HTML error page for an unknown
//! symbol or date. The crawl still writes such a body verbatim; this module
//! only classifies it so the caller can warn about it.

/// Rough classification of a response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    /// Header row starts with `Date` and is comma-separated.
    Csv,
    /// Starts with `<`.
    Html,
    Empty,
    Unknown,
}

impl BodyKind {
    /// Whether the body is something other than the expected CSV table.
    pub fn is_suspect(self) -> bool {
        !matches!(self, BodyKind::Csv)
    }
}

pub fn inspect_body(body: &[u8]) -> BodyKind {
    let text = String::from_utf8_lossy(body);
    let trimmed = text.trim_start_matches('\u{feff}').trim_start();
    if trimmed.is_empty() {
        return BodyKind::Empty;
    }

    // <!DOCTYPE html>, <html>, <?xml ...
    if trimmed.starts_with('<') {
        return BodyKind::Html;
    }

    let first_line = trimmed.lines().next().unwrap_or_default();
    if first_line.starts_with("Date") && first_line.contains(',') {
        return BodyKind::Csv;
    }

    BodyKind::Unknown
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_header() {
        let body = b"Date,Open,High,Low,Close,Volume,Adj Close\n2016-09-21,1,1,1,1,1,1\n";
        assert_eq!(inspect_body(body), BodyKind::Csv);
        assert!(!BodyKind::Csv.is_suspect());
    }

    #[test]
    fn html_error_page() {
        let body = b"<!DOCTYPE html>\n<html><body>Sorry, the page you requested was not found.</body></html>";
        assert_eq!(inspect_body(body), BodyKind::Html);
        assert!(BodyKind::Html.is_suspect());
    }

    #[test]
    fn leading_whitespace_and_bom() {
        assert_eq!(inspect_body("\u{feff}  <html>".as_bytes()), BodyKind::Html);
        assert_eq!(inspect_body(b"\r\nDate,Open\n"), BodyKind::Csv);
    }

    #[test]
    fn empty_and_whitespace() {
        assert_eq!(inspect_body(b""), BodyKind::Empty);
        assert_eq!(inspect_body(b" \n\t"), BodyKind::Empty);
    }

    #[test]
    fn other_text_is_unknown() {
        assert_eq!(inspect_body(b"{\"error\":\"not found\"}"), BodyKind::Unknown);
        assert_eq!(inspect_body(b"Date\n"), BodyKind::Unknown);
    }
}
