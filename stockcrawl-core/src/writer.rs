//! Raw body output.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Create or truncate `path` and write `body` unchanged.
///
/// Returns only after the data is flushed and synced, and the file closed.
pub fn write_body(path: &Path, body: &[u8]) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(body)?;
    file.flush()?;
    file.sync_all()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_bytes_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("AAL.csv");
        let body = b"Date,Open,High,Low,Close,Volume,Adj Close\r\n2016-09-21,1,2,0.5,1.5,100,1.5\n\xff";

        write_body(&path, body).unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), body);
    }

    #[test]
    fn truncates_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("DAL.csv");
        std::fs::write(&path, "a much longer previous body than the new one").unwrap();

        write_body(&path, b"short").unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), b"short");
    }

    #[test]
    fn empty_body_creates_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("LUV.csv");

        write_body(&path, b"").unwrap();

        assert_eq!(std::fs::metadata(&path).unwrap().len(), 0);
    }

    #[test]
    fn missing_directory_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("UAL.csv");

        let err = write_body(&path, b"x").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
