use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can stop a crawl.
///
/// Listing fetch failures are fatal: if a listing page can't be retrieved the
/// rest of the run is assumed unreachable too. A document that fails to
/// download is not an error at all, see [`crate::DownloadOutcome`].
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("search URL {url:?} is not usable: {reason}")]
    InvalidSearchUrl { url: String, reason: String },

    #[error("base URL {url:?} is not valid: {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("failed to fetch {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("fetching {url} returned HTTP {status}")]
    HttpStatus { url: String, status: StatusCode },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ScrapeError {
    /// True for network failures while retrieving a listing page.
    pub fn is_fatal_fetch(&self) -> bool {
        matches!(self, Self::Transport { .. } | Self::HttpStatus { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_errors_are_fatal_fetches() {
        let err = ScrapeError::HttpStatus {
            url: "https://exam.naer.edu.tw/searchResult.php?page=2".to_string(),
            status: StatusCode::SERVICE_UNAVAILABLE,
        };
        assert!(err.is_fatal_fetch());
        assert!(err.to_string().contains("503"));
    }

    #[test]
    fn config_errors_are_not_fetch_errors() {
        let err = ScrapeError::InvalidSearchUrl {
            url: "https://exam.naer.edu.tw/searchResult.php".to_string(),
            reason: "no page parameter".to_string(),
        };
        assert!(!err.is_fatal_fetch());
    }
}
