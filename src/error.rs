use std::path::PathBuf;

use ::scraper::error::SelectorErrorKind;

/// All errors that can occur during an odds scrape.
#[derive(thiserror::Error, Debug)]
pub enum OddsError {
    /// HTTP request failed (network, DNS, TLS, timeout, etc.).
    #[error("http request failed for {url}: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    /// Server returned a non-success HTTP status code.
    #[error("unexpected status {status} for {url}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Failed to read the response body as text.
    #[error("failed to read response body from {url}: {source}")]
    ResponseBody {
        url: String,
        source: reqwest::Error,
    },

    /// A page served from a non-HTTP source was not available.
    #[error("page not available: {url}")]
    PageUnavailable { url: String },

    /// A CSS selector string could not be parsed.
    #[error("invalid CSS selector: {0}")]
    Selector(String),

    /// The odds hub page does not have the expected league listing.
    #[error("league directory extraction failed: {context}")]
    DirectoryExtraction { context: &'static str },

    /// An expected HTML element or attribute was not found.
    #[error("expected element not found: {context}")]
    ElementNotFound { context: &'static str },

    /// Neither the moneyline nor the three-way odds table exists on a league page.
    #[error("no moneyline or three-way odds table on page")]
    TableNotFound,

    /// Writing the output file failed.
    #[error("failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Serializing the output records failed.
    #[error("failed to serialize records: {0}")]
    Json(#[from] serde_json::Error),
}

impl OddsError {
    /// Whether the error came from retrieving a page rather than from parsing it.
    pub fn is_retrieval(&self) -> bool {
        matches!(
            self,
            OddsError::Http { .. }
                | OddsError::UnexpectedStatus { .. }
                | OddsError::ResponseBody { .. }
                | OddsError::PageUnavailable { .. }
        )
    }
}

impl<'a> From<SelectorErrorKind<'a>> for OddsError {
    fn from(err: SelectorErrorKind<'a>) -> Self {
        OddsError::Selector(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, OddsError>;
