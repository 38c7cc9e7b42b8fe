//! Retrieval of the allocation feed.
//!
//! The feed is a newline-delimited table of `(address-or-CIDR, ASN)` pairs,
//! served over HTTP by default or read from a local file. Retrieval failures
//! are fatal: a truncated feed would silently produce an incomplete
//! blacklist, so the run fails visibly instead.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

/// Default allocation feed: APNIC's combined raw ASN table.
pub const DEFAULT_FEED_URL: &str = "https://thyme.apnic.net/.combined/data-raw-table";

/// Errors that can occur while opening the allocation feed
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("failed to fetch allocation feed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("failed to open allocation feed file: {0}")]
    Io(#[from] std::io::Error),
}

/// Where the allocation table comes from.
#[derive(Debug, Clone)]
pub enum FeedSource {
    Url(String),
    File(PathBuf),
}

impl FeedSource {
    /// Interpret a CLI argument: anything with an HTTP scheme is fetched,
    /// everything else is treated as a local file path.
    pub fn from_arg(arg: &str) -> Self {
        if arg.starts_with("http://") || arg.starts_with("https://") {
            Self::Url(arg.to_string())
        } else {
            Self::File(PathBuf::from(arg))
        }
    }

    /// Open the feed as a buffered line-oriented reader.
    pub fn open(&self) -> Result<Box<dyn BufRead>, SourceError> {
        match self {
            Self::Url(url) => {
                let response = reqwest::blocking::get(url)?.error_for_status()?;
                Ok(Box::new(BufReader::new(response)))
            }
            Self::File(path) => {
                let file = File::open(path)?;
                Ok(Box::new(BufReader::new(file)))
            }
        }
    }
}

impl fmt::Display for FeedSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url(url) => write!(f, "{}", url),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}
