use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named feed URL from the configuration. Immutable for the run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedSource {
    pub name: String,
    pub url: String,
}

/// One feed entry whose title matched a configured keyword.
///
/// Field order here is the JSON key order of the exported objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchedEntry {
    pub source: String,
    pub title: String,
    pub summary: Option<String>,
    pub link: String,
    pub published: Option<DateTime<Utc>>,
}

/// Errors that can escape a component. Fetch and parse failures never do:
/// they are logged and collapsed to an empty result inside the fetcher.
#[derive(Debug, thiserror::Error)]
pub enum VeaError {
    #[error("config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, VeaError>;
