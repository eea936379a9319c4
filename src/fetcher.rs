use crate::types::FeedSource;
use feed_rs::model::Entry;
use feed_rs::parser;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error, info, warn};
use url::Url;

const USER_AGENT: &str = concat!("vea/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new() -> Self {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .gzip(true)
            .deflate(true)
            .brotli(true)
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .expect("failed to create HTTP client");

        Self { client }
    }

    /// Fetches and parses one feed. Every failure mode is isolated here: an
    /// invalid URL, network error, bad status, or unparseable body yields an
    /// empty entry list so the remaining feeds still run.
    pub async fn fetch(&self, source: &FeedSource) -> Vec<Entry> {
        info!("Fetching feed: {} ({})", source.name, source.url);

        if let Err(e) = Url::parse(&source.url) {
            error!("Feed {} has an invalid URL {}: {}", source.name, source.url, e);
            return Vec::new();
        }

        let response = match self.client.get(&source.url).send().await {
            Ok(response) => response,
            Err(e) => {
                error!("Failed to fetch {}: {}", source.name, e);
                return Vec::new();
            }
        };

        let status = response.status();
        if !status.is_success() {
            error!("Feed {} returned HTTP {}", source.name, status);
            return Vec::new();
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                error!("Failed to read response body from {}: {}", source.name, e);
                return Vec::new();
            }
        };

        debug!("Fetched {} bytes from {}", body.len(), source.name);

        match parser::parse(body.as_bytes()) {
            Ok(feed) => {
                info!("Feed {}: {} entries", source.name, feed.entries.len());
                feed.entries
            }
            Err(e) => {
                warn!("Failed to parse feed {}: {}", source.name, e);
                Vec::new()
            }
        }
    }
}

impl Default for Fetcher {
    fn default() -> Self {
        Self::new()
    }
}
