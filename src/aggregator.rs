use crate::fetcher::Fetcher;
use crate::filter::KeywordFilter;
use crate::normalizer;
use crate::types::{FeedSource, MatchedEntry};
use feed_rs::model::Entry;
use std::collections::HashSet;
use tracing::{debug, info};

/// Drives fetch, normalize and filter across all configured feeds,
/// deduplicating by link. The first occurrence of a link wins; result order
/// is config feed order, then each feed's native entry order.
pub struct Aggregator {
    fetcher: Fetcher,
    filter: KeywordFilter,
}

impl Aggregator {
    pub fn new(fetcher: Fetcher, filter: KeywordFilter) -> Self {
        Self { fetcher, filter }
    }

    /// One full sequential pass over the configured feeds. A feed that fails
    /// to fetch or parse contributes zero entries and the pass continues.
    pub async fn run(&self, feeds: &[FeedSource]) -> Vec<MatchedEntry> {
        let mut results = Vec::new();
        let mut seen_links = HashSet::new();

        for source in feeds {
            let entries = self.fetcher.fetch(source).await;
            self.collect(&source.name, entries, &mut seen_links, &mut results);
        }

        info!(
            "Aggregated {} matched entries from {} feeds",
            results.len(),
            feeds.len()
        );
        results
    }

    /// Normalizes, filters and appends one feed's entries. Split out from
    /// `run` so everything below the network is testable with parsed entries.
    pub fn collect(
        &self,
        source_name: &str,
        entries: Vec<Entry>,
        seen_links: &mut HashSet<String>,
        results: &mut Vec<MatchedEntry>,
    ) {
        let mut matched = 0usize;

        for entry in entries {
            let normalized = match normalizer::normalize(source_name, entry) {
                Some(normalized) => normalized,
                None => continue,
            };

            if !self.filter.matches(&normalized.title) {
                continue;
            }

            if !seen_links.insert(normalized.link.clone()) {
                debug!("Dropping duplicate link: {}", normalized.link);
                continue;
            }

            matched += 1;
            results.push(normalized);
        }

        debug!("Feed {}: {} entries matched", source_name, matched);
    }
}
