pub mod aggregator;
pub mod config;
pub mod exporter;
pub mod fetcher;
pub mod filter;
pub mod normalizer;
pub mod types;

pub use aggregator::Aggregator;
pub use config::Config;
pub use fetcher::Fetcher;
pub use filter::KeywordFilter;
pub use types::{FeedSource, MatchedEntry, Result, VeaError};
