use crate::types::{FeedSource, Result, VeaError};
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::Level;

/// Run configuration, loaded once at startup and threaded explicitly through
/// the aggregation pipeline.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub keywords: Vec<String>,
    /// Feeds keep the document order of the JSON object: aggregation and
    /// dedup attribution both depend on it.
    #[serde(deserialize_with = "feeds_in_document_order")]
    pub feeds: Vec<FeedSource>,
    pub output_directory: PathBuf,
    #[serde(default = "default_log_level", deserialize_with = "severity_name")]
    pub log_level: Level,
}

impl Config {
    /// Loads and parses the configuration file. Any failure here is fatal to
    /// the process, so the error carries the offending path.
    pub fn load(path: &Path) -> Result<Config> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            VeaError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;

        let config: Config = serde_json::from_str(&raw).map_err(|e| {
            VeaError::Config(format!("failed to parse {}: {}", path.display(), e))
        })?;

        Ok(config)
    }
}

fn default_log_level() -> Level {
    Level::INFO
}

fn severity_name<'de, D>(deserializer: D) -> std::result::Result<Level, D::Error>
where
    D: Deserializer<'de>,
{
    let name = String::deserialize(deserializer)?;
    name.parse()
        .map_err(|_| serde::de::Error::custom(format!("unknown log level: {}", name)))
}

/// Deserializes the `feeds` JSON object into a Vec, preserving the order the
/// entries appear in the document (a HashMap would scramble it).
fn feeds_in_document_order<'de, D>(
    deserializer: D,
) -> std::result::Result<Vec<FeedSource>, D::Error>
where
    D: Deserializer<'de>,
{
    struct FeedMapVisitor;

    impl<'de> Visitor<'de> for FeedMapVisitor {
        type Value = Vec<FeedSource>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a map of feed name to feed URL")
        }

        fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut feeds = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((name, url)) = map.next_entry::<String, String>()? {
                feeds.push(FeedSource { name, url });
            }
            Ok(feeds)
        }
    }

    deserializer.deserialize_map(FeedMapVisitor)
}
