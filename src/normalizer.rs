use crate::types::MatchedEntry;
use chrono::Utc;
use feed_rs::model::Entry;
use tracing::debug;

/// Summaries are truncated to this many characters for export.
pub const SUMMARY_MAX_CHARS: usize = 200;

/// Extracts and sanitizes the fields of one raw feed entry.
///
/// Entries without a title or link are unusable and skipped. A missing
/// summary or publish date never drops the entry, only the field.
pub fn normalize(source: &str, entry: Entry) -> Option<MatchedEntry> {
    let title = match entry.title {
        Some(text) => text.content,
        None => {
            debug!("Skipping entry without title (id: {})", entry.id);
            return None;
        }
    };

    let link = match entry.links.first() {
        Some(link) => link.href.clone(),
        None => {
            debug!("Skipping entry without link: {}", title);
            return None;
        }
    };

    // Summaries arrive in two shapes: a plain text value, or a content
    // block with the text nested inside its body.
    let summary = entry
        .summary
        .map(|s| s.content)
        .or_else(|| entry.content.and_then(|c| c.body))
        .map(|text| truncate_chars(&text, SUMMARY_MAX_CHARS));

    let published = entry.published.map(|dt| dt.with_timezone(&Utc));
    if published.is_none() {
        debug!("Entry has no usable publish date: {}", title);
    }

    Some(MatchedEntry {
        source: source.to_string(),
        title,
        summary,
        link,
        published,
    })
}

/// Char-boundary-safe prefix of at most `max_chars` characters.
fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};

    fn entries_from(xml: &str) -> Vec<Entry> {
        feed_rs::parser::parse(xml.as_bytes()).unwrap().entries
    }

    fn rss_feed(items: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
            <rss version="2.0"><channel><title>Test</title>{}</channel></rss>"#,
            items
        )
    }

    #[test]
    fn extracts_all_fields() {
        let xml = rss_feed(
            r#"<item>
                <title>Ransomware hits bank</title>
                <link>https://example.com/a</link>
                <description>A short summary.</description>
                <pubDate>Tue, 05 Aug 2025 09:10:11 GMT</pubDate>
            </item>"#,
        );

        let mut entries = entries_from(&xml);
        let entry = normalize("Feed", entries.remove(0)).unwrap();

        assert_eq!(entry.source, "Feed");
        assert_eq!(entry.title, "Ransomware hits bank");
        assert_eq!(entry.link, "https://example.com/a");
        assert_eq!(entry.summary.as_deref(), Some("A short summary."));
        let expected: DateTime<Utc> = "2025-08-05T09:10:11Z".parse().unwrap();
        assert_eq!(entry.published, Some(expected));
    }

    #[test]
    fn skips_entry_without_link() {
        let xml = rss_feed(r#"<item><title>No link here</title></item>"#);
        let mut entries = entries_from(&xml);
        assert!(normalize("Feed", entries.remove(0)).is_none());
    }

    #[test]
    fn skips_entry_without_title() {
        let xml = rss_feed(r#"<item><link>https://example.com/untitled</link></item>"#);
        let mut entries = entries_from(&xml);
        assert!(normalize("Feed", entries.remove(0)).is_none());
    }

    #[test]
    fn missing_summary_and_date_stay_absent() {
        let xml = rss_feed(
            r#"<item><title>Bare entry</title><link>https://example.com/b</link></item>"#,
        );
        let mut entries = entries_from(&xml);
        let entry = normalize("Feed", entries.remove(0)).unwrap();
        assert_eq!(entry.summary, None);
        assert_eq!(entry.published, None);
    }

    #[test]
    fn long_summary_truncated_to_200_chars() {
        let long = "x".repeat(250);
        let xml = rss_feed(&format!(
            r#"<item>
                <title>Long</title>
                <link>https://example.com/c</link>
                <description>{}</description>
            </item>"#,
            long
        ));

        let mut entries = entries_from(&xml);
        let entry = normalize("Feed", entries.remove(0)).unwrap();
        assert_eq!(entry.summary.unwrap().chars().count(), 200);
    }

    #[test]
    fn truncation_respects_multibyte_boundaries() {
        let long = "é".repeat(250);
        let xml = rss_feed(&format!(
            r#"<item>
                <title>Accents</title>
                <link>https://example.com/d</link>
                <description>{}</description>
            </item>"#,
            long
        ));

        let mut entries = entries_from(&xml);
        let entry = normalize("Feed", entries.remove(0)).unwrap();
        let summary = entry.summary.unwrap();
        assert_eq!(summary.chars().count(), 200);
        assert_eq!(summary, "é".repeat(200));
    }

    #[test]
    fn structured_content_body_used_when_summary_absent() {
        let xml = r#"<?xml version="1.0" encoding="utf-8"?>
            <feed xmlns="http://www.w3.org/2005/Atom">
                <title>Atom Test</title>
                <id>urn:feed</id>
                <updated>2025-08-05T00:00:00Z</updated>
                <entry>
                    <title>Structured</title>
                    <id>urn:entry</id>
                    <updated>2025-08-05T00:00:00Z</updated>
                    <link href="https://example.com/e"/>
                    <content type="text">Body text from the content block.</content>
                </entry>
            </feed>"#;

        let mut entries = entries_from(xml);
        let entry = normalize("Feed", entries.remove(0)).unwrap();
        assert_eq!(
            entry.summary.as_deref(),
            Some("Body text from the content block.")
        );
    }

    #[test]
    fn short_summary_left_untouched() {
        assert_eq!(truncate_chars("hello", 200), "hello");
    }
}
