//! Grounding metadata returned by search-enabled models, and the citation
//! list derived from it.

use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_SOURCE_TITLE;

/// Grounding metadata attached to a model response.
///
/// Produced by the provider; opaque to the rest of the system apart from
/// deduplication and display.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroundingMetadata {
    /// Retrieved chunks, in the order the provider reported them.
    #[serde(default)]
    pub grounding_chunks: Vec<GroundingChunk>,
    /// Search suggestion widget, kept for completeness.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_entry_point: Option<SearchEntryPoint>,
}

impl GroundingMetadata {
    /// Creates metadata from a list of chunks.
    pub fn new(grounding_chunks: Vec<GroundingChunk>) -> Self {
        Self {
            grounding_chunks,
            search_entry_point: None,
        }
    }

    /// Returns the deduplicated, display-ready sources.
    pub fn sources(&self) -> Vec<SourceLink> {
        unique_sources(&self.grounding_chunks)
    }
}

/// A single grounding chunk. Only web references are displayed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroundingChunk {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web: Option<WebReference>,
}

impl GroundingChunk {
    /// Creates a chunk pointing at a web page.
    pub fn web(uri: impl Into<String>, title: Option<&str>) -> Self {
        Self {
            web: Some(WebReference {
                uri: uri.into(),
                title: title.map(str::to_string),
            }),
        }
    }
}

/// A web page the model's answer was grounded on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WebReference {
    #[serde(default)]
    pub uri: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchEntryPoint {
    #[serde(default)]
    pub rendered_content: String,
}

/// A deduplicated citation ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceLink {
    pub uri: String,
    pub title: String,
}

/// Deduplicates grounding chunks into source links.
///
/// The first chunk for a given URI wins and fixes its position; URIs are
/// compared as exact strings. Chunks without a web reference are dropped.
pub fn unique_sources(chunks: &[GroundingChunk]) -> Vec<SourceLink> {
    let mut sources: Vec<SourceLink> = Vec::new();

    for web in chunks.iter().filter_map(|c| c.web.as_ref()) {
        if sources.iter().any(|s| s.uri == web.uri) {
            continue;
        }

        let title = web
            .title
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or(DEFAULT_SOURCE_TITLE);

        sources.push(SourceLink {
            uri: web.uri.clone(),
            title: title.to_string(),
        });
    }

    sources
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uris(sources: &[SourceLink]) -> Vec<&str> {
        sources.iter().map(|s| s.uri.as_str()).collect()
    }

    #[test]
    fn test_later_duplicates_removed_in_order() {
        let chunks = vec![
            GroundingChunk::web("https://x.org", Some("X")),
            GroundingChunk::web("https://y.org", Some("Y")),
            GroundingChunk::web("https://x.org", Some("X again")),
            GroundingChunk::web("https://z.org", Some("Z")),
        ];

        let sources = unique_sources(&chunks);
        assert_eq!(uris(&sources), vec!["https://x.org", "https://y.org", "https://z.org"]);
    }

    #[test]
    fn test_chunks_without_web_dropped() {
        let chunks = vec![
            GroundingChunk::default(),
            GroundingChunk::web("https://a.org", Some("A")),
            GroundingChunk::default(),
        ];

        let sources = unique_sources(&chunks);
        assert_eq!(uris(&sources), vec!["https://a.org"]);
    }

    #[test]
    fn test_first_title_wins() {
        let chunks = vec![
            GroundingChunk::web("https://a.org", Some("First")),
            GroundingChunk::web("https://a.org", Some("Second")),
        ];

        let sources = unique_sources(&chunks);
        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].title, "First");
    }

    #[test]
    fn test_missing_title_defaults() {
        let chunks = vec![
            GroundingChunk::web("https://a.org", None),
            GroundingChunk::web("https://b.org", Some("")),
        ];

        let sources = unique_sources(&chunks);
        assert!(sources.iter().all(|s| s.title == DEFAULT_SOURCE_TITLE));
    }

    #[test]
    fn test_uri_not_normalized() {
        let chunks = vec![
            GroundingChunk::web("https://a.org/page", Some("A")),
            GroundingChunk::web("https://a.org/page/", Some("A slash")),
            GroundingChunk::web("HTTPS://A.ORG/page", Some("A upper")),
        ];

        assert_eq!(unique_sources(&chunks).len(), 3);
    }

    #[test]
    fn test_deserialize_api_shape() {
        let json = r#"{
            "groundingChunks": [
                {"web": {"uri": "https://pubmed.ncbi.nlm.nih.gov/1", "title": "pubmed.ncbi.nlm.nih.gov"}},
                {"retrievedContext": {"uri": "gs://bucket/doc"}}
            ],
            "searchEntryPoint": {"renderedContent": "<div></div>"},
            "webSearchQueries": ["velocity based training"]
        }"#;

        let metadata: GroundingMetadata = serde_json::from_str(json).unwrap();
        assert_eq!(metadata.grounding_chunks.len(), 2);
        assert!(metadata.grounding_chunks[1].web.is_none());
        assert_eq!(metadata.sources().len(), 1);
        assert_eq!(
            metadata.search_entry_point.map(|e| e.rendered_content),
            Some("<div></div>".to_string())
        );
    }
}
