use std::collections::BTreeMap;

use crate::api::models::{NormalizedResult, UpstreamCrawlResult};

/// Metadata key that always carries the crawled URL.
pub const SOURCE_KEY: &str = "source";

/// Reshapes upstream results, keeping their order.
pub fn normalize_results(results: Vec<UpstreamCrawlResult>) -> Vec<NormalizedResult> {
    results.into_iter().map(normalize_result).collect()
}

pub fn normalize_result(result: UpstreamCrawlResult) -> NormalizedResult {
    let mut metadata: BTreeMap<String, String> = result
        .metadata
        .unwrap_or_default()
        .into_iter()
        .filter_map(|(key, value)| match value {
            Some(value) if !value.is_empty() => Some((key, value)),
            _ => None,
        })
        .collect();

    // Overwrites anything upstream put under the same key.
    metadata.insert(SOURCE_KEY.to_string(), result.url);

    NormalizedResult {
        page_content: result.markdown.raw_markdown,
        metadata,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::UpstreamMarkdown;
    use std::collections::HashMap;

    fn upstream(url: &str, markdown: &str, metadata: Option<&[(&str, &str)]>) -> UpstreamCrawlResult {
        UpstreamCrawlResult {
            url: url.to_string(),
            markdown: UpstreamMarkdown {
                raw_markdown: markdown.to_string(),
            },
            metadata: metadata.map(|pairs| {
                pairs
                    .iter()
                    .map(|(k, v)| (k.to_string(), Some(v.to_string())))
                    .collect::<HashMap<_, _>>()
            }),
        }
    }

    #[test]
    fn drops_empty_values_and_sets_source() {
        let result = normalize_result(upstream(
            "https://example.com",
            "# Hi",
            Some(&[("title", ""), ("lang", "en")]),
        ));

        assert_eq!(result.page_content, "# Hi");
        assert_eq!(result.metadata.len(), 2);
        assert_eq!(result.metadata["lang"], "en");
        assert_eq!(result.metadata[SOURCE_KEY], "https://example.com");
        assert!(!result.metadata.contains_key("title"));
    }

    #[test]
    fn drops_null_values() {
        let mut result = upstream("https://example.com", "# Hi", Some(&[("title", "Hi")]));
        if let Some(metadata) = result.metadata.as_mut() {
            metadata.insert("description".to_string(), None);
        }

        let result = normalize_result(result);

        assert_eq!(
            result.metadata.into_iter().collect::<Vec<_>>(),
            vec![
                (SOURCE_KEY.to_string(), "https://example.com".to_string()),
                ("title".to_string(), "Hi".to_string()),
            ]
        );
    }

    #[test]
    fn missing_metadata_becomes_source_only() {
        let result = normalize_result(upstream("https://a.test", "", None));

        assert_eq!(result.page_content, "");
        assert_eq!(
            result.metadata.into_iter().collect::<Vec<_>>(),
            vec![(SOURCE_KEY.to_string(), "https://a.test".to_string())]
        );
    }

    #[test]
    fn upstream_source_is_overridden() {
        let result = normalize_result(upstream(
            "https://real.test/page",
            "body",
            Some(&[("source", "https://spoofed.test")]),
        ));

        assert_eq!(result.metadata[SOURCE_KEY], "https://real.test/page");
    }

    #[test]
    fn empty_upstream_source_is_still_replaced() {
        let result = normalize_result(upstream("https://b.test", "x", Some(&[("source", "")])));
        assert_eq!(result.metadata[SOURCE_KEY], "https://b.test");
    }

    #[test]
    fn keeps_upstream_order() {
        let results = normalize_results(vec![
            upstream("https://c.test", "c", None),
            upstream("https://a.test", "a", None),
            upstream("https://b.test", "b", None),
        ]);

        let contents: Vec<_> = results.iter().map(|r| r.page_content.as_str()).collect();
        assert_eq!(contents, ["c", "a", "b"]);
    }

    #[test]
    fn serializes_with_sorted_metadata_keys() {
        let result = normalize_result(upstream(
            "https://example.com",
            "# Hi",
            Some(&[("title", "Home"), ("author", "me")]),
        ));

        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(
            json,
            r##"{"page_content":"# Hi","metadata":{"author":"me","source":"https://example.com","title":"Home"}}"##
        );
    }
}
