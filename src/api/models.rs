use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Deserializer, Serialize};

/// Inbound body of `POST /crawl`. Forwarded to the crawl service as-is.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CrawlRequest {
    pub urls: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedResult {
    pub page_content: String,
    pub metadata: BTreeMap<String, String>,
}

// What the crawl service sends back. Missing or null fields decode to their
// empty value; failed crawls come back with `"markdown": null`.

#[derive(Debug, Deserialize)]
pub struct CrawlResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub results: Vec<UpstreamCrawlResult>,
}

#[derive(Debug, Deserialize)]
pub struct UpstreamCrawlResult {
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub markdown: UpstreamMarkdown,
    /// Null values are kept as `None` and dropped during normalization.
    #[serde(default)]
    pub metadata: Option<HashMap<String, Option<String>>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpstreamMarkdown {
    #[serde(default, deserialize_with = "null_as_default")]
    pub raw_markdown: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
