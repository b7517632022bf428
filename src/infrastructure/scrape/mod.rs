//! HTML-scraping adapters, one module per origin site, plus the shared
//! selector-cascade machinery. All three adapters follow the same flow:
//! GET with browser-like headers, try named selector strategies in
//! order, fall back to heuristic anchor scanning, then normalize, tag,
//! sort and cap.

pub mod onoffmix;
pub mod saramin;
pub mod strategy;
pub mod wevity;

pub use onoffmix::OnoffmixAdapter;
pub use saramin::SaraminAdapter;
pub use wevity::WevityAdapter;

use crate::domain::models::CrawledItem;
use crate::domain::services::relevance::RelevanceScorer;
use crate::domain::source::SourceError;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE};

const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Builds the HTTP client all scrape adapters share: a realistic
/// browser identity and Korean-first accept-language hints reduce
/// trivial bot-blocking on the listing pages.
pub(crate) fn listing_client() -> Result<reqwest::Client, SourceError> {
    let mut headers = HeaderMap::new();
    headers.insert(
        ACCEPT,
        HeaderValue::from_static(
            "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8",
        ),
    );
    headers.insert(
        ACCEPT_LANGUAGE,
        HeaderValue::from_static("ko-KR,ko;q=0.9,en;q=0.8"),
    );

    reqwest::Client::builder()
        .user_agent(BROWSER_USER_AGENT)
        .default_headers(headers)
        .build()
        .map_err(|e| SourceError::Network(e.to_string()))
}

/// Fetches a listing page body; a non-success status is a typed
/// per-source failure.
pub(crate) async fn fetch_listing(
    client: &reqwest::Client,
    url: &str,
) -> Result<String, SourceError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| SourceError::Network(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(SourceError::Status(status.as_u16()));
    }

    response
        .text()
        .await
        .map_err(|e| SourceError::Network(e.to_string()))
}

/// Shared tail of every scrape adapter: attach matched keyword tags,
/// order by relevance score (stable, highest first) and apply the
/// per-source item cap.
pub(crate) fn finalize_items(items: Vec<CrawledItem>, cap: usize) -> Vec<CrawledItem> {
    let mut scored: Vec<(u32, CrawledItem)> = items
        .into_iter()
        .map(|mut item| {
            let tags = RelevanceScorer::matched_tags(&item.title, &item.description);
            if !tags.is_empty() {
                item.category_tags = Some(tags);
            }
            let score = RelevanceScorer::score(&item.title, &item.description);
            (score, item)
        })
        .collect();

    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.into_iter().map(|(_, item)| item).take(cap).collect()
}
