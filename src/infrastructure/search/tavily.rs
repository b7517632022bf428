use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::SourceConfig;
use crate::domain::models::{CrawledItem, OpportunityType, DATE_SEARCH_HIT};
use crate::domain::source::{SourceAdapter, SourceError};
use crate::utils::text::{strip_tags, truncate_chars};
use crate::utils::urls::host_label;

pub const TAVILY_ENDPOINT: &str = "https://api.tavily.com/search";

/// OR-terms appended to the raw keyword so a general-purpose search API
/// returns opportunity listings instead of news chatter.
const QUERY_CONTEXT: &str = "채용 OR 공모전 OR 해커톤 OR 지원사업";

const MAX_DESCRIPTION_CHARS: usize = 150;

const JOB_VOCAB: &[&str] = &["채용", "모집중", "정규직", "입사", "recruit", "hiring"];
const CONTEST_VOCAB: &[&str] = &["공모전", "해커톤", "경진대회", "contest", "hackathon"];

const JOB_THEMES: &[&str] = &["office", "startup", "developer"];
const CONTEST_THEMES: &[&str] = &["trophy", "competition", "idea"];
const EVENT_THEMES: &[&str] = &["conference", "meetup", "seminar"];

#[derive(Debug, Serialize)]
struct TavilyRequest<'a> {
    api_key: &'a str,
    query: String,
    search_depth: &'static str,
    max_results: usize,
    include_images: bool,
}

#[derive(Debug, Deserialize)]
struct TavilyResponse {
    #[serde(default)]
    results: Vec<TavilyHit>,
}

#[derive(Debug, Deserialize)]
struct TavilyHit {
    title: String,
    url: String,
    #[serde(default)]
    content: String,
}

/// Keyword search through the Tavily API. Without a credential the
/// adapter is a deliberate no-op: empty list, no network call, no
/// failure-level log.
pub struct TavilyAdapter {
    client: reqwest::Client,
    config: SourceConfig,
    api_key: Option<String>,
    keyword: String,
    max_results: usize,
    endpoint: String,
}

impl TavilyAdapter {
    pub fn new(
        config: SourceConfig,
        api_key: Option<String>,
        keyword: &str,
        max_results: usize,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
            api_key,
            keyword: keyword.to_string(),
            max_results,
            endpoint: TAVILY_ENDPOINT.to_string(),
        }
    }

    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = endpoint.to_string();
        self
    }

    fn biased_query(&self) -> String {
        format!("{} ({})", self.keyword, QUERY_CONTEXT)
    }

    fn map_hit(&self, hit: TavilyHit) -> Option<CrawledItem> {
        let title = strip_tags(&hit.title);
        if title.is_empty() {
            return None;
        }

        let content = strip_tags(&hit.content);
        let kind = infer_kind(&format!("{} {}", title, content));
        let description = truncate_chars(&content, MAX_DESCRIPTION_CHARS);
        let company = host_label(&hit.url);
        let image = fallback_image(kind, &title);

        let mut item = CrawledItem::new(
            title,
            description,
            kind,
            DATE_SEARCH_HIT,
            hit.url,
            self.config.url.clone(),
        );
        item.company = company;
        item.image = Some(image);
        Some(item)
    }
}

/// Category heuristic over combined title+content text; search hits
/// carry no explicit category.
pub(crate) fn infer_kind(text: &str) -> OpportunityType {
    let lower = text.to_lowercase();
    if JOB_VOCAB.iter().any(|w| lower.contains(w)) {
        OpportunityType::Job
    } else if CONTEST_VOCAB.iter().any(|w| lower.contains(w)) {
        OpportunityType::Contest
    } else {
        OpportunityType::Contest
    }
}

/// Deterministic themed placeholder image for results that ship none.
pub(crate) fn fallback_image(kind: OpportunityType, title: &str) -> String {
    let themes = match kind {
        OpportunityType::Job => JOB_THEMES,
        OpportunityType::Contest => CONTEST_THEMES,
        OpportunityType::Event => EVENT_THEMES,
    };
    let bucket = title.bytes().fold(0usize, |acc, b| acc + b as usize) % themes.len();
    format!("https://source.unsplash.com/featured/800x600?{}", themes[bucket])
}

#[async_trait]
impl SourceAdapter for TavilyAdapter {
    async fn crawl(&self) -> Result<Vec<CrawledItem>, SourceError> {
        let Some(api_key) = self.api_key.as_deref() else {
            debug!(source = %self.config.name, "no search credential configured, skipping");
            return Ok(vec![]);
        };

        let request = TavilyRequest {
            api_key,
            query: self.biased_query(),
            search_depth: "basic",
            max_results: self.max_results,
            include_images: true,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status(status.as_u16()));
        }

        let body: TavilyResponse = response
            .json()
            .await
            .map_err(|e| SourceError::Parse(e.to_string()))?;

        Ok(body
            .results
            .into_iter()
            .filter_map(|hit| self.map_hit(hit))
            .collect())
    }

    fn name(&self) -> &str {
        &self.config.name
    }
}
