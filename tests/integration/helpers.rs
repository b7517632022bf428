use async_trait::async_trait;
use std::sync::Arc;

use moa_crawler::application::RegisteredSource;
use moa_crawler::config::{SourceConfig, SourceFamily};
use moa_crawler::domain::models::{CrawledItem, OpportunityType};
use moa_crawler::domain::source::{SourceAdapter, SourceError};

/// Fixture adapter returning a fixed item list.
pub struct StaticAdapter {
    name: String,
    items: Vec<CrawledItem>,
}

#[async_trait]
impl SourceAdapter for StaticAdapter {
    async fn crawl(&self) -> Result<Vec<CrawledItem>, SourceError> {
        Ok(self.items.clone())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Fixture adapter that always fails, for isolation tests.
pub struct FailingAdapter;

#[async_trait]
impl SourceAdapter for FailingAdapter {
    async fn crawl(&self) -> Result<Vec<CrawledItem>, SourceError> {
        Err(SourceError::Network("connection refused".to_string()))
    }

    fn name(&self) -> &str {
        "failing"
    }
}

pub fn config(name: &str, kind: OpportunityType, enabled: bool) -> SourceConfig {
    SourceConfig::new(
        name,
        format!("https://{name}.example.com"),
        kind,
        enabled,
        SourceFamily::Simulation,
    )
}

pub fn item(title: &str, kind: OpportunityType, source: &str) -> CrawledItem {
    CrawledItem::new(
        title,
        "",
        kind,
        "2025-09-01",
        format!("https://{source}.example.com/1"),
        format!("https://{source}.example.com"),
    )
}

pub fn static_source(
    name: &str,
    kind: OpportunityType,
    titles: &[&str],
) -> RegisteredSource {
    let items = titles.iter().map(|t| item(t, kind, name)).collect();
    RegisteredSource {
        config: config(name, kind, true),
        adapter: Arc::new(StaticAdapter {
            name: name.to_string(),
            items,
        }),
    }
}

pub fn disabled_source(
    name: &str,
    kind: OpportunityType,
    titles: &[&str],
) -> RegisteredSource {
    let mut source = static_source(name, kind, titles);
    source.config.enabled = false;
    source
}

pub fn failing_source(name: &str, kind: OpportunityType) -> RegisteredSource {
    RegisteredSource {
        config: config(name, kind, true),
        adapter: Arc::new(FailingAdapter),
    }
}
