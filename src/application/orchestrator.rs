// Copyright (c) 2025 moa-crawler contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use futures::future::join_all;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::config::SourceConfig;
use crate::domain::models::{CrawlResult, CrawledItem, OpportunityType};
use crate::domain::source::SourceAdapter;

/// A registry entry paired with the adapter serving it. Tests inject
/// fixture adapters here; production sets come from
/// [`crate::application::factory::build_sources`].
pub struct RegisteredSource {
    pub config: SourceConfig,
    pub adapter: Arc<dyn SourceAdapter>,
}

/// Fans out over the registered sources and aggregates their output
/// into one batch result. Holds no mutable state; the source list is
/// read-only for the lifetime of the engine.
pub struct CrawlerEngine {
    sources: Vec<RegisteredSource>,
}

impl CrawlerEngine {
    pub fn new(sources: Vec<RegisteredSource>) -> Self {
        Self { sources }
    }

    /// Crawls every enabled source of one category concurrently.
    ///
    /// Each source is an independent unit of work behind an isolation
    /// boundary: a typed adapter error is logged and contributes zero
    /// items, never aborting siblings. Output order follows source
    /// registration order, not completion order. Only an error escaping
    /// the fan-out itself turns the whole batch into a failure result.
    pub async fn crawl_by_type(&self, kind: OpportunityType) -> CrawlResult {
        match self.fan_out(kind).await {
            Ok(items) => CrawlResult::completed(items),
            Err(e) => {
                error!(%kind, error = %e, "crawl batch failed");
                CrawlResult::failed(e.to_string())
            }
        }
    }

    /// Crawls all three categories as independent concurrent units and
    /// concatenates in fixed category order (job, contest, event). A
    /// failed category batch is isolated the same way a failed source
    /// is: logged, zero items.
    pub async fn crawl_all(&self) -> CrawlResult {
        let (jobs, contests, events) = tokio::join!(
            self.crawl_by_type(OpportunityType::Job),
            self.crawl_by_type(OpportunityType::Contest),
            self.crawl_by_type(OpportunityType::Event),
        );

        let mut items = Vec::new();
        for batch in [jobs, contests, events] {
            if batch.success {
                items.extend(batch.items);
            } else {
                warn!(error = ?batch.error, "category batch failed, contributing zero items");
            }
        }

        CrawlResult::completed(items)
    }

    async fn fan_out(&self, kind: OpportunityType) -> anyhow::Result<Vec<CrawledItem>> {
        let selected: Vec<&RegisteredSource> = self
            .sources
            .iter()
            .filter(|s| s.config.kind == kind && s.config.enabled)
            .collect();

        info!(%kind, sources = selected.len(), "fanning out");

        let crawls = selected.into_iter().map(|source| {
            let adapter = Arc::clone(&source.adapter);
            let name = source.config.name.clone();
            async move {
                match adapter.crawl().await {
                    Ok(items) => {
                        info!(source = %name, items = items.len(), "source finished");
                        items
                    }
                    Err(e) => {
                        warn!(source = %name, error = %e, "source failed, contributing zero items");
                        Vec::new()
                    }
                }
            }
        });

        // join_all preserves input order, so concatenation follows
        // registration order
        let per_source: Vec<Vec<CrawledItem>> = join_all(crawls).await;
        Ok(per_source.concat())
    }
}
