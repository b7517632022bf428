// Copyright (c) 2025 moa-crawler contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;
use tracing::warn;

use crate::application::orchestrator::RegisteredSource;
use crate::config::{ScrapeSite, Settings, SourceConfig, SourceFamily};
use crate::domain::source::SourceAdapter;
use crate::infrastructure::mcp::{McpToolAdapter, ToolCategory};
use crate::infrastructure::scrape::{OnoffmixAdapter, SaraminAdapter, WevityAdapter};
use crate::infrastructure::search::TavilyAdapter;
use crate::infrastructure::simulation::SimulationAdapter;

/// Pairs every registry entry with the adapter its family calls for.
/// A source whose adapter cannot be constructed (HTTP client build
/// failure) is skipped with a warning rather than failing the set.
pub fn build_sources(configs: &[SourceConfig], settings: &Settings) -> Vec<RegisteredSource> {
    let keyword = settings.crawl.keyword.as_str();
    let cap = settings.crawl.max_items_per_source;

    configs
        .iter()
        .filter_map(|config| {
            let adapter: Arc<dyn SourceAdapter> = match config.family {
                SourceFamily::Scrape(ScrapeSite::Wevity) => {
                    match WevityAdapter::new(config.clone(), keyword, cap) {
                        Ok(adapter) => Arc::new(adapter),
                        Err(e) => return skip(config, e),
                    }
                }
                SourceFamily::Scrape(ScrapeSite::Onoffmix) => {
                    match OnoffmixAdapter::new(config.clone(), keyword, cap) {
                        Ok(adapter) => Arc::new(adapter),
                        Err(e) => return skip(config, e),
                    }
                }
                SourceFamily::Scrape(ScrapeSite::Saramin) => {
                    match SaraminAdapter::new(config.clone(), keyword, cap) {
                        Ok(adapter) => Arc::new(adapter),
                        Err(e) => return skip(config, e),
                    }
                }
                SourceFamily::RemoteTool => Arc::new(McpToolAdapter::new(
                    config.clone(),
                    ToolCategory::for_kind(config.kind),
                    &settings.mcp.endpoint,
                    &settings.mcp.landing_url,
                    keyword,
                )),
                SourceFamily::Search => Arc::new(TavilyAdapter::new(
                    config.clone(),
                    settings.search.tavily_api_key.clone(),
                    keyword,
                    settings.search.max_results,
                )),
                SourceFamily::Simulation => Arc::new(SimulationAdapter::new(config.clone())),
            };

            Some(RegisteredSource {
                config: config.clone(),
                adapter,
            })
        })
        .collect()
}

fn skip(
    config: &SourceConfig,
    error: crate::domain::source::SourceError,
) -> Option<RegisteredSource> {
    warn!(source = %config.name, error = %error, "skipping source, adapter construction failed");
    None
}
