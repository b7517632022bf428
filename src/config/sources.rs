// Copyright (c) 2025 moa-crawler contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::OpportunityType;

/// Scraped origin sites, one adapter implementation each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrapeSite {
    Wevity,
    Onoffmix,
    Saramin,
}

/// Origin family of a source, deciding which adapter serves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFamily {
    Scrape(ScrapeSite),
    RemoteTool,
    Search,
    Simulation,
}

/// One registry entry. Static configuration: the orchestrator reads it
/// and never mutates it for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct SourceConfig {
    pub name: String,
    pub url: String,
    pub kind: OpportunityType,
    pub enabled: bool,
    pub family: SourceFamily,
}

impl SourceConfig {
    pub fn new(
        name: impl Into<String>,
        url: impl Into<String>,
        kind: OpportunityType,
        enabled: bool,
        family: SourceFamily,
    ) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            kind,
            enabled,
            family,
        }
    }
}

/// The production source set. Callers inject this (or a test fixture)
/// into the engine; nothing reads it as a global.
pub fn default_sources() -> Vec<SourceConfig> {
    vec![
        SourceConfig::new(
            "wevity",
            "https://www.wevity.com/?c=find&s=1&gub=1&cidx=20",
            OpportunityType::Contest,
            true,
            SourceFamily::Scrape(ScrapeSite::Wevity),
        ),
        SourceConfig::new(
            "onoffmix",
            "https://www.onoffmix.com/event/main",
            OpportunityType::Event,
            true,
            SourceFamily::Scrape(ScrapeSite::Onoffmix),
        ),
        SourceConfig::new(
            "saramin",
            "https://www.saramin.co.kr/zf_user/jobs/list/job-category?cat_kewd=84",
            OpportunityType::Job,
            true,
            SourceFamily::Scrape(ScrapeSite::Saramin),
        ),
        SourceConfig::new(
            "mcp-opportunity",
            "https://opportunity.moa.dev",
            OpportunityType::Contest,
            true,
            SourceFamily::RemoteTool,
        ),
        SourceConfig::new(
            "tavily-search",
            "https://www.tavily.com",
            OpportunityType::Contest,
            true,
            SourceFamily::Search,
        ),
        // Demo/test mode stand-ins, one per category; flipped on when
        // live crawling is undesired.
        SourceConfig::new(
            "simulated-jobs",
            "https://opportunity.moa.dev/simulated",
            OpportunityType::Job,
            false,
            SourceFamily::Simulation,
        ),
        SourceConfig::new(
            "simulated-contests",
            "https://opportunity.moa.dev/simulated",
            OpportunityType::Contest,
            false,
            SourceFamily::Simulation,
        ),
        SourceConfig::new(
            "simulated-events",
            "https://opportunity.moa.dev/simulated",
            OpportunityType::Event,
            false,
            SourceFamily::Simulation,
        ),
    ]
}
