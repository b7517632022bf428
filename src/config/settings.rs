// Copyright 2025 moa-crawler contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Engine configuration.
///
/// Loaded from optional `config/*` files plus `MOA__`-prefixed
/// environment variables; everything has a default so the engine runs
/// with no configuration at all (the search adapter simply no-ops
/// without a credential).
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Remote tool-invocation service
    pub mcp: McpSettings,
    /// Third-party search API
    pub search: SearchSettings,
    /// Crawl behavior shared by the scrape adapters
    pub crawl: CrawlSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct McpSettings {
    /// tools/call endpoint of the remote tool host
    pub endpoint: String,
    /// Landing URL used when a record carries no usable identifier
    pub landing_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchSettings {
    /// Tavily API credential. Absent means the search adapter is a
    /// deliberate no-op, not a failure.
    pub tavily_api_key: Option<String>,
    /// Upper bound on results requested per search call
    pub max_results: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CrawlSettings {
    /// Keyword biasing heuristic extraction and remote queries
    pub keyword: String,
    /// Hard cap on items kept per source
    pub max_items_per_source: usize,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Config::builder()
            .set_default("mcp.endpoint", "http://localhost:3001/mcp")?
            .set_default("mcp.landing_url", "https://opportunity.moa.dev")?
            .set_default("search.max_results", 5)?
            .set_default("crawl.keyword", "해커톤")?
            .set_default("crawl.max_items_per_source", 20)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("MOA").separator("__"));

        builder.build()?.try_deserialize()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mcp: McpSettings {
                endpoint: "http://localhost:3001/mcp".to_string(),
                landing_url: "https://opportunity.moa.dev".to_string(),
            },
            search: SearchSettings {
                tavily_api_key: None,
                max_results: 5,
            },
            crawl: CrawlSettings {
                keyword: "해커톤".to_string(),
                max_items_per_source: 20,
            },
        }
    }
}
