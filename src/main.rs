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

use moa_crawler::application::factory::build_sources;
use moa_crawler::application::CrawlerEngine;
use moa_crawler::config::{default_sources, Settings};
use moa_crawler::domain::models::OpportunityType;
use moa_crawler::utils::telemetry;
use tracing::info;

/// Thin driver: crawls one category (or all) and prints the batch
/// result as JSON. Scheduling and persistence live outside this crate.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init_telemetry();
    info!("Starting moa-crawler...");

    let settings = Settings::new()?;
    let sources = build_sources(&default_sources(), &settings);
    let engine = CrawlerEngine::new(sources);

    let mode = std::env::args().nth(1).unwrap_or_else(|| "all".to_string());
    let result = match OpportunityType::from_str(&mode) {
        Some(kind) => engine.crawl_by_type(kind).await,
        None => engine.crawl_all().await,
    };

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
