// Copyright (c) 2025 moa-crawler contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::CrawledItem;
use async_trait::async_trait;
use thiserror::Error;

/// Typed per-source failure. The orchestrator pattern-matches on this
/// instead of relying on log lines; a failing source contributes zero
/// items and never aborts its siblings.
#[derive(Debug, Error, Clone)]
pub enum SourceError {
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected status: {0}")]
    Status(u16),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("remote tool error: {0}")]
    Remote(String),
}

/// A component that fetches listings from one specific origin and maps
/// them into the common item schema.
///
/// Returning `Ok(vec![])` is a valid outcome (nothing matched, or a
/// disabled-feature condition such as a missing credential); it is not
/// an error.
#[async_trait]
pub trait SourceAdapter: Send + Sync {
    async fn crawl(&self) -> Result<Vec<CrawledItem>, SourceError>;

    /// Source name used for logging and provenance.
    fn name(&self) -> &str;
}
