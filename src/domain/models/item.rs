// Copyright (c) 2025 moa-crawler contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// Sentinel date for listings with a rolling deadline.
pub const DATE_ONGOING: &str = "상시";

/// Sentinel date for unstructured search hits that carry no deadline.
pub const DATE_SEARCH_HIT: &str = "검색 결과";

/// Category of an opportunity listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpportunityType {
    Job,
    Contest,
    Event,
}

impl OpportunityType {
    /// All categories in the order they are crawled and concatenated.
    pub const ALL: [OpportunityType; 3] = [
        OpportunityType::Job,
        OpportunityType::Contest,
        OpportunityType::Event,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OpportunityType::Job => "job",
            OpportunityType::Contest => "contest",
            OpportunityType::Event => "event",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "job" => Some(Self::Job),
            "contest" => Some(Self::Contest),
            "event" => Some(Self::Event),
            _ => None,
        }
    }
}

impl std::fmt::Display for OpportunityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The common record shape every source adapter must produce.
///
/// A `CrawledItem` is a value object: created fresh per adapter
/// invocation, never mutated afterwards, owned entirely by the caller.
/// `date` is either canonical `YYYY-MM-DD`, one of the sentinel values
/// ([`DATE_ONGOING`], [`DATE_SEARCH_HIT`]) or an explicitly empty
/// string; raw foreign-format date strings never leave an adapter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrawledItem {
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: OpportunityType,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prize: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employment_type: Option<String>,
    pub link: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub source_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_target: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sponsor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_prize: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_prize: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_tags: Option<Vec<String>>,
}

impl CrawledItem {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        kind: OpportunityType,
        date: impl Into<String>,
        link: impl Into<String>,
        source_url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            kind,
            date: date.into(),
            location: None,
            prize: None,
            salary: None,
            company: None,
            employment_type: None,
            link: link.into(),
            image: None,
            source_url: source_url.into(),
            application_target: None,
            sponsor: None,
            total_prize: None,
            first_prize: None,
            start_date: None,
            category_tags: None,
        }
    }
}

/// Outcome of one crawl batch.
///
/// Invariants: `items_found == items.len()`, and `success == false`
/// implies `items` is empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrawlResult {
    pub success: bool,
    pub items_found: usize,
    pub items: Vec<CrawledItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CrawlResult {
    pub fn completed(items: Vec<CrawledItem>) -> Self {
        Self {
            success: true,
            items_found: items.len(),
            items,
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            items_found: 0,
            items: Vec::new(),
            error: Some(error.into()),
        }
    }
}
