use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::debug;

use crate::config::SourceConfig;
use crate::domain::models::{CrawledItem, OpportunityType, DATE_ONGOING};
use crate::domain::services::dates::normalize_date;
use crate::domain::services::relevance::RelevanceScorer;
use crate::domain::source::{SourceAdapter, SourceError};
use crate::infrastructure::mcp::markdown::{
    extract_records, ToolRecord, DEFAULT_PLACE, UNKNOWN_ORGANIZER,
};

const JSONRPC_VERSION: &str = "2.0";
const TOOLS_CALL: &str = "tools/call";

/// Logical categories the tool host exposes. Each maps to a named
/// remote tool and a category-specific argument key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolCategory {
    Opportunity,
    Job,
    Trend,
    Recipe,
    Tool,
}

impl ToolCategory {
    pub fn tool_name(&self) -> &'static str {
        match self {
            ToolCategory::Opportunity => "search_opportunities",
            ToolCategory::Job => "search_jobs",
            ToolCategory::Trend => "get_trends",
            ToolCategory::Recipe => "recommend_recipe",
            ToolCategory::Tool => "recommend_tool",
        }
    }

    pub fn argument_key(&self) -> &'static str {
        match self {
            ToolCategory::Opportunity | ToolCategory::Job | ToolCategory::Trend => "keyword",
            ToolCategory::Recipe => "style",
            ToolCategory::Tool => "purpose",
        }
    }

    /// Category serving a given crawl type. Jobs have a dedicated tool;
    /// contests and events share the opportunity search.
    pub fn for_kind(kind: OpportunityType) -> Self {
        match kind {
            OpportunityType::Job => ToolCategory::Job,
            OpportunityType::Contest | OpportunityType::Event => ToolCategory::Opportunity,
        }
    }
}

#[derive(Debug, Serialize)]
struct ToolCallRequest<'a> {
    jsonrpc: &'static str,
    id: u64,
    method: &'static str,
    params: ToolCallParams<'a>,
}

#[derive(Debug, Serialize)]
struct ToolCallParams<'a> {
    name: &'a str,
    arguments: Value,
}

#[derive(Debug, Deserialize)]
struct ToolCallResponse {
    result: Option<ToolCallResult>,
    error: Option<RpcError>,
}

#[derive(Debug, Deserialize)]
struct ToolCallResult {
    #[serde(default)]
    content: Vec<ContentBlock>,
    #[serde(default, rename = "isError")]
    is_error: bool,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RpcError {
    code: i64,
    message: String,
}

/// What a tool's text payload turned out to be, decided once at the
/// boundary: already-structured data (including JSON that arrived
/// double-encoded as a string), or free text for the markdown
/// extractor.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolPayload {
    Structured(Value),
    Text(String),
}

pub fn decode_payload(raw: &str) -> ToolPayload {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::String(inner)) => match serde_json::from_str::<Value>(&inner) {
            Ok(value @ (Value::Object(_) | Value::Array(_))) => ToolPayload::Structured(value),
            _ => ToolPayload::Text(inner),
        },
        Ok(value @ (Value::Object(_) | Value::Array(_))) => ToolPayload::Structured(value),
        _ => ToolPayload::Text(raw.to_string()),
    }
}

/// Adapter calling one named tool on the remote tool host and mapping
/// its polymorphic payload into the common item schema.
pub struct McpToolAdapter {
    client: reqwest::Client,
    config: SourceConfig,
    category: ToolCategory,
    endpoint: String,
    landing_url: String,
    query: String,
}

impl McpToolAdapter {
    pub fn new(
        config: SourceConfig,
        category: ToolCategory,
        endpoint: &str,
        landing_url: &str,
        query: &str,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
            category,
            endpoint: endpoint.to_string(),
            landing_url: landing_url.trim_end_matches('/').to_string(),
            query: query.to_string(),
        }
    }

    async fn call_tool(&self) -> Result<Option<String>, SourceError> {
        let request = ToolCallRequest {
            jsonrpc: JSONRPC_VERSION,
            id: rand::random::<u32>() as u64,
            method: TOOLS_CALL,
            params: ToolCallParams {
                name: self.category.tool_name(),
                arguments: json!({ self.category.argument_key(): self.query }),
            },
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

        let body: ToolCallResponse = response
            .json()
            .await
            .map_err(|e| SourceError::Parse(e.to_string()))?;

        if let Some(error) = body.error {
            return Err(SourceError::Remote(format!(
                "{} (code {})",
                error.message, error.code
            )));
        }

        let result = body
            .result
            .ok_or_else(|| SourceError::Parse("response carries neither result nor error".into()))?;
        if result.is_error {
            let detail = result
                .content
                .iter()
                .find_map(|c| c.text.clone())
                .unwrap_or_else(|| "tool reported an error".to_string());
            return Err(SourceError::Remote(detail));
        }

        Ok(result
            .content
            .into_iter()
            .find(|c| c.kind == "text")
            .and_then(|c| c.text))
    }

    fn records_from_value(value: Value) -> Vec<ToolRecord> {
        let entries = match value {
            Value::Array(entries) => entries,
            Value::Object(mut map) => match map.remove("items").or_else(|| map.remove("results")) {
                Some(Value::Array(entries)) => entries,
                // a single record object
                _ => vec![Value::Object(map)],
            },
            _ => return Vec::new(),
        };

        entries
            .into_iter()
            .filter_map(|entry| {
                let obj = entry.as_object()?;
                let title = string_field(obj, &["title", "name", "제목"])?;
                Some(ToolRecord {
                    title,
                    id: string_field(obj, &["id", "ID"]),
                    schedule: string_field(obj, &["schedule", "date", "일정"]),
                    kind: string_field(obj, &["type", "category", "유형"]),
                    place: string_field(obj, &["place", "location", "장소"]),
                    organizer: string_field(obj, &["organizer", "host", "주최"]),
                    content: string_field(obj, &["content", "description", "내용"]),
                })
            })
            .collect()
    }

    fn item_from_record(&self, record: ToolRecord) -> CrawledItem {
        let kind = record
            .kind
            .as_deref()
            .and_then(kind_from_label)
            .unwrap_or(self.config.kind);

        let date = match record.schedule.as_deref().map(normalize_date) {
            Some(normalized) if !normalized.is_empty() => normalized,
            // no usable schedule: treat the opportunity as rolling
            _ => DATE_ONGOING.to_string(),
        };

        let link = match &record.id {
            Some(id) => format!("{}/detail/{}", self.landing_url, id),
            None => self.landing_url.clone(),
        };

        let description = record.content.unwrap_or_default();
        let tags = RelevanceScorer::matched_tags(&record.title, &description);

        let mut item = CrawledItem::new(
            record.title,
            description,
            kind,
            date,
            link,
            self.config.url.clone(),
        );
        item.location = Some(record.place.unwrap_or_else(|| DEFAULT_PLACE.to_string()));
        item.sponsor = Some(
            record
                .organizer
                .unwrap_or_else(|| UNKNOWN_ORGANIZER.to_string()),
        );
        if !tags.is_empty() {
            item.category_tags = Some(tags);
        }
        item
    }
}

fn string_field(obj: &serde_json::Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| {
        obj.get(*key).and_then(|v| match v {
            Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
    })
}

fn kind_from_label(label: &str) -> Option<OpportunityType> {
    let lower = label.to_lowercase();
    if lower.contains("채용") || lower.contains("job") {
        Some(OpportunityType::Job)
    } else if lower.contains("행사") || lower.contains("세미나") || lower.contains("event") {
        Some(OpportunityType::Event)
    } else if lower.contains("공모") || lower.contains("해커톤") || lower.contains("contest") {
        Some(OpportunityType::Contest)
    } else {
        None
    }
}

#[async_trait]
impl SourceAdapter for McpToolAdapter {
    async fn crawl(&self) -> Result<Vec<CrawledItem>, SourceError> {
        let Some(text) = self.call_tool().await? else {
            debug!(source = %self.config.name, "tool returned no text block");
            return Ok(vec![]);
        };

        let records = match decode_payload(&text) {
            ToolPayload::Structured(value) => Self::records_from_value(value),
            ToolPayload::Text(raw) => extract_records(&raw),
        };

        Ok(records
            .into_iter()
            .map(|record| self.item_from_record(record))
            .collect())
    }

    fn name(&self) -> &str {
        &self.config.name
    }
}
