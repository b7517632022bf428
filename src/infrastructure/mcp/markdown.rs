//! Tolerant extractor for the semi-structured text convention some
//! remote tools answer with: `### Title` headings followed by
//! `- **Key**: value` lines. Every field is pulled with an independent
//! pattern match so one malformed line never loses the record.

use once_cell::sync::Lazy;
use regex::Regex;

/// Placeholder when a record names no organizer.
pub const UNKNOWN_ORGANIZER: &str = "주최 미상";

/// Default venue when a record names no place.
pub const DEFAULT_PLACE: &str = "Online";

static FIELD_ID: Lazy<Regex> = Lazy::new(|| field_regex("ID|아이디"));
static FIELD_SCHEDULE: Lazy<Regex> = Lazy::new(|| field_regex("일정|Schedule|기간"));
static FIELD_KIND: Lazy<Regex> = Lazy::new(|| field_regex("유형|Type|분류"));
static FIELD_PLACE: Lazy<Regex> = Lazy::new(|| field_regex("장소|Place|Location"));
static FIELD_ORGANIZER: Lazy<Regex> = Lazy::new(|| field_regex("주최|Organizer|주관"));
static FIELD_CONTENT: Lazy<Regex> = Lazy::new(|| field_regex("내용|Content|설명"));

fn field_regex(labels: &str) -> Regex {
    Regex::new(&format!(r"(?m)^\s*-\s*\*\*(?:{labels})\*\*\s*[:：]\s*(.+)$")).unwrap()
}

/// One record pulled out of a tool's text payload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToolRecord {
    pub title: String,
    pub id: Option<String>,
    pub schedule: Option<String>,
    pub kind: Option<String>,
    pub place: Option<String>,
    pub organizer: Option<String>,
    pub content: Option<String>,
}

/// Splits on `### ` heading markers and extracts each known field
/// independently. Blocks without a usable title are dropped; missing
/// fields stay `None` so the mapper can substitute documented defaults.
pub fn extract_records(text: &str) -> Vec<ToolRecord> {
    text.split("### ")
        .skip(1)
        .filter_map(parse_block)
        .collect()
}

fn parse_block(block: &str) -> Option<ToolRecord> {
    let title = block.lines().next()?.trim().trim_matches('#').trim();
    if title.is_empty() {
        return None;
    }

    Some(ToolRecord {
        title: title.to_string(),
        id: capture(&FIELD_ID, block),
        schedule: capture(&FIELD_SCHEDULE, block),
        kind: capture(&FIELD_KIND, block),
        place: capture(&FIELD_PLACE, block),
        organizer: capture(&FIELD_ORGANIZER, block),
        content: capture(&FIELD_CONTENT, block),
    })
}

fn capture(regex: &Regex, block: &str) -> Option<String> {
    regex
        .captures(block)
        .map(|caps| caps[1].trim().to_string())
        .filter(|s| !s.is_empty())
}
