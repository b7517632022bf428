// Copyright (c) 2025 moa-crawler contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{Duration, Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

static ISO_DATE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(\d{4})-(\d{2})-(\d{2})\b").unwrap());

// 25.3.1 / 2025.03.01, optionally with a trailing dot as some boards print it
static DOTTED_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{4}|\d{2})\.\s*(\d{1,2})\.\s*(\d{1,2})").unwrap());

static RELATIVE_AGO: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)\s*(?:일\s*전|days?\s+ago)").unwrap());

static KOREAN_LONG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{4})년\s*(\d{1,2})월\s*(\d{1,2})일").unwrap());

/// Normalizes free-form date text into canonical `YYYY-MM-DD`.
///
/// Handles dot-delimited dates with 2- or 4-digit years, relative
/// phrases ("3일 전", "어제", "2 days ago") resolved against the current
/// date, and common long-form strings. Returns an empty string for
/// anything unrecognized; callers decide whether to substitute a
/// sentinel.
pub fn normalize_date(text: &str) -> String {
    normalize_date_on(text, Local::now().date_naive())
}

/// Same as [`normalize_date`] but resolved against an explicit `today`,
/// so relative phrases are deterministic under test.
pub fn normalize_date_on(text: &str, today: NaiveDate) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    if let Some(caps) = ISO_DATE.captures(trimmed) {
        if let Some(date) = ymd(&caps[1], &caps[2], &caps[3]) {
            return format_date(date);
        }
    }

    if let Some(caps) = DOTTED_DATE.captures(trimmed) {
        let year_text = &caps[1];
        let mut year: i32 = match year_text.parse() {
            Ok(y) => y,
            Err(_) => return String::new(),
        };
        if year_text.len() == 2 {
            year += 2000;
        }
        if let Some(date) = ymd_num(year, &caps[2], &caps[3]) {
            return format_date(date);
        }
    }

    if trimmed.contains("어제") || trimmed.to_lowercase().contains("yesterday") {
        return format_date(today - Duration::days(1));
    }

    if let Some(caps) = RELATIVE_AGO.captures(trimmed) {
        if let Ok(days) = caps[1].parse::<i64>() {
            return format_date(today - Duration::days(days));
        }
    }

    if let Some(caps) = KOREAN_LONG.captures(trimmed) {
        if let Ok(year) = caps[1].parse::<i32>() {
            if let Some(date) = ymd_num(year, &caps[2], &caps[3]) {
                return format_date(date);
            }
        }
    }

    // Long-form strings chrono can parse natively
    for fmt in ["%B %d, %Y", "%b %d, %Y", "%B %d %Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, fmt) {
            return format_date(date);
        }
    }
    if let Ok(stamp) = chrono::DateTime::parse_from_rfc3339(trimmed) {
        return format_date(stamp.date_naive());
    }

    String::new()
}

fn ymd(year: &str, month: &str, day: &str) -> Option<NaiveDate> {
    ymd_num(year.parse().ok()?, month, day)
}

fn ymd_num(year: i32, month: &str, day: &str) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month.parse().ok()?, day.parse().ok()?)
}

fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
