// Copyright (c) 2025 moa-crawler contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod item;

pub use item::{CrawlResult, CrawledItem, OpportunityType, DATE_ONGOING, DATE_SEARCH_HIT};
