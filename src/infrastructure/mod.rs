// Copyright (c) 2025 moa-crawler contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// MCP-style remote-tool adapter.
pub mod mcp;

/// HTML-scraping adapters, one per origin site.
pub mod scrape;

/// Third-party search API adapter.
pub mod search;

/// Synthetic item generator for demo/test mode.
pub mod simulation;
