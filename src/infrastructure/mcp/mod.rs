//! Remote-tool adapter: invokes named tools on an MCP-style tool host
//! over a fixed `tools/call` envelope and copes with its polymorphic
//! text payloads.

pub mod client;
pub mod markdown;

pub use client::{decode_payload, McpToolAdapter, ToolCategory, ToolPayload};
