//! Search-API adapter: keyword-biased web search mapped into the
//! common item schema.

pub mod tavily;

pub use tavily::{TavilyAdapter, TAVILY_ENDPOINT};
