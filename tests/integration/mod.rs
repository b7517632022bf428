pub mod helpers;

mod mcp_test;
mod orchestrator_test;
mod scrape_test;
mod search_test;
