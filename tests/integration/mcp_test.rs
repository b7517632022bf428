use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use moa_crawler::config::{SourceConfig, SourceFamily};
use moa_crawler::domain::models::{OpportunityType, DATE_ONGOING};
use moa_crawler::domain::source::{SourceAdapter, SourceError};
use moa_crawler::infrastructure::mcp::{McpToolAdapter, ToolCategory};

const LANDING: &str = "https://opportunity.moa.dev";

fn adapter(endpoint: &str) -> McpToolAdapter {
    let config = SourceConfig::new(
        "mcp-opportunity",
        LANDING,
        OpportunityType::Contest,
        true,
        SourceFamily::RemoteTool,
    );
    McpToolAdapter::new(config, ToolCategory::Opportunity, endpoint, LANDING, "해커톤")
}

fn text_result(text: &str) -> serde_json::Value {
    json!({
        "jsonrpc": "2.0",
        "id": 1,
        "result": {
            "content": [{ "type": "text", "text": text }]
        }
    })
}

#[tokio::test]
async fn test_markdown_payload_maps_to_items() {
    let server = MockServer::start().await;

    let markdown = "2건의 기회를 찾았습니다.\n\
        ### 글로벌 AI 해커톤\n\
        - **ID**: opp-1041\n\
        - **일정**: 2025.10.01 ~ 2025.10.03\n\
        - **유형**: 해커톤\n\
        - **장소**: 부산 벡스코\n\
        - **주최**: 한국정보산업연합회\n\
        ### 상시 멘토링 프로그램\n\
        - **일정**: 상시 모집\n";

    Mock::given(method("POST"))
        .and(path("/mcp"))
        .and(body_partial_json(json!({
            "jsonrpc": "2.0",
            "method": "tools/call",
            "params": {
                "name": "search_opportunities",
                "arguments": { "keyword": "해커톤" }
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_result(markdown)))
        .expect(1)
        .mount(&server)
        .await;

    let items = adapter(&format!("{}/mcp", server.uri())).crawl().await.unwrap();

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].title, "글로벌 AI 해커톤");
    assert_eq!(items[0].link, format!("{LANDING}/detail/opp-1041"));
    assert_eq!(items[0].date, "2025-10-01");
    assert_eq!(items[0].kind, OpportunityType::Contest);
    assert_eq!(items[0].location.as_deref(), Some("부산 벡스코"));
    assert_eq!(items[0].sponsor.as_deref(), Some("한국정보산업연합회"));

    // no id, no parseable date: landing link and rolling deadline
    assert_eq!(items[1].link, LANDING);
    assert_eq!(items[1].date, DATE_ONGOING);
    assert_eq!(items[1].location.as_deref(), Some("Online"));
    assert_eq!(items[1].sponsor.as_deref(), Some("주최 미상"));
}

#[tokio::test]
async fn test_structured_payload_maps_to_items() {
    let server = MockServer::start().await;

    let payload = json!({
        "items": [
            { "title": "클라우드 해커톤", "id": 77, "date": "2025.09.01", "host": "NIPA" }
        ]
    });

    Mock::given(method("POST"))
        .and(path("/mcp"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(text_result(&payload.to_string())),
        )
        .mount(&server)
        .await;

    let items = adapter(&format!("{}/mcp", server.uri())).crawl().await.unwrap();

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].title, "클라우드 해커톤");
    assert_eq!(items[0].link, format!("{LANDING}/detail/77"));
    assert_eq!(items[0].date, "2025-09-01");
    assert_eq!(items[0].sponsor.as_deref(), Some("NIPA"));
}

#[tokio::test]
async fn test_rpc_error_is_a_remote_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/mcp"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jsonrpc": "2.0",
            "id": 1,
            "error": { "code": -32602, "message": "unknown tool" }
        })))
        .mount(&server)
        .await;

    let err = adapter(&format!("{}/mcp", server.uri())).crawl().await.unwrap_err();
    assert!(matches!(err, SourceError::Remote(_)));
    assert!(err.to_string().contains("unknown tool"));
}

#[tokio::test]
async fn test_tool_level_error_flag_is_a_remote_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/mcp"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jsonrpc": "2.0",
            "id": 1,
            "result": {
                "isError": true,
                "content": [{ "type": "text", "text": "backend unavailable" }]
            }
        })))
        .mount(&server)
        .await;

    let err = adapter(&format!("{}/mcp", server.uri())).crawl().await.unwrap_err();
    assert!(matches!(err, SourceError::Remote(_)));
}

#[tokio::test]
async fn test_http_error_status_is_typed() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/mcp"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = adapter(&format!("{}/mcp", server.uri())).crawl().await.unwrap_err();
    assert!(matches!(err, SourceError::Status(503)));
}

#[tokio::test]
async fn test_missing_text_block_yields_empty_list() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/mcp"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jsonrpc": "2.0",
            "id": 1,
            "result": { "content": [] }
        })))
        .mount(&server)
        .await;

    let items = adapter(&format!("{}/mcp", server.uri())).crawl().await.unwrap();
    assert!(items.is_empty());
}
