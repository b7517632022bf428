use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use moa_crawler::config::{SourceConfig, SourceFamily};
use moa_crawler::domain::models::{OpportunityType, DATE_SEARCH_HIT};
use moa_crawler::domain::source::{SourceAdapter, SourceError};
use moa_crawler::infrastructure::search::TavilyAdapter;

fn adapter(server: &MockServer, api_key: Option<&str>) -> TavilyAdapter {
    let config = SourceConfig::new(
        "tavily-search",
        "https://www.tavily.com",
        OpportunityType::Contest,
        true,
        SourceFamily::Search,
    );
    TavilyAdapter::new(config, api_key.map(str::to_string), "해커톤", 5)
        .with_endpoint(&format!("{}/search", server.uri()))
}

#[tokio::test]
async fn test_missing_credential_skips_without_network_call() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": [] })))
        .expect(0)
        .mount(&server)
        .await;

    let items = adapter(&server, None).crawl().await.unwrap();
    assert!(items.is_empty());

    // MockServer verifies the zero-call expectation on drop
}

#[tokio::test]
async fn test_search_hits_are_mapped_into_items() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/search"))
        .and(body_partial_json(json!({
            "api_key": "tvly-test",
            "search_depth": "basic",
            "max_results": 5
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [
                {
                    "title": "<b>AI 해커톤</b> 참가팀 모집",
                    "url": "https://www.wanted.co.kr/events/hack2025",
                    "content": "전국 대학생 대상 해커톤입니다."
                },
                {
                    "title": "백엔드 개발자 채용",
                    "url": "https://careers.example.com/backend",
                    "content": "정규직 모집중"
                },
                {
                    "title": "",
                    "url": "https://example.com/empty",
                    "content": "제목 없는 결과"
                }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let items = adapter(&server, Some("tvly-test")).crawl().await.unwrap();

    // the titleless hit is dropped
    assert_eq!(items.len(), 2);

    assert_eq!(items[0].title, "AI 해커톤 참가팀 모집");
    assert_eq!(items[0].kind, OpportunityType::Contest);
    assert_eq!(items[0].date, DATE_SEARCH_HIT);
    assert_eq!(items[0].company.as_deref(), Some("wanted.co.kr"));
    assert!(items[0].image.is_some());

    assert_eq!(items[1].kind, OpportunityType::Job);
    assert_eq!(items[1].company.as_deref(), Some("careers.example.com"));
}

#[tokio::test]
async fn test_search_api_error_status_is_typed() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let err = adapter(&server, Some("tvly-test")).crawl().await.unwrap_err();
    assert!(matches!(err, SourceError::Status(429)));
}
