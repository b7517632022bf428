use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use moa_crawler::config::{ScrapeSite, SourceConfig, SourceFamily};
use moa_crawler::domain::models::{OpportunityType, DATE_ONGOING};
use moa_crawler::domain::source::{SourceAdapter, SourceError};
use moa_crawler::infrastructure::scrape::{OnoffmixAdapter, WevityAdapter};

fn wevity(server: &MockServer) -> WevityAdapter {
    let config = SourceConfig::new(
        "wevity",
        format!("{}/board", server.uri()),
        OpportunityType::Contest,
        true,
        SourceFamily::Scrape(ScrapeSite::Wevity),
    );
    WevityAdapter::new(config, "해커톤", 20).unwrap()
}

fn onoffmix(server: &MockServer) -> OnoffmixAdapter {
    let config = SourceConfig::new(
        "onoffmix",
        format!("{}/event/main", server.uri()),
        OpportunityType::Event,
        true,
        SourceFamily::Scrape(ScrapeSite::Onoffmix),
    );
    OnoffmixAdapter::new(config, "해커톤", 15).unwrap()
}

#[tokio::test]
async fn test_wevity_crawl_sends_keyword_and_parses_listing() {
    let server = MockServer::start().await;

    let body = r#"
        <html><body>
          <ul class="list">
            <li>
              <div class="tit"><a href="/view/101">제5회 데이터 해커톤</a></div>
              <div class="organ">과학기술정보통신부</div>
              <div class="day">~ 2025.09.30</div>
            </li>
            <li>
              <div class="tit"><a href="/view/102">브랜드 네이밍 공모전</a></div>
              <div class="day">상시 접수</div>
            </li>
          </ul>
        </body></html>
    "#;

    Mock::given(method("GET"))
        .and(path("/board"))
        .and(query_param("sw", "해커톤"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(1)
        .mount(&server)
        .await;

    let items = wevity(&server).crawl().await.unwrap();

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].title, "제5회 데이터 해커톤");
    assert_eq!(items[0].date, "2025-09-30");
    assert_eq!(items[0].link, format!("{}/view/101", server.uri()));
    assert_eq!(items[1].date, DATE_ONGOING);
}

#[tokio::test]
async fn test_onoffmix_crawl_falls_back_to_heuristic_anchors() {
    let server = MockServer::start().await;

    // none of the known card layouts, just loose anchors
    let body = r#"
        <html><body>
          <div class="q7"><a href="/event/777">사내 기술 세미나 참가 신청 안내</a></div>
          <div class="q7"><a href="/login">로그인</a></div>
        </body></html>
    "#;

    Mock::given(method("GET"))
        .and(path("/event/main"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&server)
        .await;

    let items = onoffmix(&server).crawl().await.unwrap();

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].title, "사내 기술 세미나 참가 신청 안내");
    assert_eq!(items[0].kind, OpportunityType::Event);
    assert_eq!(items[0].link, format!("{}/event/777", server.uri()));
}

#[tokio::test]
async fn test_blocked_listing_page_is_a_typed_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/board"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let err = wevity(&server).crawl().await.unwrap_err();
    assert!(matches!(err, SourceError::Status(403)));
}

#[tokio::test]
async fn test_empty_listing_page_yields_empty_list() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/event/main"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string("<html><body></body></html>"),
        )
        .mount(&server)
        .await;

    let items = onoffmix(&server).crawl().await.unwrap();
    assert!(items.is_empty());
}
