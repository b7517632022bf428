use moa_crawler::application::CrawlerEngine;
use moa_crawler::domain::models::OpportunityType;

use super::helpers::{disabled_source, failing_source, static_source};

#[tokio::test]
async fn test_failing_source_does_not_affect_siblings() {
    let engine = CrawlerEngine::new(vec![
        static_source(
            "contests-a",
            OpportunityType::Contest,
            &["AI 해커톤", "데이터 공모전"],
        ),
        failing_source("contests-broken", OpportunityType::Contest),
        static_source("contests-b", OpportunityType::Contest, &["디자인 공모전"]),
    ]);

    let result = engine.crawl_by_type(OpportunityType::Contest).await;

    assert!(result.success);
    assert!(result.error.is_none());
    assert_eq!(result.items_found, 3);
    assert_eq!(result.items_found, result.items.len());
}

#[tokio::test]
async fn test_items_follow_registration_order() {
    let engine = CrawlerEngine::new(vec![
        static_source("first", OpportunityType::Job, &["첫번째 채용", "두번째 채용"]),
        static_source("second", OpportunityType::Job, &["세번째 채용"]),
    ]);

    let result = engine.crawl_by_type(OpportunityType::Job).await;

    let titles: Vec<&str> = result.items.iter().map(|i| i.title.as_str()).collect();
    assert_eq!(titles, vec!["첫번째 채용", "두번째 채용", "세번째 채용"]);
}

#[tokio::test]
async fn test_disabled_and_other_kind_sources_are_skipped() {
    let engine = CrawlerEngine::new(vec![
        static_source("events", OpportunityType::Event, &["개발자 컨퍼런스"]),
        disabled_source("events-off", OpportunityType::Event, &["꺼진 소스 행사"]),
        static_source("jobs", OpportunityType::Job, &["백엔드 채용"]),
    ]);

    let result = engine.crawl_by_type(OpportunityType::Event).await;

    assert_eq!(result.items_found, 1);
    assert_eq!(result.items[0].title, "개발자 컨퍼런스");
}

#[tokio::test]
async fn test_empty_category_succeeds_with_zero_items() {
    let engine = CrawlerEngine::new(vec![static_source(
        "jobs",
        OpportunityType::Job,
        &["백엔드 채용"],
    )]);

    let result = engine.crawl_by_type(OpportunityType::Contest).await;

    assert!(result.success);
    assert_eq!(result.items_found, 0);
    assert!(result.items.is_empty());
}

#[tokio::test]
async fn test_crawl_all_concatenates_in_category_order() {
    let engine = CrawlerEngine::new(vec![
        // registered out of category order on purpose
        static_source("events", OpportunityType::Event, &["밋업"]),
        static_source("jobs", OpportunityType::Job, &["채용 공고"]),
        static_source("contests", OpportunityType::Contest, &["해커톤", "공모전"]),
        failing_source("jobs-broken", OpportunityType::Job),
    ]);

    let (jobs, contests, events) = (
        engine.crawl_by_type(OpportunityType::Job).await,
        engine.crawl_by_type(OpportunityType::Contest).await,
        engine.crawl_by_type(OpportunityType::Event).await,
    );
    let all = engine.crawl_all().await;

    assert!(all.success);
    assert_eq!(
        all.items_found,
        jobs.items_found + contests.items_found + events.items_found
    );

    let kinds: Vec<OpportunityType> = all.items.iter().map(|i| i.kind).collect();
    assert_eq!(
        kinds,
        vec![
            OpportunityType::Job,
            OpportunityType::Contest,
            OpportunityType::Contest,
            OpportunityType::Event,
        ]
    );
}

#[tokio::test]
async fn test_batch_serializes_with_camel_case_schema() {
    let engine = CrawlerEngine::new(vec![static_source(
        "jobs",
        OpportunityType::Job,
        &["백엔드 채용"],
    )]);

    let result = engine.crawl_by_type(OpportunityType::Job).await;
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["success"], true);
    assert_eq!(json["itemsFound"], 1);
    assert_eq!(json["items"][0]["type"], "job");
    assert!(json["items"][0]["title"].as_str().is_some_and(|t| !t.is_empty()));
}
