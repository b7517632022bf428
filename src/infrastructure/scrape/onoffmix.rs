use async_trait::async_trait;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info};
use url::Url;

use crate::config::SourceConfig;
use crate::domain::models::CrawledItem;
use crate::domain::services::dates::normalize_date;
use crate::domain::source::{SourceAdapter, SourceError};
use crate::infrastructure::scrape::strategy::{
    heuristic_anchors, select_candidates, ParseStrategy,
};
use crate::infrastructure::scrape::{fetch_listing, finalize_items, listing_client};
use crate::utils::text::clean_whitespace;
use crate::utils::urls::resolve_url;

const SITE_LABEL: &str = "온오프믹스";
const DOMAIN_TERMS: &[&str] = &["세미나", "컨퍼런스", "밋업", "행사", "강연"];

const STRATEGIES: &[ParseStrategy] = &[
    ParseStrategy {
        name: "event-cards",
        selector: "ul.event_list li",
    },
    ParseStrategy {
        name: "article-cards",
        selector: "div.event_area article",
    },
    ParseStrategy {
        name: "generic-cards",
        selector: "div[class*='eventList'] li",
    },
];

/// Scrapes the OnOffMix event board.
pub struct OnoffmixAdapter {
    client: reqwest::Client,
    config: SourceConfig,
    keyword: String,
    max_items: usize,
}

impl OnoffmixAdapter {
    pub fn new(
        config: SourceConfig,
        keyword: &str,
        max_items: usize,
    ) -> Result<Self, SourceError> {
        Ok(Self {
            client: listing_client()?,
            config,
            keyword: keyword.to_string(),
            max_items,
        })
    }

    fn parse(&self, body: &str) -> Vec<CrawledItem> {
        let document = Html::parse_document(body);
        let base = match Url::parse(&self.config.url) {
            Ok(url) => url,
            Err(_) => return Vec::new(),
        };

        let items = match select_candidates(&document, STRATEGIES) {
            Some((strategy, candidates)) => {
                info!(
                    source = %self.config.name,
                    strategy,
                    candidates = candidates.len(),
                    "selector cascade matched"
                );
                candidates
                    .iter()
                    .filter_map(|el| self.extract(el, &base))
                    .collect()
            }
            None => {
                debug!(source = %self.config.name, "cascade exhausted, using heuristic anchors");
                heuristic_anchors(&document, &base, &self.keyword, DOMAIN_TERMS, self.max_items)
                    .into_iter()
                    .map(|anchor| {
                        let mut item = CrawledItem::new(
                            anchor.title,
                            "",
                            self.config.kind,
                            "",
                            anchor.href,
                            self.config.url.clone(),
                        );
                        item.sponsor = Some(SITE_LABEL.to_string());
                        item
                    })
                    .collect()
            }
        };

        finalize_items(items, self.max_items)
    }

    fn extract(&self, element: &ElementRef<'_>, base: &Url) -> Option<CrawledItem> {
        let title_selector = Selector::parse(".title a, .tit a, a").unwrap();
        let image_selector = Selector::parse("img").unwrap();
        let date_selector = Selector::parse(".date, .event_date, time").unwrap();
        let place_selector = Selector::parse(".place, .location").unwrap();
        let organizer_selector = Selector::parse(".host, .organizer").unwrap();
        let summary_selector = Selector::parse(".summary, .desc, p").unwrap();

        let anchor = element.select(&title_selector).next();
        let title = anchor
            .map(|a| clean_whitespace(&a.text().collect::<String>()))
            .unwrap_or_default();
        if title.is_empty() {
            return None;
        }

        let link = anchor
            .and_then(|a| a.value().attr("href"))
            .and_then(|href| resolve_url(base, href).ok())
            .map(|u| u.to_string())
            .unwrap_or_else(|| self.config.url.clone());

        let image = element
            .select(&image_selector)
            .next()
            .and_then(|img| img.value().attr("src"))
            .and_then(|src| resolve_url(base, src).ok())
            .map(|u| u.to_string());

        let date_text = element
            .select(&date_selector)
            .next()
            .map(|el| clean_whitespace(&el.text().collect::<String>()))
            .unwrap_or_default();
        // Events run on a concrete day; an unparseable date stays
        // explicitly empty rather than pretending to be rolling.
        let date = normalize_date(&date_text);

        let location = element
            .select(&place_selector)
            .next()
            .map(|el| clean_whitespace(&el.text().collect::<String>()))
            .filter(|s| !s.is_empty());

        let organizer = element
            .select(&organizer_selector)
            .next()
            .map(|el| clean_whitespace(&el.text().collect::<String>()))
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| SITE_LABEL.to_string());

        let description = element
            .select(&summary_selector)
            .next()
            .map(|el| clean_whitespace(&el.text().collect::<String>()))
            .unwrap_or_default();

        let mut item = CrawledItem::new(
            title,
            description,
            self.config.kind,
            date,
            link,
            self.config.url.clone(),
        );
        item.location = location;
        item.sponsor = Some(organizer);
        item.image = image;
        Some(item)
    }
}

#[async_trait]
impl SourceAdapter for OnoffmixAdapter {
    async fn crawl(&self) -> Result<Vec<CrawledItem>, SourceError> {
        let body = fetch_listing(&self.client, &self.config.url).await?;
        Ok(self.parse(&body))
    }

    fn name(&self) -> &str {
        &self.config.name
    }
}
