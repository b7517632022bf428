use async_trait::async_trait;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info};
use url::Url;

use crate::config::SourceConfig;
use crate::domain::models::{CrawledItem, DATE_ONGOING};
use crate::domain::services::dates::normalize_date;
use crate::domain::source::{SourceAdapter, SourceError};
use crate::infrastructure::scrape::strategy::{
    heuristic_anchors, select_candidates, ParseStrategy,
};
use crate::infrastructure::scrape::{fetch_listing, finalize_items, listing_client};
use crate::utils::text::clean_whitespace;
use crate::utils::urls::resolve_url;

const SITE_LABEL: &str = "위비티";
const DOMAIN_TERMS: &[&str] = &["공모", "해커톤", "대회"];

/// Known markup generations of the contest board, newest first.
const STRATEGIES: &[ParseStrategy] = &[
    ParseStrategy {
        name: "contest-list",
        selector: "ul.list li",
    },
    ParseStrategy {
        name: "legacy-board",
        selector: "table.contest-list tbody tr",
    },
    ParseStrategy {
        name: "card-grid",
        selector: "div.thumb-list > div",
    },
];

/// Scrapes the Wevity contest board.
pub struct WevityAdapter {
    client: reqwest::Client,
    config: SourceConfig,
    keyword: String,
    max_items: usize,
}

impl WevityAdapter {
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
                            DATE_ONGOING,
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

    /// Each sub-field is extracted independently; a missing one never
    /// discards the item.
    fn extract(&self, element: &ElementRef<'_>, base: &Url) -> Option<CrawledItem> {
        let title_selector = Selector::parse(".tit a, a").unwrap();
        let image_selector = Selector::parse("img").unwrap();
        let date_selector = Selector::parse(".day, .dday, .date").unwrap();
        let organizer_selector = Selector::parse(".organ, .host").unwrap();
        let prize_selector = Selector::parse(".prize, .reward").unwrap();

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
        let date = match normalize_date(&date_text) {
            normalized if normalized.is_empty() => DATE_ONGOING.to_string(),
            normalized => normalized,
        };

        let organizer = element
            .select(&organizer_selector)
            .next()
            .map(|el| clean_whitespace(&el.text().collect::<String>()))
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| SITE_LABEL.to_string());

        let prize = element
            .select(&prize_selector)
            .next()
            .map(|el| clean_whitespace(&el.text().collect::<String>()))
            .filter(|s| !s.is_empty());

        let mut item = CrawledItem::new(
            title,
            String::new(),
            self.config.kind,
            date,
            link,
            self.config.url.clone(),
        );
        item.sponsor = Some(organizer);
        item.prize = prize.clone();
        item.total_prize = prize;
        item.image = image;
        Some(item)
    }
}

#[async_trait]
impl SourceAdapter for WevityAdapter {
    async fn crawl(&self) -> Result<Vec<CrawledItem>, SourceError> {
        // the board supports keyword search via the `sw` parameter
        let separator = if self.config.url.contains('?') { '&' } else { '?' };
        let url = format!(
            "{}{}sw={}",
            self.config.url,
            separator,
            urlencoding::encode(&self.keyword)
        );
        let body = fetch_listing(&self.client, &url).await?;
        Ok(self.parse(&body))
    }

    fn name(&self) -> &str {
        &self.config.name
    }
}
