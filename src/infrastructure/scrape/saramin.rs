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

const SITE_LABEL: &str = "사람인";
const DOMAIN_TERMS: &[&str] = &["채용", "모집", "개발", "경력", "신입"];

const STRATEGIES: &[ParseStrategy] = &[
    ParseStrategy {
        name: "recruit-items",
        selector: "div.item_recruit",
    },
    ParseStrategy {
        name: "list-items",
        selector: "div.list_body div.list_item",
    },
    ParseStrategy {
        name: "plain-rows",
        selector: "ul.recruit_list li",
    },
];

/// Scrapes the Saramin developer job listings.
pub struct SaraminAdapter {
    client: reqwest::Client,
    config: SourceConfig,
    keyword: String,
    max_items: usize,
}

impl SaraminAdapter {
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
                        item.company = Some(SITE_LABEL.to_string());
                        item
                    })
                    .collect()
            }
        };

        finalize_items(items, self.max_items)
    }

    fn extract(&self, element: &ElementRef<'_>, base: &Url) -> Option<CrawledItem> {
        let title_selector = Selector::parse("h2.job_tit a, .job_tit a, a").unwrap();
        let company_selector = Selector::parse(".corp_name a, .corp_name, .company").unwrap();
        let date_selector = Selector::parse(".job_date .date, .deadlines, .date").unwrap();
        let salary_selector = Selector::parse(".salary").unwrap();
        let employment_selector = Selector::parse(".employment_type, .job_type").unwrap();
        let condition_selector = Selector::parse(".job_condition, .conditions").unwrap();

        let anchor = element.select(&title_selector).next();
        // job rows often carry the full title in the anchor's title
        // attribute while the visible text is truncated
        let title = anchor
            .and_then(|a| a.value().attr("title").map(|t| clean_whitespace(t)))
            .filter(|t| !t.is_empty())
            .or_else(|| anchor.map(|a| clean_whitespace(&a.text().collect::<String>())))
            .unwrap_or_default();
        if title.is_empty() {
            return None;
        }

        let link = anchor
            .and_then(|a| a.value().attr("href"))
            .and_then(|href| resolve_url(base, href).ok())
            .map(|u| u.to_string())
            .unwrap_or_else(|| self.config.url.clone());

        let company = element
            .select(&company_selector)
            .next()
            .map(|el| clean_whitespace(&el.text().collect::<String>()))
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| SITE_LABEL.to_string());

        let date_text = element
            .select(&date_selector)
            .next()
            .map(|el| clean_whitespace(&el.text().collect::<String>()))
            .unwrap_or_default();
        // "상시채용" and friends mean a rolling deadline
        let date = if date_text.contains("상시") {
            DATE_ONGOING.to_string()
        } else {
            match normalize_date(&date_text) {
                normalized if normalized.is_empty() => DATE_ONGOING.to_string(),
                normalized => normalized,
            }
        };

        let salary = element
            .select(&salary_selector)
            .next()
            .map(|el| clean_whitespace(&el.text().collect::<String>()))
            .filter(|s| !s.is_empty());

        let employment_type = element
            .select(&employment_selector)
            .next()
            .map(|el| clean_whitespace(&el.text().collect::<String>()))
            .filter(|s| !s.is_empty());

        let description = element
            .select(&condition_selector)
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
        item.company = Some(company);
        item.salary = salary;
        item.employment_type = employment_type;
        Some(item)
    }
}

#[async_trait]
impl SourceAdapter for SaraminAdapter {
    async fn crawl(&self) -> Result<Vec<CrawledItem>, SourceError> {
        let body = fetch_listing(&self.client, &self.config.url).await?;
        Ok(self.parse(&body))
    }

    fn name(&self) -> &str {
        &self.config.name
    }
}
