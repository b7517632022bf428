use async_trait::async_trait;
use chrono::{Duration, Local};
use rand::Rng;

use crate::config::SourceConfig;
use crate::domain::models::{CrawledItem, OpportunityType};
use crate::domain::source::{SourceAdapter, SourceError};

/// Upper bound on items a single simulated crawl produces.
pub const MAX_SIMULATED_ITEMS: usize = 5;

const JOB_TITLES: &[&str] = &[
    "백엔드 개발자 채용 (Rust)",
    "프론트엔드 엔지니어 모집",
    "데이터 엔지니어 신입/경력 채용",
    "ML 엔지니어 채용",
    "플랫폼 SRE 채용",
];

const CONTEST_TITLES: &[&str] = &[
    "전국 대학생 AI 해커톤",
    "공공데이터 활용 아이디어 공모전",
    "핀테크 서비스 개발 경진대회",
    "소셜임팩트 창업 공모전",
    "오픈소스 컨트리뷰션 해커톤",
];

const EVENT_TITLES: &[&str] = &[
    "개발자 커리어 컨퍼런스",
    "클라우드 네이티브 밋업",
    "스타트업 네트워킹 나이트",
    "테크 리더십 세미나",
    "주니어 개발자 부트캠프 설명회",
];

const ORGANIZERS: &[&str] = &[
    "모아테크",
    "한국소프트웨어산업협회",
    "청년창업재단",
    "개발자 커뮤니티 연합",
];

const LOCATIONS: &[&str] = &["서울 코엑스", "부산 벡스코", "판교 스타트업캠퍼스", "Online"];

const SALARIES: &[&str] = &["연봉 4,000~6,000만원", "연봉 5,000만원 이상", "회사 내규에 따름"];

const EMPLOYMENT_TYPES: &[&str] = &["정규직", "계약직", "인턴"];

const PRIZES: &[&str] = &["총 상금 1,000만원", "총 상금 3,000만원", "대상 500만원"];

/// Produces schema-conformant synthetic items so the orchestrator can
/// be exercised, demoed and tested without live network access.
pub struct SimulationAdapter {
    config: SourceConfig,
}

impl SimulationAdapter {
    pub fn new(config: SourceConfig) -> Self {
        Self { config }
    }

    fn generate(&self) -> Vec<CrawledItem> {
        let mut rng = rand::rng();
        let count = rng.random_range(0..=MAX_SIMULATED_ITEMS);

        (0..count).map(|i| self.generate_one(&mut rng, i)).collect()
    }

    fn generate_one(&self, rng: &mut impl Rng, index: usize) -> CrawledItem {
        let titles = match self.config.kind {
            OpportunityType::Job => JOB_TITLES,
            OpportunityType::Contest => CONTEST_TITLES,
            OpportunityType::Event => EVENT_TITLES,
        };
        let title = titles[index % titles.len()];
        let organizer = ORGANIZERS[rng.random_range(0..ORGANIZERS.len())];

        // deadline within a bounded future window
        let deadline = Local::now().date_naive() + Duration::days(rng.random_range(7..=90));
        let date = deadline.format("%Y-%m-%d").to_string();

        let link = format!("{}/{}", self.config.url.trim_end_matches('/'), index + 1);
        let mut item = CrawledItem::new(
            title,
            format!("{} 주관 모의 공고", organizer),
            self.config.kind,
            date,
            link,
            self.config.url.clone(),
        );

        match self.config.kind {
            OpportunityType::Job => {
                item.company = Some(organizer.to_string());
                item.salary = Some(SALARIES[rng.random_range(0..SALARIES.len())].to_string());
                item.employment_type =
                    Some(EMPLOYMENT_TYPES[rng.random_range(0..EMPLOYMENT_TYPES.len())].to_string());
            }
            OpportunityType::Contest => {
                item.sponsor = Some(organizer.to_string());
                let prize = PRIZES[rng.random_range(0..PRIZES.len())].to_string();
                item.prize = Some(prize.clone());
                item.total_prize = Some(prize);
            }
            OpportunityType::Event => {
                item.sponsor = Some(organizer.to_string());
                item.location = Some(LOCATIONS[rng.random_range(0..LOCATIONS.len())].to_string());
            }
        }

        item
    }
}

#[async_trait]
impl SourceAdapter for SimulationAdapter {
    async fn crawl(&self) -> Result<Vec<CrawledItem>, SourceError> {
        Ok(self.generate())
    }

    fn name(&self) -> &str {
        &self.config.name
    }
}
