use scraper::{ElementRef, Html, Selector};
use std::collections::HashSet;
use tracing::debug;
use url::Url;

use crate::utils::urls::resolve_url;

/// One named parse strategy in a site's selector cascade. Strategies
/// are tried in order; the first one with at least one match wins.
pub struct ParseStrategy {
    pub name: &'static str,
    pub selector: &'static str,
}

/// Runs the cascade. `None` is the explicit no-match signal telling the
/// caller to fall back to heuristic anchor scanning.
pub fn select_candidates<'a>(
    document: &'a Html,
    strategies: &[ParseStrategy],
) -> Option<(&'static str, Vec<ElementRef<'a>>)> {
    for strategy in strategies {
        let selector = match Selector::parse(strategy.selector) {
            Ok(s) => s,
            Err(e) => {
                debug!(strategy = strategy.name, error = %e, "invalid selector, skipping");
                continue;
            }
        };
        let hits: Vec<ElementRef<'a>> = document.select(&selector).collect();
        if !hits.is_empty() {
            return Some((strategy.name, hits));
        }
    }
    None
}

/// An anchor kept by the heuristic fallback pass.
#[derive(Debug, Clone, PartialEq)]
pub struct AnchorCandidate {
    pub title: String,
    pub href: String,
}

// Visible text shorter than this is almost always chrome, not content.
const MIN_ANCHOR_CHARS: usize = 8;

// Navigation/login/pagination anchors to drop regardless of length.
const NAV_STOPWORDS: &[&str] = &[
    "로그인",
    "회원가입",
    "마이페이지",
    "이용약관",
    "개인정보",
    "고객센터",
    "이전",
    "다음",
    "더보기",
    "전체보기",
    "login",
    "sign up",
    "menu",
    "home",
    "next",
    "prev",
    "page",
];

/// Heuristic extraction for pages whose markup defeats every known
/// selector (obfuscated or generated class names): keep anchors with
/// meaningful visible text, an http(s) target and a keyword or
/// domain-term hit, deduplicated by resolved href.
pub fn heuristic_anchors(
    document: &Html,
    base: &Url,
    keyword: &str,
    domain_terms: &[&str],
    cap: usize,
) -> Vec<AnchorCandidate> {
    let anchor_selector = Selector::parse("a[href]").unwrap();
    let keyword_lower = keyword.to_lowercase();

    let mut seen: HashSet<String> = HashSet::new();
    let mut candidates = Vec::new();

    for anchor in document.select(&anchor_selector) {
        let text = anchor.text().collect::<String>();
        let title = crate::utils::text::clean_whitespace(&text);
        if title.chars().count() < MIN_ANCHOR_CHARS {
            continue;
        }

        let title_lower = title.to_lowercase();
        if NAV_STOPWORDS.iter().any(|w| title_lower.contains(w)) {
            continue;
        }

        let relevant = title_lower.contains(&keyword_lower)
            || domain_terms.iter().any(|t| title_lower.contains(t));
        if !relevant {
            continue;
        }

        let Some(raw_href) = anchor.value().attr("href") else {
            continue;
        };
        if raw_href.starts_with('#') || raw_href.starts_with("javascript:") {
            continue;
        }
        let Ok(resolved) = resolve_url(base, raw_href) else {
            continue;
        };
        if resolved.scheme() != "http" && resolved.scheme() != "https" {
            continue;
        }

        let href = resolved.to_string();
        if !seen.insert(href.clone()) {
            continue;
        }

        candidates.push(AnchorCandidate { title, href });
        if candidates.len() >= cap {
            break;
        }
    }

    candidates
}
