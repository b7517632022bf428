// Copyright (c) 2025 moa-crawler contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use url::{ParseError, Url};

/// Resolves a possibly-relative href against the page it was found on.
pub fn resolve_url(base_url: &Url, path: &str) -> Result<Url, ParseError> {
    base_url.join(path)
}

/// Human-readable label for a result URL: the host with any `www.`
/// prefix stripped. `None` when the URL does not parse or has no host.
pub fn host_label(raw: &str) -> Option<String> {
    let parsed = Url::parse(raw).ok()?;
    let host = parsed.host_str()?;
    Some(host.strip_prefix("www.").unwrap_or(host).to_string())
}
