// src/core/display.rs
use crate::render::markup::escape;
use regex::Regex;
use std::sync::LazyLock;

static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://\S+").expect("url pattern is valid"));

static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[[^\]]*\]\([^)]*\)").expect("link pattern is valid"));

/// Turns a raw task body into the text shown in Conky.
///
/// `[label](target)` links and bare URLs are dropped, every occurrence of
/// `date_token` is removed along with one whitespace character after it, the
/// result is trimmed and `$` is escaped.
#[inline]
#[must_use]
pub fn display_text(raw: &str, date_token: Option<&str>) -> String {
    // Links go first: the URL pattern would otherwise eat a link's closing paren.
    let without_links = LINK_RE.replace_all(raw, "");
    let without_urls = URL_RE.replace_all(&without_links, "");
    let cleaned = match date_token {
        Some(token) => remove_token(&without_urls, token),
        None => without_urls.into_owned(),
    };
    escape(cleaned.trim())
}

fn remove_token(text: &str, token: &str) -> String {
    if token.is_empty() {
        return text.to_owned();
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(idx) = rest.find(token) {
        out.push_str(&rest[..idx]);
        rest = &rest[idx + token.len()..];
        if let Some(ws) = rest.chars().next().filter(|c| c.is_whitespace()) {
            rest = &rest[ws.len_utf8()..];
        }
    }
    out.push_str(rest);
    out
}
