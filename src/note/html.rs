//! Visible-text helpers for note bodies

use regex::Regex;
use std::sync::LazyLock;

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid tag regex"));

/// Text a reader sees: every `<...>` run removed, HTML entities decoded.
pub fn visible_text(body: &str) -> String {
    let stripped = TAG.replace_all(body, "");
    html_escape::decode_html_entities(&stripped).into_owned()
}

/// Character count of [`visible_text`]
pub fn visible_length(body: &str) -> usize {
    visible_text(body).chars().count()
}
