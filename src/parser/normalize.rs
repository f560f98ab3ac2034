use std::sync::LazyLock;

use regex::Regex;

static NON_KEY_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9]+").unwrap());

/// Collapse a free-text major name into its stable lookup key.
///
/// Lowercases, replaces every run of characters outside `[a-z0-9]` with a
/// single space, and trims. Idempotent, so keys can be re-normalized freely;
/// names that differ only in case or punctuation collide on purpose.
pub fn normalize(name: &str) -> String {
    let lower = name.to_lowercase();
    NON_KEY_RE.replace_all(&lower, " ").trim().to_string()
}
