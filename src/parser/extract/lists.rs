use std::sync::LazyLock;

use regex::Regex;

/// Stray numeric header fragment, e.g. a bare `4.` left over from the layout.
static NUM_FRAGMENT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\.$").unwrap());

/// Strip a leading `- ` or `• ` list marker.
pub fn strip_bullet(line: &str) -> &str {
    line.strip_prefix("- ")
        .or_else(|| line.strip_prefix("• "))
        .unwrap_or(line)
}

/// Case-insensitive `strip_prefix` (ASCII case, which is all the sub-labels
/// use).
pub fn strip_prefix_ci<'a>(line: &'a str, prefix: &str) -> Option<&'a str> {
    let head = line.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix)
        .then(|| &line[prefix.len()..])
}

/// Split a `•`-separated run into trimmed, non-empty items.
pub fn split_bullets(text: &str) -> Vec<String> {
    text.split('•')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

/// Harvest the items of a sub-labeled section.
///
/// Every trimmed, non-empty line becomes one item after stripping a matching
/// sub-label (plus an optional trailing colon) and a leading bullet marker.
/// Lines that end up empty, bare `<n>.` fragments, and verbatim label echoes
/// are discarded instead of producing empty entries.
pub fn labeled_list(section: &str, sub_labels: &[&str]) -> Vec<String> {
    let mut items = Vec::new();

    for raw in section.lines() {
        let mut line = raw.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(rest) = sub_labels.iter().find_map(|lab| strip_prefix_ci(line, lab)) {
            let rest = rest.trim_start();
            line = rest.strip_prefix(':').unwrap_or(rest).trim();
        }
        line = strip_bullet(line).trim();

        if line.is_empty() || NUM_FRAGMENT_RE.is_match(line) {
            continue;
        }
        if sub_labels.iter().any(|lab| line == *lab) {
            continue;
        }
        items.push(line.to_string());
    }

    items
}
