use std::sync::LazyLock;

use regex::Regex;

/// `1. Computer Science — Full Report Card`
static HEADER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\s*(.+?)\s*—\s*Full Report Card\s*$").unwrap());

/// True when a trimmed line is a report-card header.
pub fn is_header(line: &str) -> bool {
    HEADER_RE.is_match(line.trim())
}

/// Major name captured from a header line, if the line is one.
pub fn header_name(line: &str) -> Option<String> {
    HEADER_RE
        .captures(line.trim())
        .map(|caps| caps[1].to_string())
}

/// Split the document into one line-group per report card.
///
/// A header line flushes the running group and opens the next one. Text
/// before the first header ends up in a headerless group; it fails name
/// extraction downstream and drops out of the result map without error.
pub fn segment(document: &str) -> Vec<Vec<&str>> {
    let mut groups = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in document.lines() {
        if is_header(line) && !current.is_empty() {
            groups.push(std::mem::take(&mut current));
        }
        current.push(line);
    }
    if !current.is_empty() {
        groups.push(current);
    }

    groups
}
