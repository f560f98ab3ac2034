use crate::parser::extract::lists::{labeled_list, split_bullets, strip_prefix_ci};

const ROUTE_LABELS: &[&str] = &["Core Career Routes:", "Adjacent Roles:"];

const WORK_SETTINGS: &str = "work settings";

/// Career paths from the careers section.
///
/// The `Work Settings:` line lives inside the same section but belongs to
/// [`work_settings`], so it is excluded before the sub-label scan.
pub fn paths(section: &str) -> Vec<String> {
    let body: Vec<&str> = section
        .lines()
        .filter(|l| strip_prefix_ci(l.trim(), WORK_SETTINGS).is_none())
        .collect();
    labeled_list(&body.join("\n"), ROUTE_LABELS)
}

/// Items of the single `Work Settings:` line, if the section has one.
pub fn work_settings(section: &str) -> Vec<String> {
    let Some(rest) = section
        .lines()
        .find_map(|l| strip_prefix_ci(l.trim(), WORK_SETTINGS))
    else {
        return Vec::new();
    };
    let rest = rest.trim_start();
    split_bullets(rest.strip_prefix(':').unwrap_or(rest))
}
