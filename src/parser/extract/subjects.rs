use crate::parser::extract::lists::strip_bullet;

/// Subjects listed under the `Core Subjects` heading of the study section.
///
/// Every non-empty line after the heading (to the end of the section) is one
/// subject, with a leading `- ` or `• ` marker stripped.
pub fn core_subjects(section: &str) -> Vec<String> {
    let lines: Vec<&str> = section.lines().collect();
    let Some(start) = lines
        .iter()
        .position(|l| l.trim().to_lowercase().starts_with("core subjects"))
    else {
        return Vec::new();
    };

    lines[start + 1..]
        .iter()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .map(|l| strip_bullet(l).trim().to_string())
        .collect()
}
