use crate::parser::extract::lists::labeled_list;

const SKILL_LABELS: &[&str] = &["Technical / Domain Skills:", "Transferable Skills:"];

/// Skills from the skills section, both sub-label groups merged in document
/// order.
pub fn skills(section: &str) -> Vec<String> {
    labeled_list(section, SKILL_LABELS)
}
