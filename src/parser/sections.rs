/// The nine canonical section markers, in documentation order.
pub const SECTION_LABELS: [&str; 9] = [
    "1. Your Personal Fit Summary",
    "2. Where You and This Major Connect",
    "3. What You Study in This Major",
    "4. Child Majors / Specializations",
    "5. Career Paths & Job Roles",
    "6. Skills You Gain",
    "7. Study Snapshot",
    "8. Pros, Challenges & Misconceptions",
    "Footer",
];

/// Body text of the section that starts at `label`, or "" when the block has
/// none.
///
/// The body runs from the line after the label to the first later line that
/// starts with any canonical label. Membership in the label set decides the
/// boundary, not documentation order, so a section is closed even by a marker
/// that sits "earlier" in the list.
pub fn extract_section(lines: &[&str], label: &str) -> String {
    let Some(start) = lines.iter().position(|l| l.trim().starts_with(label)) else {
        return String::new();
    };

    let body = &lines[start + 1..];
    let end = body
        .iter()
        .position(|l| {
            let trimmed = l.trim();
            SECTION_LABELS.iter().any(|s| trimmed.starts_with(s))
        })
        .unwrap_or(body.len());

    body[..end].join("\n").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_label_yields_empty() {
        let lines = ["1. A — Full Report Card", "Tagline: x"];
        assert_eq!(extract_section(&lines, "7. Study Snapshot"), "");
    }

    #[test]
    fn body_runs_to_next_canonical_label() {
        let lines = [
            "1. Your Personal Fit Summary",
            "You like puzzles.",
            "And systems.",
            "2. Where You and This Major Connect",
            "Other text.",
        ];
        assert_eq!(
            extract_section(&lines, "1. Your Personal Fit Summary"),
            "You like puzzles.\nAnd systems."
        );
    }

    #[test]
    fn boundary_is_set_membership_not_list_order() {
        // A "later" section followed by an "earlier" marker still closes.
        let lines = [
            "7. Study Snapshot",
            "Four semesters of studio work.",
            "1. Your Personal Fit Summary",
            "Should not leak.",
        ];
        assert_eq!(
            extract_section(&lines, "7. Study Snapshot"),
            "Four semesters of studio work."
        );
    }

    #[test]
    fn body_runs_to_end_of_block() {
        let lines = ["Footer", "Reviewed in spring.", ""];
        assert_eq!(extract_section(&lines, "Footer"), "Reviewed in spring.");
    }

    #[test]
    fn body_is_trimmed() {
        let lines = ["7. Study Snapshot", "", "  Heavy workload.  ", ""];
        assert_eq!(extract_section(&lines, "7. Study Snapshot"), "Heavy workload.");
    }
}
