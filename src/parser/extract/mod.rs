pub mod careers;
pub mod header;
pub mod lists;
pub mod skills;
pub mod subjects;

use crate::parser::sections::extract_section;
use crate::report::MajorReport;

/// Section 4 carries no sub-labels; bullet stripping and junk dropping still
/// apply.
const CHILD_MAJOR_LABELS: &[&str] = &[];

/// Assemble one report from a segmented block.
///
/// Returns `None` when no line matches the header pattern; such blocks are
/// dropped from the output map without error. Missing sections are not
/// errors either: they come back as `None` or empty lists.
pub fn extract_report(lines: &[&str]) -> Option<MajorReport> {
    let name = header::name(lines)?;

    let study = extract_section(lines, "3. What You Study in This Major");
    let careers_text = extract_section(lines, "5. Career Paths & Job Roles");

    Some(MajorReport {
        name,
        tagline: header::tagline(lines),
        trait_chips: header::trait_chips(lines),
        personal_fit_summary: opt(extract_section(lines, "1. Your Personal Fit Summary")),
        connection_summary: opt(extract_section(lines, "2. Where You and This Major Connect")),
        core_subjects: subjects::core_subjects(&study),
        child_majors: lists::labeled_list(
            &extract_section(lines, "4. Child Majors / Specializations"),
            CHILD_MAJOR_LABELS,
        ),
        career_paths: careers::paths(&careers_text),
        work_settings: careers::work_settings(&careers_text),
        skills: skills::skills(&extract_section(lines, "6. Skills You Gain")),
        study_snapshot: opt(extract_section(lines, "7. Study Snapshot")),
        pros_challenges: opt(extract_section(lines, "8. Pros, Challenges & Misconceptions")),
        footer: opt(extract_section(lines, "Footer")),
        study_overview: opt(study),
        raw_section: lines.join("\n"),
    })
}

fn opt(text: String) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::blocks::segment;

    fn fixture_blocks() -> Vec<Vec<String>> {
        let text = std::fs::read_to_string("tests/fixtures/majors.txt").unwrap();
        segment(&text)
            .into_iter()
            .map(|lines| lines.into_iter().map(str::to_string).collect())
            .collect()
    }

    fn report_for(header_needle: &str) -> MajorReport {
        for block in fixture_blocks() {
            let lines: Vec<&str> = block.iter().map(String::as_str).collect();
            if lines.iter().any(|l| l.contains(header_needle)) {
                return extract_report(&lines).unwrap();
            }
        }
        panic!("no fixture block with header {:?}", header_needle);
    }

    #[test]
    fn computer_science_full_report() {
        let r = report_for("1. Computer Science — Full Report Card");
        assert_eq!(r.name, "Computer Science");
        assert_eq!(r.tagline.as_deref(), Some("Build the future with code"));
        assert_eq!(r.trait_chips, ["Logical", "Creative", "Persistent"]);
        assert_eq!(
            r.personal_fit_summary.as_deref(),
            Some("You love solving structured problems and building systems from scratch.")
        );
        assert_eq!(
            r.connection_summary.as_deref(),
            Some("Your puzzle-first habits map cleanly onto program design.")
        );
        assert_eq!(
            r.core_subjects,
            ["Algorithms", "Data Structures", "Operating Systems"]
        );
        assert_eq!(r.child_majors, ["Artificial Intelligence", "Computer Graphics"]);
        assert_eq!(
            r.career_paths,
            ["Software Engineer", "Systems Architect", "Data Analyst"]
        );
        assert_eq!(r.work_settings, ["Office", "Remote", "Hybrid"]);
        assert_eq!(
            r.skills,
            ["Programming", "Debugging", "Problem decomposition"]
        );
        assert_eq!(
            r.study_snapshot.as_deref(),
            Some("Workload is heavy in the first two years.")
        );
        assert_eq!(
            r.pros_challenges.as_deref(),
            Some("Pro: versatile degree. Challenge: math-heavy start.")
        );
        assert_eq!(r.footer.as_deref(), Some("Reviewed by the advising board."));
        assert!(r.study_overview.as_deref().unwrap().contains("Core Subjects"));
        assert!(r.raw_section.contains("1. Computer Science — Full Report Card"));
    }

    #[test]
    fn sparse_report_keeps_absent_fields_empty() {
        let r = report_for("2. Fine Arts — Full Report Card");
        assert_eq!(r.name, "Fine Arts");
        assert_eq!(r.tagline.as_deref(), Some("Make things people feel"));
        assert_eq!(r.trait_chips, ["Expressive", "Observant"]);
        assert_eq!(r.career_paths, ["Illustrator"]);
        assert_eq!(r.work_settings, ["Studio"]);
        assert_eq!(r.personal_fit_summary, None);
        assert_eq!(r.study_overview, None);
        assert_eq!(r.footer, None);
        assert!(r.core_subjects.is_empty());
        assert!(r.skills.is_empty());
    }

    #[test]
    fn headerless_block_is_skipped() {
        assert!(extract_report(&["intro text", "nothing here"]).is_none());
    }

    #[test]
    fn header_only_block_is_a_report() {
        let r = extract_report(&["4. Philosophy — Full Report Card"]).unwrap();
        assert_eq!(r.name, "Philosophy");
        assert_eq!(r.tagline, None);
        assert!(r.trait_chips.is_empty());
        assert!(r.career_paths.is_empty());
        assert_eq!(r.study_snapshot, None);
    }
}
