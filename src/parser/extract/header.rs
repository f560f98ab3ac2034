use crate::parser::blocks;
use crate::parser::extract::lists::split_bullets;

/// Major name from the block's header line, if any line matches the pattern.
pub fn name(lines: &[&str]) -> Option<String> {
    lines.iter().find_map(|l| blocks::header_name(l))
}

/// Remainder of the first `Tagline:` line, trimmed.
pub fn tagline(lines: &[&str]) -> Option<String> {
    lines
        .iter()
        .find_map(|l| l.trim().strip_prefix("Tagline:"))
        .map(|rest| rest.trim().to_string())
        .filter(|t| !t.is_empty())
}

/// Chips from the first `Trait Chips:` line, split on `•`, order preserved.
pub fn trait_chips(lines: &[&str]) -> Vec<String> {
    lines
        .iter()
        .find_map(|l| l.trim().strip_prefix("Trait Chips:"))
        .map(split_bullets)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tagline_is_the_line_remainder() {
        let lines = [
            "1. Computer Science — Full Report Card",
            "Tagline:   Build the future with code  ",
        ];
        assert_eq!(tagline(&lines).as_deref(), Some("Build the future with code"));
    }

    #[test]
    fn missing_or_empty_tagline_is_none() {
        assert_eq!(tagline(&["1. A — Full Report Card"]), None);
        assert_eq!(tagline(&["Tagline:"]), None);
    }

    #[test]
    fn chips_split_on_bullets() {
        let lines = ["Trait Chips: Logical • Creative • Persistent"];
        assert_eq!(trait_chips(&lines), ["Logical", "Creative", "Persistent"]);
    }

    #[test]
    fn no_chip_line_means_no_chips() {
        assert!(trait_chips(&["Tagline: x"]).is_empty());
    }

    #[test]
    fn name_requires_a_header_line() {
        assert_eq!(name(&["intro text", ""]), None);
        assert_eq!(
            name(&["2. Fine Arts — Full Report Card"]).as_deref(),
            Some("Fine Arts")
        );
    }
}
