pub mod blocks;
pub mod extract;
pub mod normalize;
pub mod sections;

use rayon::prelude::*;

use crate::report::ReportMap;

/// Parse a full report document into its map of structured reports.
///
/// Pure and allocation-only: segmentation, per-block extraction (fanned out
/// across blocks), then insertion in document order. Collecting before the
/// insert loop restores document order, so colliding names still resolve
/// last-write-wins.
pub fn parse_document(text: &str) -> ReportMap {
    let groups = blocks::segment(text);
    let reports: Vec<_> = groups
        .par_iter()
        .filter_map(|lines| extract::extract_report(lines))
        .collect();

    let mut map = ReportMap::new();
    for report in reports {
        map.insert(report);
    }
    map
}
