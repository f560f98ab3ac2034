use std::collections::HashMap;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::parser::normalize::normalize;

/// One parsed report card. Field absence is data, not an error: optional
/// sections come back as `None`, list sections as empty vectors.
/// `raw_section` keeps the verbatim block text for diagnostics and fallback
/// display.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MajorReport {
    pub name: String,
    pub tagline: Option<String>,
    pub trait_chips: Vec<String>,
    pub personal_fit_summary: Option<String>,
    pub connection_summary: Option<String>,
    pub study_overview: Option<String>,
    pub core_subjects: Vec<String>,
    pub child_majors: Vec<String>,
    pub career_paths: Vec<String>,
    pub work_settings: Vec<String>,
    pub skills: Vec<String>,
    pub study_snapshot: Option<String>,
    pub pros_challenges: Option<String>,
    pub footer: Option<String>,
    pub raw_section: String,
}

/// Reports keyed by normalized name, in document order.
///
/// Inserting an existing key overwrites the report in place and keeps the
/// position of the first insertion. Later insertions win.
#[derive(Debug, Default)]
pub struct ReportMap {
    index: HashMap<String, usize>,
    entries: Vec<(String, MajorReport)>,
}

impl ReportMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert under `normalize(report.name)`.
    pub fn insert(&mut self, report: MajorReport) {
        let key = normalize(&report.name);
        match self.index.get(&key) {
            Some(&i) => self.entries[i].1 = report,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, report));
            }
        }
    }

    /// Fetch by already-normalized key.
    pub fn get(&self, key: &str) -> Option<&MajorReport> {
        self.index.get(key).map(|&i| &self.entries[i].1)
    }

    /// Fetch by free-text name; the query is normalized first.
    pub fn lookup(&self, name: &str) -> Option<&MajorReport> {
        self.get(&normalize(name))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// (key, report) pairs in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MajorReport)> {
        self.entries.iter().map(|(k, r)| (k.as_str(), r))
    }

    /// Reports in document order.
    pub fn reports(&self) -> impl Iterator<Item = &MajorReport> {
        self.entries.iter().map(|(_, r)| r)
    }
}

impl Serialize for ReportMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, report) in &self.entries {
            map.serialize_entry(key, report)?;
        }
        map.end()
    }
}
