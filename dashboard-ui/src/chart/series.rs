//! Series schemas for record-shaped responses
//!
//! A schema names the label keys of a row, the series that are always
//! drawn, and whether further numeric keys found in the data become
//! series of their own. Declared series missing from a row read as zero.

use std::collections::BTreeSet;

use shared::models::{Record, RecordExt};

use super::Series;

/// Keys that label a row rather than carry a value
pub const LABEL_KEYS: &[&str] = &["name", "date"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesSchema {
    pub label_keys: &'static [&'static str],
    pub declared: &'static [&'static str],
    pub dynamic: bool,
}

impl SeriesSchema {
    /// Exactly the declared series; other keys are ignored
    pub const fn fixed(declared: &'static [&'static str]) -> Self {
        Self {
            label_keys: LABEL_KEYS,
            declared,
            dynamic: false,
        }
    }

    /// Declared series first, then every other numeric key in the data
    pub const fn dynamic(declared: &'static [&'static str]) -> Self {
        Self {
            label_keys: LABEL_KEYS,
            declared,
            dynamic: true,
        }
    }

    pub fn is_label(&self, key: &str) -> bool {
        self.label_keys.contains(&key)
    }

    /// Series names in draw order
    ///
    /// Discovered keys follow the declared ones in order of first
    /// appearance. A discovered key with no numeric value in any row is
    /// skipped.
    pub fn discover(&self, records: &[Record]) -> Vec<String> {
        let mut names: Vec<String> = self.declared.iter().map(|s| s.to_string()).collect();
        if !self.dynamic {
            return names;
        }

        let mut seen: BTreeSet<&str> = self.declared.iter().copied().collect();
        let mut skipped: BTreeSet<&str> = BTreeSet::new();
        for record in records {
            for key in record.keys() {
                let key = key.as_str();
                if self.is_label(key) || seen.contains(key) {
                    continue;
                }
                if records.iter().any(|r| r.number(key).is_some()) {
                    seen.insert(key);
                    names.push(key.to_string());
                } else if skipped.insert(key) {
                    tracing::warn!(key, "Ignoring non-numeric field in series data");
                }
            }
        }
        names
    }

    /// Category labels plus one value vector per series
    pub fn extract(&self, records: &[Record]) -> (Vec<String>, Vec<Series>) {
        let categories = records
            .iter()
            .enumerate()
            .map(|(i, r)| {
                r.label(self.label_keys).unwrap_or_else(|| {
                    tracing::warn!(row = i, "Series row has no label");
                    format!("#{}", i + 1)
                })
            })
            .collect();

        let series = self
            .discover(records)
            .into_iter()
            .map(|name| {
                let values = records
                    .iter()
                    .map(|r| r.number(&name).unwrap_or(0.0))
                    .collect();
                Series { name, values }
            })
            .collect();

        (categories, series)
    }
}
