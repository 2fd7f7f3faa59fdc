// File: src/dirty.rs
// Purpose: Unsaved-changes detection against a saved baseline

use crate::value::{FieldValue, Record};

/// Compares the record being edited with the last loaded or saved one
#[derive(Debug, Clone, Default)]
pub struct ChangeTracker {
    baseline: Record,
}

impl ChangeTracker {
    pub fn new(baseline: Record) -> Self {
        Self { baseline }
    }

    pub fn baseline(&self) -> &Record {
        &self.baseline
    }

    /// Fields whose value differs from the baseline, in name order
    ///
    /// A key present on only one side compares against `Empty`.
    pub fn changed_fields(&self, current: &Record) -> Vec<String> {
        let empty = FieldValue::Empty;
        let mut changed: Vec<String> = self
            .baseline
            .keys()
            .chain(current.keys().filter(|k| !self.baseline.contains_key(*k)))
            .filter(|k| {
                self.baseline.get(*k).unwrap_or(&empty) != current.get(*k).unwrap_or(&empty)
            })
            .cloned()
            .collect();
        changed.sort();
        changed
    }

    /// True when leaving now would lose edits
    pub fn is_dirty(&self, current: &Record) -> bool {
        !self.changed_fields(current).is_empty()
    }

    /// Adopt `baseline` after a successful save
    pub fn reset(&mut self, baseline: Record) {
        self.baseline = baseline;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, FieldValue)]) -> Record {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_clean_against_own_baseline() {
        let saved = record(&[("price", 120_000.into()), ("city", "Dushanbe".into())]);
        let tracker = ChangeTracker::new(saved.clone());
        assert_eq!(tracker.baseline(), &saved);
        assert!(!tracker.is_dirty(&saved));
    }

    #[test]
    fn test_reports_edited_and_added_fields() {
        let tracker = ChangeTracker::new(record(&[
            ("price", 120_000.into()),
            ("city", "Dushanbe".into()),
        ]));
        let current = record(&[
            ("price", 125_000.into()),
            ("city", "Dushanbe".into()),
            ("rooms", 3.into()),
        ]);
        assert_eq!(tracker.changed_fields(&current), vec!["price", "rooms"]);
    }

    #[test]
    fn test_missing_key_equals_empty() {
        let tracker = ChangeTracker::new(record(&[("note", FieldValue::Empty)]));
        assert!(!tracker.is_dirty(&Record::new()));
    }

    #[test]
    fn test_reset_adopts_new_baseline() {
        let mut tracker = ChangeTracker::default();
        let current = record(&[("name", "Ann".into())]);
        assert!(tracker.is_dirty(&current));
        tracker.reset(current.clone());
        assert_eq!(tracker.baseline(), &current);
        assert!(!tracker.is_dirty(&current));
    }
}
