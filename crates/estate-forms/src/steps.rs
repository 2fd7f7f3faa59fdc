// File: src/steps.rs
// Purpose: Multi-step form position and visited-page tracking

use std::collections::BTreeSet;

use crate::engine::FormValidator;
use crate::error::StepError;
use crate::value::Record;

/// One page of a multi-step form and the fields shown on it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub name: String,
    pub fields: Vec<String>,
}

impl Step {
    pub fn new<I, S>(name: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }
}

/// Tracks where the user is in a multi-step form
///
/// The first step counts as visited from the start.
#[derive(Debug, Clone)]
pub struct StepTracker {
    steps: Vec<Step>,
    current: usize,
    visited: BTreeSet<usize>,
}

impl StepTracker {
    pub fn new(steps: Vec<Step>) -> Result<Self, StepError> {
        if steps.is_empty() {
            return Err(StepError::Empty);
        }
        Ok(Self {
            steps,
            current: 0,
            visited: BTreeSet::from([0]),
        })
    }

    pub fn current(&self) -> &Step {
        &self.steps[self.current]
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 == self.steps.len()
    }

    pub fn visited(&self, index: usize) -> bool {
        self.visited.contains(&index)
    }

    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// Move forward one step; no-op on the last step
    pub fn next(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.land(self.current + 1);
        true
    }

    /// Move back one step; no-op on the first step
    pub fn back(&mut self) -> bool {
        if self.is_first() {
            return false;
        }
        self.land(self.current - 1);
        true
    }

    pub fn go_to(&mut self, index: usize) -> Result<(), StepError> {
        if index >= self.steps.len() {
            return Err(StepError::OutOfRange {
                index,
                len: self.steps.len(),
            });
        }
        self.land(index);
        Ok(())
    }

    /// Validate the current step's fields and move forward when they pass
    ///
    /// Returns whether the current step was valid. On the last step a valid
    /// result leaves the position unchanged.
    pub fn advance(&mut self, validator: &mut FormValidator, record: &Record) -> bool {
        let step = &self.steps[self.current];
        let valid = validator.validate_fields(step.fields.iter().map(String::as_str), record);
        if valid {
            self.next();
        } else {
            tracing::debug!(step = %step.name, "step has invalid fields");
        }
        valid
    }

    fn land(&mut self, index: usize) {
        self.current = index;
        self.visited.insert(index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker() -> StepTracker {
        StepTracker::new(vec![
            Step::new("contact", ["name", "phone"]),
            Step::new("property", ["rooms"]),
            Step::new("confirm", Vec::<String>::new()),
        ])
        .unwrap()
    }

    #[test]
    fn test_empty_steps_rejected() {
        assert_eq!(StepTracker::new(vec![]).unwrap_err(), StepError::Empty);
    }

    #[test]
    fn test_steps_keep_their_fields() {
        let steps = tracker();
        assert_eq!(steps.len(), 3);
        let names: Vec<&str> = steps.steps().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["contact", "property", "confirm"]);
        assert_eq!(steps.steps()[0].fields, vec!["name", "phone"]);
        assert!(steps.steps()[2].fields.is_empty());
    }

    #[test]
    fn test_navigation_bounds() {
        let mut steps = tracker();
        assert!(steps.is_first());
        assert!(!steps.back());
        assert_eq!(steps.current_index(), 0);

        assert!(steps.next());
        assert!(steps.next());
        assert!(steps.is_last());
        assert!(!steps.next());
        assert_eq!(steps.current().name, "confirm");

        assert!(steps.back());
        assert_eq!(steps.current().name, "property");
    }

    #[test]
    fn test_go_to_tracks_visits() {
        let mut steps = tracker();
        assert_eq!(steps.visited_count(), 1);

        steps.go_to(2).unwrap();
        assert!(steps.visited(2));
        assert!(!steps.visited(1));
        assert_eq!(steps.visited_count(), 2);

        assert_eq!(
            steps.go_to(3).unwrap_err(),
            StepError::OutOfRange { index: 3, len: 3 }
        );
        assert_eq!(steps.current_index(), 2);
    }
}
