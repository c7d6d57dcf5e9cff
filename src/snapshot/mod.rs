// Step records and the materialized step history

use crate::algorithms::errors::SortError;
use std::fmt;

/// One observable moment of sort progress
///
/// `snapshot` is an owned copy of the array at the instant the step was produced,
/// so later mutation of the sorted array never shows through it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub snapshot: Vec<i64>,
    pub primary: Option<usize>,
    pub secondary: Option<usize>,
}

impl Step {
    /// Index value used when a role has no index
    pub const SENTINEL: isize = -1;

    pub fn new(snapshot: Vec<i64>, primary: Option<usize>, secondary: Option<usize>) -> Self {
        Step {
            snapshot,
            primary,
            secondary,
        }
    }

    /// Copy `array` and highlight the given pair
    pub fn capture(array: &[i64], primary: usize, secondary: usize) -> Self {
        Step::new(array.to_vec(), Some(primary), Some(secondary))
    }

    /// Copy `array` and highlight a single index
    pub fn capture_write(array: &[i64], index: usize) -> Self {
        Step::new(array.to_vec(), Some(index), None)
    }

    /// Copy `array` with no highlight
    pub fn capture_plain(array: &[i64]) -> Self {
        Step::new(array.to_vec(), None, None)
    }

    pub fn primary_or_sentinel(&self) -> isize {
        self.primary.map_or(Self::SENTINEL, |i| i as isize)
    }

    pub fn secondary_or_sentinel(&self) -> isize {
        self.secondary.map_or(Self::SENTINEL, |i| i as isize)
    }

    /// Estimate the memory usage of this step in bytes
    pub fn estimated_size(&self) -> usize {
        std::mem::size_of::<Step>() + self.snapshot.len() * std::mem::size_of::<i64>()
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} {} {}",
            self.snapshot,
            self.primary_or_sentinel(),
            self.secondary_or_sentinel()
        )
    }
}

/// Materialized step sequence with a memory budget
#[derive(Debug)]
pub struct StepHistory {
    steps: Vec<Step>,
    max_memory: usize,
    current_memory: usize,
}

impl StepHistory {
    pub fn new(max_memory: usize) -> Self {
        StepHistory {
            steps: Vec::new(),
            max_memory,
            current_memory: 0,
        }
    }

    /// Drain a step iterator into a new history
    pub fn collect<I>(steps: I, max_memory: usize) -> Result<Self, SortError>
    where
        I: IntoIterator<Item = Step>,
    {
        let mut history = StepHistory::new(max_memory);
        for step in steps {
            history.push(step)?;
        }
        Ok(history)
    }

    /// Add a step to history
    pub fn push(&mut self, step: Step) -> Result<(), SortError> {
        let step_size = step.estimated_size();

        if self.current_memory + step_size > self.max_memory {
            return Err(SortError::SnapshotLimitExceeded {
                current: self.current_memory + step_size,
                limit: self.max_memory,
            });
        }

        self.current_memory += step_size;
        self.steps.push(step);
        Ok(())
    }

    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    pub fn last(&self) -> Option<&Step> {
        self.steps.last()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Get current memory usage
    pub fn memory_usage(&self) -> usize {
        self.current_memory
    }

    /// Get max memory limit
    pub fn memory_limit(&self) -> usize {
        self.max_memory
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_display_uses_sentinel() {
        let step = Step::capture_write(&[1, 3, 2], 0);
        assert_eq!(step.to_string(), "[1, 3, 2] 0 -1");
        assert_eq!(Step::capture_plain(&[]).to_string(), "[] -1 -1");
    }

    #[test]
    fn test_snapshot_is_a_copy() {
        let mut array = vec![3, 1, 2];
        let step = Step::capture(&array, 0, 1);
        array[0] = 99;
        assert_eq!(step.snapshot, vec![3, 1, 2]);
    }

    #[test]
    fn test_history_limit() {
        let step = Step::capture_plain(&[1, 2, 3, 4]);
        let size = step.estimated_size();
        let mut history = StepHistory::new(size * 2);
        assert!(history.is_empty());
        assert!(history.last().is_none());
        assert!(history.push(step.clone()).is_ok());
        assert!(history.push(step.clone()).is_ok());
        let err = history.push(step).unwrap_err();
        assert_eq!(
            err,
            SortError::SnapshotLimitExceeded {
                current: size * 3,
                limit: size * 2
            }
        );
        assert_eq!(history.len(), 2);
        assert!(!history.is_empty());
        assert_eq!(history.last().map(|s| s.snapshot.clone()), Some(vec![1, 2, 3, 4]));
        assert_eq!(history.memory_usage(), size * 2);
    }
}
