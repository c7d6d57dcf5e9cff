//! Step-generation engine
//!
//! Every sorting algorithm here is an [`Iterator`] of [`Step`]s that borrows the
//! array mutably and sorts it in place as it is pulled:
//! - [`comparison`]: bubble, selection and insertion sort
//! - [`merge`]: merge sort over index ranges of one buffer
//! - [`quick`]: three-way quick sort with sub-array snapshots
//! - [`heap`]: in-place heap sort
//! - [`distribution`]: counting, radix and bucket sort
//! - [`errors`]: [`SortError`]
//!
//! # Execution Model
//!
//! Nothing runs until the consumer calls `next`. Each call resumes the algorithm
//! where the previous one stopped and runs to the next yield point. Dropping the
//! iterator early is the only cancellation there is; the array then holds
//! whatever partial progress was made. A sequence cannot be restarted; sort a
//! fresh copy of the input instead.
//!
//! # Selecting by name
//!
//! [`Algorithm`] is the closed set of supported algorithms. Names are resolved
//! through a single table in [`Algorithm::from_str`](std::str::FromStr), and
//! [`Algorithm::sort`] is the single dispatch site.

pub mod comparison;
pub mod distribution;
pub mod errors;
pub mod heap;
pub mod merge;
pub mod quick;

pub use comparison::{bubble_sort, insertion_sort, selection_sort};
pub use distribution::{bucket_sort, counting_sort, radix_sort};
pub use errors::{InvalidInputReason, SortError};
pub use heap::heap_sort;
pub use merge::merge_sort;
pub use quick::quick_sort;

use crate::snapshot::Step;
use rustc_hash::FxHashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Lazy step sequence returned by [`Algorithm::sort`]
pub type StepIter<'a> = Box<dyn Iterator<Item = Step> + 'a>;

/// Supported sorting algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bubble,
    Selection,
    Insertion,
    Merge,
    Quick,
    Heap,
    Counting,
    Radix,
    Bucket,
}

impl Algorithm {
    pub const ALL: [Algorithm; 9] = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Merge,
        Algorithm::Quick,
        Algorithm::Heap,
        Algorithm::Counting,
        Algorithm::Radix,
        Algorithm::Bucket,
    ];

    /// Canonical name, as accepted on the command line
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble_sort",
            Algorithm::Selection => "selection_sort",
            Algorithm::Insertion => "insertion_sort",
            Algorithm::Merge => "merge_sort",
            Algorithm::Quick => "quick_sort",
            Algorithm::Heap => "heap_sort",
            Algorithm::Counting => "counting_sort",
            Algorithm::Radix => "radix_sort",
            Algorithm::Bucket => "bucket_sort",
        }
    }

    /// Whether the algorithm only accepts non-negative values
    pub fn requires_non_negative(self) -> bool {
        matches!(
            self,
            Algorithm::Counting | Algorithm::Radix | Algorithm::Bucket
        )
    }

    /// Next algorithm in [`Algorithm::ALL`], wrapping around
    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|&a| a == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    /// Previous algorithm in [`Algorithm::ALL`], wrapping around
    pub fn prev(self) -> Self {
        let index = Self::ALL.iter().position(|&a| a == self).unwrap_or(0);
        Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Start sorting `array` in place, returning the lazy step sequence
    ///
    /// Preconditions are checked here, before any step exists; on error the array
    /// is left untouched.
    pub fn sort(self, array: &mut [i64]) -> Result<StepIter<'_>, SortError> {
        let steps: StepIter<'_> = match self {
            Algorithm::Bubble => Box::new(bubble_sort(array)),
            Algorithm::Selection => Box::new(selection_sort(array)),
            Algorithm::Insertion => Box::new(insertion_sort(array)),
            Algorithm::Merge => Box::new(merge_sort(array)),
            Algorithm::Quick => Box::new(quick_sort(array)),
            Algorithm::Heap => Box::new(heap_sort(array)),
            Algorithm::Counting => Box::new(counting_sort(array)?),
            Algorithm::Radix => Box::new(radix_sort(array)?),
            Algorithm::Bucket => Box::new(bucket_sort(array)?),
        };
        Ok(steps)
    }
}

/// Name table shared by every lookup
fn names() -> &'static FxHashMap<&'static str, Algorithm> {
    static NAMES: OnceLock<FxHashMap<&'static str, Algorithm>> = OnceLock::new();
    NAMES.get_or_init(|| Algorithm::ALL.iter().map(|&a| (a.name(), a)).collect())
}

impl FromStr for Algorithm {
    type Err = SortError;

    /// Accepts the canonical names; `-` may stand in for `_`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace('-', "_");
        names()
            .get(normalized.as_str())
            .copied()
            .ok_or_else(|| SortError::UnknownAlgorithm {
                name: s.to_string(),
            })
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Look up `name` and start sorting `array` with it
///
/// Unknown names fail with [`SortError::UnknownAlgorithm`] before the array is
/// touched.
pub fn sort<'a>(name: &str, array: &'a mut [i64]) -> Result<StepIter<'a>, SortError> {
    name.parse::<Algorithm>()?.sort(array)
}
