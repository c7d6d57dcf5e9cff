//! Value-indexed sorts: counting, radix and bucket
//!
//! All three bucket elements by value, so they only accept non-empty arrays of
//! non-negative integers. Preconditions are checked when the iterator is built;
//! on failure nothing has been written to the array.

use super::errors::{InvalidInputReason, SortError};
use crate::snapshot::Step;
use std::iter::FusedIterator;

/// Bucket sort needs at least this many elements for one bucket
pub const MIN_BUCKET_INPUT: usize = 5;

/// Elements per bucket; the bucket count is `len / BUCKET_WIDTH`
const BUCKET_WIDTH: usize = 5;

const RADIX: usize = 10;

/// Largest value counting sort accepts; its frequency table has `max + 1` slots
pub const MAX_COUNTING_VALUE: i64 = 1 << 20;

/// Check the shared precondition and return the maximum value
fn require_non_negative(algorithm: &'static str, array: &[i64]) -> Result<i64, SortError> {
    if let Some((index, &value)) = array.iter().enumerate().find(|(_, &v)| v < 0) {
        return Err(SortError::invalid(
            algorithm,
            InvalidInputReason::NegativeValue { index, value },
        ));
    }
    array
        .iter()
        .copied()
        .max()
        .ok_or_else(|| SortError::invalid(algorithm, InvalidInputReason::Empty))
}

/// Counting sort
///
/// Builds a frequency table of size `max + 1` (at most
/// [`MAX_COUNTING_VALUE`] + 1), then rewrites the array in
/// ascending value order. Emits `(snapshot, write_index, None)` per element.
#[derive(Debug)]
pub struct CountingSort<'a> {
    array: &'a mut [i64],
    counts: Vec<usize>,
    value: usize,
    write: usize,
}

pub fn counting_sort(array: &mut [i64]) -> Result<CountingSort<'_>, SortError> {
    let max = require_non_negative("counting_sort", array)?;
    if max > MAX_COUNTING_VALUE {
        return Err(SortError::invalid(
            "counting_sort",
            InvalidInputReason::ValueTooLarge {
                value: max,
                limit: MAX_COUNTING_VALUE,
            },
        ));
    }
    let mut counts = vec![0usize; max as usize + 1];
    for &v in array.iter() {
        counts[v as usize] += 1;
    }
    Ok(CountingSort {
        array,
        counts,
        value: 0,
        write: 0,
    })
}

impl CountingSort<'_> {
    /// Frequency of each value, indexed by value
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }
}

impl Iterator for CountingSort<'_> {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        while self.value < self.counts.len() {
            if self.counts[self.value] > 0 {
                self.counts[self.value] -= 1;
                let index = self.write;
                self.array[index] = self.value as i64;
                self.write += 1;
                return Some(Step::capture_write(self.array, index));
            }
            self.value += 1;
        }
        None
    }
}

impl FusedIterator for CountingSort<'_> {}

/// LSD radix sort in base 10
///
/// Each digit pass is a stable counting sort on the digit at place value `exp`
/// into a scratch buffer, which is then copied back element by element. Emits
/// `(snapshot, write_index, None)` per copied element. Passes stop once
/// `max / exp == 0`, so an all-zero array emits nothing.
#[derive(Debug)]
pub struct RadixSort<'a> {
    array: &'a mut [i64],
    max: i64,
    /// Place value of the next pass; `None` once all digits are done
    exp: Option<i64>,
    /// Output of the pass being copied back
    output: Option<Vec<i64>>,
    write: usize,
}

pub fn radix_sort(array: &mut [i64]) -> Result<RadixSort<'_>, SortError> {
    let max = require_non_negative("radix_sort", array)?;
    Ok(RadixSort {
        array,
        max,
        exp: Some(1),
        output: None,
        write: 0,
    })
}

impl RadixSort<'_> {
    /// Stable counting sort of the current array keyed on one digit
    fn digit_pass(&self, exp: i64) -> Vec<i64> {
        let digit = |v: i64| ((v / exp) % RADIX as i64) as usize;

        let mut count = [0usize; RADIX];
        for &v in self.array.iter() {
            count[digit(v)] += 1;
        }
        for d in 1..RADIX {
            count[d] += count[d - 1];
        }

        let mut output = vec![0; self.array.len()];
        for &v in self.array.iter().rev() {
            let d = digit(v);
            count[d] -= 1;
            output[count[d]] = v;
        }
        output
    }
}

impl Iterator for RadixSort<'_> {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        loop {
            if let Some(output) = &self.output {
                if self.write < output.len() {
                    let index = self.write;
                    self.array[index] = output[index];
                    self.write += 1;
                    return Some(Step::capture_write(self.array, index));
                }
                self.output = None;
                self.exp = self.exp.and_then(|exp| exp.checked_mul(RADIX as i64));
            }

            let exp = self.exp?;
            if self.max / exp == 0 {
                self.exp = None;
                return None;
            }
            self.output = Some(self.digit_pass(exp));
            self.write = 0;
        }
    }
}

impl FusedIterator for RadixSort<'_> {}

/// Bucket sort
///
/// Distributes values into `len / 5` buckets by linear scaling over
/// `0..=max`, sorts each bucket and concatenates. The whole operation is a
/// single step `(sorted, None, None)`; the result is also written back into the
/// array.
#[derive(Debug)]
pub struct BucketSort<'a> {
    array: &'a mut [i64],
    max: i64,
    done: bool,
}

pub fn bucket_sort(array: &mut [i64]) -> Result<BucketSort<'_>, SortError> {
    let max = require_non_negative("bucket_sort", array)?;
    if array.len() < MIN_BUCKET_INPUT {
        return Err(SortError::invalid(
            "bucket_sort",
            InvalidInputReason::TooFewElements {
                len: array.len(),
                min: MIN_BUCKET_INPUT,
            },
        ));
    }
    Ok(BucketSort {
        array,
        max,
        done: false,
    })
}

impl BucketSort<'_> {
    fn bucket_index(&self, value: i64, bucket_count: usize) -> usize {
        // u128 keeps value * bucket_count from overflowing near i64::MAX
        let scaled = value as u128 * bucket_count as u128 / (self.max as u128 + 1);
        (scaled as usize).min(bucket_count - 1)
    }
}

impl Iterator for BucketSort<'_> {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        if self.done {
            return None;
        }
        self.done = true;

        let bucket_count = self.array.len() / BUCKET_WIDTH;
        let mut buckets: Vec<Vec<i64>> = vec![Vec::new(); bucket_count];
        for &v in self.array.iter() {
            buckets[self.bucket_index(v, bucket_count)].push(v);
        }

        let mut write = 0;
        for mut bucket in buckets {
            bucket.sort_unstable();
            self.array[write..write + bucket.len()].copy_from_slice(&bucket);
            write += bucket.len();
        }

        Some(Step::capture_plain(self.array))
    }
}

impl FusedIterator for BucketSort<'_> {}
