//! Merge sort over index ranges of one shared buffer
//!
//! The recursion is flattened into an explicit frame stack. A `Split` frame
//! pushes its two halves and a pending `Merge`; a `Merge` frame copies both halves
//! out and then writes them back one element per step. Because every write lands
//! in the caller's array, each snapshot is full length and shows global progress.

use crate::snapshot::Step;
use std::iter::FusedIterator;
use std::ops::Range;

#[derive(Debug, Clone)]
enum Frame {
    Split(Range<usize>),
    Merge { lo: usize, mid: usize, hi: usize },
}

/// A merge in progress: both halves copied out, `write` walks the range
#[derive(Debug)]
struct MergeCursor {
    left: Vec<i64>,
    right: Vec<i64>,
    i: usize,
    j: usize,
    write: usize,
}

impl MergeCursor {
    fn new(array: &[i64], lo: usize, mid: usize, hi: usize) -> Self {
        MergeCursor {
            left: array[lo..mid].to_vec(),
            right: array[mid..hi].to_vec(),
            i: 0,
            j: 0,
            write: lo,
        }
    }

    /// Next value to write, taking from the left half on ties
    fn take(&mut self) -> Option<i64> {
        let value = match (self.left.get(self.i), self.right.get(self.j)) {
            (Some(&l), Some(&r)) if l <= r => {
                self.i += 1;
                l
            }
            (_, Some(&r)) => {
                self.j += 1;
                r
            }
            (Some(&l), None) => {
                self.i += 1;
                l
            }
            (None, None) => return None,
        };
        Some(value)
    }
}

/// Merge sort, one step per element written during a merge
///
/// Emits `(snapshot, write_index, None)`. The divide phase is silent.
#[derive(Debug)]
pub struct MergeSort<'a> {
    array: &'a mut [i64],
    frames: Vec<Frame>,
    cursor: Option<MergeCursor>,
}

pub fn merge_sort(array: &mut [i64]) -> MergeSort<'_> {
    let frames = vec![Frame::Split(0..array.len())];
    MergeSort {
        array,
        frames,
        cursor: None,
    }
}

impl Iterator for MergeSort<'_> {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        loop {
            if let Some(cursor) = self.cursor.as_mut() {
                if let Some(value) = cursor.take() {
                    let index = cursor.write;
                    self.array[index] = value;
                    cursor.write += 1;
                    return Some(Step::capture_write(self.array, index));
                }
                self.cursor = None;
            }

            match self.frames.pop()? {
                Frame::Split(range) => {
                    if range.len() > 1 {
                        let mid = range.start + range.len() / 2;
                        // Pushed in reverse so the left half is handled first
                        self.frames.push(Frame::Merge {
                            lo: range.start,
                            mid,
                            hi: range.end,
                        });
                        self.frames.push(Frame::Split(mid..range.end));
                        self.frames.push(Frame::Split(range.start..mid));
                    }
                }
                Frame::Merge { lo, mid, hi } => {
                    self.cursor = Some(MergeCursor::new(self.array, lo, mid, hi));
                }
            }
        }
    }
}

impl FusedIterator for MergeSort<'_> {}
