//! In-place heap sort
//!
//! `heapify` is recursive in the textbook form; here the sinking value is tracked
//! by a `Sift` cursor so one swap can be yielded at a time. Comparisons that do not
//! lead to a swap are silent.

use crate::snapshot::Step;
use std::iter::FusedIterator;

/// A value being sunk through a heap of `size` elements, currently at `root`
#[derive(Debug, Clone, Copy)]
struct Sift {
    size: usize,
    root: usize,
}

#[derive(Debug, Clone, Copy)]
enum Phase {
    /// Bottom-up heap construction; `remaining` roots left to sift, highest first
    Build { remaining: usize },
    /// Root extraction; `end` is the last index of the unsorted region
    Extract { end: usize },
    Done,
}

/// Heap sort
///
/// Emits `(snapshot, parent, larger_child)` for every sift swap and
/// `(snapshot, 0, end)` whenever the root is moved behind the heap.
#[derive(Debug)]
pub struct HeapSort<'a> {
    array: &'a mut [i64],
    phase: Phase,
    sift: Option<Sift>,
}

pub fn heap_sort(array: &mut [i64]) -> HeapSort<'_> {
    let remaining = array.len() / 2;
    HeapSort {
        array,
        phase: Phase::Build { remaining },
        sift: None,
    }
}

impl HeapSort<'_> {
    /// Index of the larger of `root` and its children within the heap
    fn largest(&self, Sift { size, root }: Sift) -> usize {
        let mut largest = root;
        let left = 2 * root + 1;
        let right = 2 * root + 2;
        if left < size && self.array[left] > self.array[largest] {
            largest = left;
        }
        if right < size && self.array[right] > self.array[largest] {
            largest = right;
        }
        largest
    }
}

impl Iterator for HeapSort<'_> {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        loop {
            if let Some(sift) = self.sift {
                let largest = self.largest(sift);
                if largest != sift.root {
                    self.array.swap(sift.root, largest);
                    self.sift = Some(Sift {
                        size: sift.size,
                        root: largest,
                    });
                    return Some(Step::capture(self.array, sift.root, largest));
                }
                self.sift = None;
            }

            match self.phase {
                Phase::Build { remaining } if remaining > 0 => {
                    self.phase = Phase::Build {
                        remaining: remaining - 1,
                    };
                    self.sift = Some(Sift {
                        size: self.array.len(),
                        root: remaining - 1,
                    });
                }
                Phase::Build { .. } => {
                    self.phase = match self.array.len() {
                        0 | 1 => Phase::Done,
                        n => Phase::Extract { end: n - 1 },
                    };
                }
                Phase::Extract { end } => {
                    self.array.swap(0, end);
                    self.phase = if end > 1 {
                        Phase::Extract { end: end - 1 }
                    } else {
                        Phase::Done
                    };
                    self.sift = Some(Sift { size: end, root: 0 });
                    return Some(Step::capture(self.array, 0, end));
                }
                Phase::Done => return None,
            }
        }
    }
}

impl FusedIterator for HeapSort<'_> {}
