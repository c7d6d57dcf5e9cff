//! Three-way quick sort with sub-array snapshots
//!
//! Partitioning is by value into `less`, `equal` and `greater` groups built as
//! fresh vectors, not by swapping inside the shared array. The intermediate steps
//! therefore show the sub-array being handled and vary in length:
//!
//! - every base case (length 0 or 1) emits `(sub_array, None, None)`
//! - every pivot group emits `(equal_group, None, None)`
//!
//! Base cases and pivot groups come out in sorted order, so their concatenation is
//! the sorted array. Once the recursion is exhausted that result is written back
//! into the caller's array and one final full-length step is emitted.

use crate::snapshot::Step;
use std::iter::FusedIterator;

#[derive(Debug)]
enum Frame {
    Partition(Vec<i64>),
    Emit(Vec<i64>),
}

#[derive(Debug)]
pub struct QuickSort<'a> {
    array: &'a mut [i64],
    frames: Vec<Frame>,
    sorted: Vec<i64>,
    finished: bool,
}

pub fn quick_sort(array: &mut [i64]) -> QuickSort<'_> {
    // A trivial input is its own base case and final state in one step
    let frames = if array.len() <= 1 {
        Vec::new()
    } else {
        vec![Frame::Partition(array.to_vec())]
    };
    QuickSort {
        sorted: Vec::with_capacity(array.len()),
        array,
        frames,
        finished: false,
    }
}

impl Iterator for QuickSort<'_> {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        if self.finished {
            return None;
        }

        while let Some(frame) = self.frames.pop() {
            match frame {
                Frame::Partition(sub) if sub.len() <= 1 => {
                    self.sorted.extend_from_slice(&sub);
                    return Some(Step::new(sub, None, None));
                }
                Frame::Partition(sub) => {
                    let pivot = sub[sub.len() / 2];
                    let less = sub.iter().copied().filter(|&x| x < pivot).collect();
                    let equal = sub.iter().copied().filter(|&x| x == pivot).collect();
                    let greater = sub.iter().copied().filter(|&x| x > pivot).collect();
                    self.frames.push(Frame::Partition(greater));
                    self.frames.push(Frame::Emit(equal));
                    self.frames.push(Frame::Partition(less));
                }
                Frame::Emit(group) => {
                    self.sorted.extend_from_slice(&group);
                    return Some(Step::new(group, None, None));
                }
            }
        }

        self.finished = true;
        if self.sorted.len() == self.array.len() {
            self.array.copy_from_slice(&self.sorted);
        }
        Some(Step::capture_plain(self.array))
    }
}

impl FusedIterator for QuickSort<'_> {}
