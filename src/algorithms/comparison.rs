//! Quadratic comparison sorts: bubble, selection and insertion
//!
//! Each iterator borrows the array mutably and advances the textbook loop nest one
//! yield point at a time. Loop counters live in the struct so `next` resumes
//! exactly where the previous call stopped.

use crate::snapshot::Step;
use std::iter::FusedIterator;

/// Bubble sort, one step per adjacent comparison
///
/// Emits `(snapshot, j, j + 1)` for every inner iteration, swapped or not.
#[derive(Debug)]
pub struct BubbleSort<'a> {
    array: &'a mut [i64],
    pass: usize,
    j: usize,
}

pub fn bubble_sort(array: &mut [i64]) -> BubbleSort<'_> {
    BubbleSort {
        array,
        pass: 0,
        j: 0,
    }
}

impl Iterator for BubbleSort<'_> {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        let n = self.array.len();
        while self.pass < n {
            let unsorted = n - self.pass - 1;
            if self.j < unsorted {
                let j = self.j;
                self.j += 1;
                if self.array[j] > self.array[j + 1] {
                    self.array.swap(j, j + 1);
                }
                return Some(Step::capture(self.array, j, j + 1));
            }
            self.pass += 1;
            self.j = 0;
        }
        None
    }
}

impl FusedIterator for BubbleSort<'_> {}

/// Selection sort, one step per placed position
///
/// Emits `(snapshot, i, min_index)` after the minimum of the suffix is swapped into
/// position `i`. The last position is emitted too, as `(snapshot, n - 1, n - 1)`.
#[derive(Debug)]
pub struct SelectionSort<'a> {
    array: &'a mut [i64],
    i: usize,
}

pub fn selection_sort(array: &mut [i64]) -> SelectionSort<'_> {
    SelectionSort { array, i: 0 }
}

impl Iterator for SelectionSort<'_> {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        let i = self.i;
        if i >= self.array.len() {
            return None;
        }
        self.i += 1;

        let mut min_index = i;
        for j in i + 1..self.array.len() {
            if self.array[j] < self.array[min_index] {
                min_index = j;
            }
        }
        self.array.swap(i, min_index);

        Some(Step::capture(self.array, i, min_index))
    }
}

impl FusedIterator for SelectionSort<'_> {}

/// Insertion sort, one step per inserted key
///
/// Emits `(snapshot, i, insertion_point)` where `insertion_point` is the index the
/// key from position `i` came to rest at.
#[derive(Debug)]
pub struct InsertionSort<'a> {
    array: &'a mut [i64],
    i: usize,
}

pub fn insertion_sort(array: &mut [i64]) -> InsertionSort<'_> {
    InsertionSort { array, i: 1 }
}

impl Iterator for InsertionSort<'_> {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        let i = self.i;
        if i >= self.array.len() {
            return None;
        }
        self.i += 1;

        let key = self.array[i];
        let mut hole = i;
        while hole > 0 && key < self.array[hole - 1] {
            self.array[hole] = self.array[hole - 1];
            hole -= 1;
        }
        self.array[hole] = key;

        Some(Step::capture(self.array, i, hole))
    }
}

impl FusedIterator for InsertionSort<'_> {}
