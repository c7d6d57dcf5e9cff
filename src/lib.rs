//! # Introduction
//!
//! Sortty animates classic sorting algorithms as a bar chart in the terminal.
//! Each algorithm is rewritten as a lazy [`Iterator`] of
//! [`snapshot::Step`]s: a copy of the array plus up to two highlighted
//! indices, produced one at a time while the array is sorted in place. The
//! steps are then played back frame by frame through a terminal UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Config → Input array → Algorithm → Steps → StepHistory → TUI
//! ```
//!
//! 1. [`config`] — command-line options and random input generation.
//! 2. [`algorithms`] — the step engine: eight sorting algorithms plus bucket
//!    sort, selected by [`algorithms::Algorithm`].
//! 3. [`snapshot`] — the [`snapshot::Step`] record and a memory-bounded
//!    [`snapshot::StepHistory`] the UI plays back.
//! 4. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Example
//!
//! ```
//! use sortty::algorithms::Algorithm;
//!
//! let mut array = vec![3, 1, 2];
//! let steps: Vec<_> = Algorithm::Bubble.sort(&mut array).unwrap().collect();
//! assert_eq!(steps.len(), 3);
//! assert_eq!(steps[0].snapshot, vec![1, 3, 2]);
//! assert_eq!(array, vec![1, 2, 3]);
//! ```

pub mod algorithms;
pub mod config;
pub mod snapshot;
pub mod ui;
