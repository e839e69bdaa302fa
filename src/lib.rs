//! # Introduction
//!
//! Sortty animates sorting algorithms in the terminal. A list of random values
//! is drawn as vertical bars, and a chosen algorithm rearranges them one
//! comparison or swap per frame, highlighting the bars each step touches.
//!
//! ## Pipeline
//!
//! ```text
//! Config → Dataset → Emitter (bubble | quick) → Driver → TUI
//! ```
//!
//! 1. [`dataset`] — the values being sorted and their fixed rendering bounds.
//! 2. [`sorting`] — algorithms written as resumable state machines; each
//!    [`sorting::Emitter::resume`] stops at the next comparison or swap.
//! 3. [`driver`] — the `Idle`/`Running` state machine that resumes the active
//!    emitter at most once per frame, plus the fixed-rate [`driver::FrameClock`].
//! 4. [`ui`] — ratatui front end: buttons, bars, status bar, mouse and keys.
//! 5. [`config`], [`cli`], [`logging`], [`errors`] — startup plumbing.
//!
//! ## Running a sort without a terminal
//!
//! ```
//! use sortty::dataset::Dataset;
//! use sortty::sorting::{run_to_completion, Algorithm};
//!
//! let mut data = Dataset::new(vec![5, 3, 8, 1]);
//! let mut emitter = Algorithm::Bubble.emitter(data.len());
//! run_to_completion(emitter.as_mut(), &mut data);
//! assert_eq!(data.values(), &[1, 3, 5, 8]);
//! ```

pub mod cli;
pub mod config;
pub mod dataset;
pub mod driver;
pub mod errors;
pub mod logging;
pub mod sorting;
pub mod ui;
