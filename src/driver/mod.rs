//! Animation driver
//!
//! The driver is a two-state machine over the lifetime of the program:
//!
//! ```text
//! Idle ──select(algorithm)──▶ Running(emitter)
//!  ▲                              │
//!  └────────emitter finished──────┘
//! ```
//!
//! Each call to [`Driver::tick`] resumes the active emitter at most once and
//! returns the [`Frame`] the renderer should draw. Selecting an algorithm
//! while another one runs drops the old emitter outright and starts over on
//! the current, partially sorted, dataset.

pub mod clock;

pub use clock::FrameClock;

use crate::dataset::Dataset;
use crate::sorting::{Algorithm, Emitter, Highlight, Resume, Step};
use std::time::Duration;
use tracing::{info, trace};

/// Whether a sort is in progress
pub enum DriverState {
    Idle,
    Running(Box<dyn Emitter>),
}

impl DriverState {
    pub fn is_running(&self) -> bool {
        matches!(self, DriverState::Running(_))
    }
}

/// Counters for the current or most recent run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub comparisons: usize,
    pub swaps: usize,
    pub steps: usize,
    pub ticks: usize,
    pub completed: bool,
}

impl RunStats {
    fn record(&mut self, step: &Step) {
        self.steps += 1;
        match step {
            Step::Compare(..) => self.comparisons += 1,
            Step::Swap(..) => self.swaps += 1,
            Step::RangeDone => {}
        }
    }
}

/// What to draw after one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    /// Step performed during this tick, if a sort was running
    pub step: Option<Step>,
    pub highlight: Highlight,
    /// Artificial pause to apply before drawing
    pub delay: Duration,
}

impl Frame {
    fn idle() -> Self {
        Frame {
            step: None,
            highlight: Highlight::none(),
            delay: Duration::ZERO,
        }
    }
}

/// Owns the dataset and steps the active emitter once per frame
pub struct Driver {
    dataset: Dataset,
    state: DriverState,
    selected: Option<Algorithm>,
    stats: RunStats,
    step_delay: Duration,
}

impl Driver {
    pub fn new(dataset: Dataset, step_delay: Duration) -> Self {
        Driver {
            dataset,
            state: DriverState::Idle,
            selected: None,
            stats: RunStats::default(),
            step_delay,
        }
    }

    /// Start `algorithm` on the current dataset, discarding any running sort
    pub fn select(&mut self, algorithm: Algorithm) {
        if let DriverState::Running(previous) = &self.state {
            info!(
                cancelled = %previous.algorithm(),
                steps = self.stats.steps,
                "discarding in-progress sort"
            );
        }
        info!(%algorithm, len = self.dataset.len(), "starting sort");
        self.selected = Some(algorithm);
        self.stats = RunStats::default();
        self.state = DriverState::Running(algorithm.emitter(self.dataset.len()));
    }

    /// Replace the dataset, dropping any running sort. The selection is kept.
    pub fn reset(&mut self, dataset: Dataset) {
        info!(
            len = dataset.len(),
            min = dataset.min_val(),
            max = dataset.max_val(),
            "loaded new dataset"
        );
        self.dataset = dataset;
        self.state = DriverState::Idle;
        self.stats = RunStats::default();
    }

    /// Advance one frame
    pub fn tick(&mut self) -> Frame {
        let DriverState::Running(emitter) = &mut self.state else {
            return Frame::idle();
        };

        self.stats.ticks += 1;
        match emitter.resume(&mut self.dataset) {
            Resume::Ongoing(step) => {
                trace!(?step, "step");
                self.stats.record(&step);
                Frame {
                    step: Some(step),
                    highlight: step.highlight(),
                    delay: if step.is_comparison() {
                        self.step_delay
                    } else {
                        Duration::ZERO
                    },
                }
            }
            Resume::Finished => {
                info!(
                    algorithm = %emitter.algorithm(),
                    comparisons = self.stats.comparisons,
                    swaps = self.stats.swaps,
                    ticks = self.stats.ticks,
                    "sort finished"
                );
                self.stats.completed = true;
                self.state = DriverState::Idle;
                Frame::idle()
            }
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn state(&self) -> &DriverState {
        &self.state
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    /// Last selected algorithm, highlighted as the active button
    pub fn selected(&self) -> Option<Algorithm> {
        self.selected
    }

    pub fn stats(&self) -> RunStats {
        self.stats
    }

    pub fn step_delay(&self) -> Duration {
        self.step_delay
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn driver(values: Vec<i32>) -> Driver {
        Driver::new(Dataset::new(values), Duration::from_millis(10))
    }

    fn run_out(driver: &mut Driver) -> usize {
        let mut ticks = 0;
        while driver.is_running() {
            driver.tick();
            ticks += 1;
        }
        ticks
    }

    #[test]
    fn test_idle_tick_has_no_highlight() {
        let mut d = driver(vec![3, 1, 2]);
        let frame = d.tick();
        assert_eq!(frame.step, None);
        assert!(frame.highlight.is_empty());
        assert_eq!(d.dataset().values(), &[3, 1, 2]);
    }

    #[test]
    fn test_select_then_run_to_idle() {
        let mut d = driver(vec![3, 1, 2]);
        d.select(Algorithm::Bubble);
        assert!(d.is_running());
        run_out(&mut d);
        assert!(!d.is_running());
        assert!(d.dataset().is_sorted());
        assert_eq!(d.selected(), Some(Algorithm::Bubble));
        assert!(d.stats().completed);
        assert_eq!(d.stats().comparisons, 3);
    }

    #[test]
    fn test_tick_resumes_exactly_once() {
        let mut d = driver(vec![2, 1]);
        d.select(Algorithm::Bubble);
        let first = d.tick();
        assert_eq!(first.step, Some(Step::Compare(0, 1)));
        assert_eq!(d.dataset().values(), &[2, 1]);
        let second = d.tick();
        assert_eq!(second.step, Some(Step::Swap(0, 1)));
        assert_eq!(d.dataset().values(), &[1, 2]);
        assert!(second.highlight.contains(0) && second.highlight.contains(1));
    }

    #[test]
    fn test_delay_only_on_comparisons() {
        let mut d = driver(vec![2, 1]);
        d.select(Algorithm::Bubble);
        assert_eq!(d.tick().delay, Duration::from_millis(10));
        assert_eq!(d.tick().delay, Duration::ZERO);
    }

    #[test]
    fn test_reselect_discards_progress_but_keeps_data() {
        let mut d = driver(vec![5, 4, 3, 2, 1]);
        d.select(Algorithm::Bubble);
        for _ in 0..6 {
            d.tick();
        }
        let partial = d.dataset().values().to_vec();
        d.select(Algorithm::Quick);
        assert_eq!(d.dataset().values(), partial.as_slice());
        assert_eq!(d.stats(), RunStats::default());
        run_out(&mut d);
        assert_eq!(d.dataset().values(), &[1, 2, 3, 4, 5]);
        assert_eq!(d.selected(), Some(Algorithm::Quick));
    }

    #[test]
    fn test_reset_returns_to_idle() {
        let mut d = driver(vec![2, 1]);
        d.select(Algorithm::Quick);
        d.tick();
        d.reset(Dataset::new(vec![9, 8, 7]));
        assert!(!d.is_running());
        assert_eq!(d.dataset().values(), &[9, 8, 7]);
        assert_eq!(d.selected(), Some(Algorithm::Quick));
    }

    #[test]
    fn test_single_element_finishes_on_first_tick() {
        let mut d = driver(vec![42]);
        d.select(Algorithm::Quick);
        let frame = d.tick();
        assert_eq!(frame.step, None);
        assert!(!d.is_running());
        assert!(d.stats().completed);
    }
}
