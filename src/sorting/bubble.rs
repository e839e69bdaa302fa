//! Bubble sort as a resumable state machine

use super::{Algorithm, Emitter, Resume, Step};
use crate::dataset::Dataset;
use tracing::warn;

/// Where the next resume picks up inside the current pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Report the next adjacent pair
    Compare,
    /// The pair at `j` was reported; decide whether to swap
    Decide,
    Done,
}

/// Bubble sort over `n` elements.
///
/// Runs the full `n - 1` passes with no early exit. Every adjacent comparison
/// suspends once; an out-of-order pair swaps and suspends a second time with
/// the same indices.
#[derive(Debug, Clone)]
pub struct BubbleSort {
    len: usize,
    pass: usize,
    j: usize,
    phase: Phase,
    reported_finish: bool,
}

impl BubbleSort {
    pub fn new(len: usize) -> Self {
        BubbleSort {
            len,
            pass: 0,
            j: 0,
            phase: if len < 2 { Phase::Done } else { Phase::Compare },
            reported_finish: false,
        }
    }

    /// Number of comparison suspensions a full run performs
    pub fn comparison_count(len: usize) -> usize {
        len * len.saturating_sub(1) / 2
    }

    /// Move `j` to the next pair, rolling over into the next pass
    fn advance(&mut self) {
        self.j += 1;
        if self.j + 1 >= self.len - self.pass {
            self.pass += 1;
            self.j = 0;
        }
        self.phase = if self.pass + 1 >= self.len {
            Phase::Done
        } else {
            Phase::Compare
        };
    }
}

impl Emitter for BubbleSort {
    fn resume(&mut self, data: &mut Dataset) -> Resume {
        loop {
            match self.phase {
                Phase::Done => {
                    if self.reported_finish {
                        warn!("bubble sort resumed after finishing");
                    }
                    self.reported_finish = true;
                    return Resume::Finished;
                }
                Phase::Compare => {
                    self.phase = Phase::Decide;
                    return Resume::Ongoing(Step::Compare(self.j, self.j + 1));
                }
                Phase::Decide => {
                    let j = self.j;
                    let swapped = data.get(j) > data.get(j + 1);
                    if swapped {
                        data.swap(j, j + 1);
                    }
                    self.advance();
                    if swapped {
                        return Resume::Ongoing(Step::Swap(j, j + 1));
                    }
                }
            }
        }
    }

    fn algorithm(&self) -> Algorithm {
        Algorithm::Bubble
    }

    fn is_finished(&self) -> bool {
        self.reported_finish
    }
}
