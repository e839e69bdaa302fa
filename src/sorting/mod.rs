//! Stepwise-suspendable sorting engine
//!
//! Each algorithm is an explicit state machine implementing [`Emitter`]. A
//! call to [`Emitter::resume`] performs work up to and including the next
//! visually meaningful comparison or swap, then returns control with a
//! [`Resume::Ongoing`] step describing which indices were touched. All loop
//! counters and pending ranges live in the emitter, so progress is never lost
//! between calls.
//!
//! - [`bubble`]: adjacent compare/swap passes, no early exit
//! - [`quick`]: Lomuto partition driven by an explicit range stack
//!
//! The dataset is passed to every `resume` call rather than stored in the
//! emitter, so the driver keeps sole ownership of it between frames.

pub mod bubble;
pub mod quick;

pub use bubble::BubbleSort;
pub use quick::QuickSort;

use crate::dataset::Dataset;
use std::fmt;

/// Which sorting algorithm to animate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bubble,
    Quick,
}

impl Algorithm {
    /// All algorithms, in button order
    pub const ALL: [Algorithm; 2] = [Algorithm::Bubble, Algorithm::Quick];

    /// Button label
    pub fn label(self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Quick => "Quick Sort",
        }
    }

    /// Build a fresh emitter for a dataset of `len` elements
    pub fn emitter(self, len: usize) -> Box<dyn Emitter> {
        match self {
            Algorithm::Bubble => Box::new(BubbleSort::new(len)),
            Algorithm::Quick => Box::new(QuickSort::new(len)),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One suspension point of a running sort
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// About to compare the two positions
    Compare(usize, usize),
    /// The two positions were just swapped
    Swap(usize, usize),
    /// Quick sort finished handling one popped range
    RangeDone,
}

impl Step {
    /// Indices this step touches
    pub fn highlight(&self) -> Highlight {
        match *self {
            Step::Compare(a, b) | Step::Swap(a, b) => Highlight::pair(a, b),
            Step::RangeDone => Highlight::none(),
        }
    }

    /// Comparisons are the inner steps that carry the artificial delay
    pub fn is_comparison(&self) -> bool {
        matches!(self, Step::Compare(..))
    }

    pub fn is_swap(&self) -> bool {
        matches!(self, Step::Swap(..))
    }
}

/// Result of a single resume
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resume {
    Ongoing(Step),
    Finished,
}

impl Resume {
    pub fn is_finished(&self) -> bool {
        matches!(self, Resume::Finished)
    }
}

/// Set of zero to two indices highlighted for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Highlight {
    slots: [Option<usize>; 2],
}

impl Highlight {
    pub fn none() -> Self {
        Highlight::default()
    }

    pub fn pair(a: usize, b: usize) -> Self {
        let second = if a == b { None } else { Some(b) };
        Highlight {
            slots: [Some(a), second],
        }
    }

    pub fn contains(&self, index: usize) -> bool {
        self.slots.contains(&Some(index))
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    pub fn len(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.slots.iter().flatten().copied()
    }
}

/// A resumable sorting computation over a [`Dataset`]
///
/// Callers must stop resuming once [`Resume::Finished`] has been returned.
/// Implementations answer any further call with `Finished` again and leave the
/// dataset untouched.
pub trait Emitter {
    /// Advance to the next suspension point
    fn resume(&mut self, data: &mut Dataset) -> Resume;

    /// Which algorithm this emitter runs
    fn algorithm(&self) -> Algorithm;

    /// Whether `Finished` has already been reported
    fn is_finished(&self) -> bool;
}

/// Resume `emitter` until it finishes, collecting every step.
///
/// The uninterrupted counterpart of frame-by-frame resumption.
pub fn run_to_completion(emitter: &mut dyn Emitter, data: &mut Dataset) -> Vec<Step> {
    let mut steps = Vec::new();
    while let Resume::Ongoing(step) = emitter.resume(data) {
        steps.push(step);
    }
    steps
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_pair() {
        let h = Highlight::pair(3, 4);
        assert!(h.contains(3));
        assert!(h.contains(4));
        assert!(!h.contains(5));
        assert_eq!(h.len(), 2);
        assert_eq!(h.indices().collect::<Vec<_>>(), vec![3, 4]);
    }

    #[test]
    fn test_highlight_same_index_collapses() {
        let h = Highlight::pair(2, 2);
        assert_eq!(h.len(), 1);
        assert!(h.contains(2));
    }

    #[test]
    fn test_range_done_has_no_highlight() {
        assert!(Step::RangeDone.highlight().is_empty());
        assert!(!Step::RangeDone.is_comparison());
    }

    #[test]
    fn test_algorithm_labels() {
        assert_eq!(Algorithm::Bubble.label(), "Bubble Sort");
        assert_eq!(Algorithm::Quick.to_string(), "Quick Sort");
    }

    #[test]
    fn test_emitter_factory_matches_algorithm() {
        for algorithm in Algorithm::ALL {
            let emitter = algorithm.emitter(5);
            assert_eq!(emitter.algorithm(), algorithm);
            assert!(!emitter.is_finished());
        }
    }
}
