//! Quick sort driven by an explicit range stack
//!
//! Recursion is replaced by a LIFO stack of pending `(low, high)` ranges so a
//! partition can be suspended halfway through without a call stack to save.
//! Bounds are signed: partitioning at index 0 pushes the empty range
//! `(0, -1)`, which is later popped and skipped like any other range with
//! `low >= high`.

use super::{Algorithm, Emitter, Resume, Step};
use crate::dataset::Dataset;
use tracing::{trace, warn};

/// Pending sub-array bounds, inclusive on both ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub low: isize,
    pub high: isize,
}

impl Span {
    pub fn new(low: isize, high: isize) -> Self {
        Span { low, high }
    }

    /// Ranges of zero or one element are already sorted
    pub fn needs_partition(&self) -> bool {
        self.low < self.high
    }
}

/// Lomuto partition in progress over `span`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Partition {
    span: Span,
    pivot: i32,
    /// Last index of the "less than pivot" region; starts at `low - 1`
    boundary: isize,
    /// Next index to examine
    cursor: isize,
    /// `cursor` has been reported and awaits its comparison
    compared: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Pop the next range off the stack
    Pop,
    Partitioning(Partition),
    /// Pivot landed at this index; push both sides
    Split { span: Span, pivot: isize },
}

/// Quick sort with last-element pivot
#[derive(Debug, Clone)]
pub struct QuickSort {
    stack: Vec<Span>,
    phase: Phase,
    reported_finish: bool,
}

impl QuickSort {
    pub fn new(len: usize) -> Self {
        let mut stack = Vec::new();
        if len >= 2 {
            stack.push(Span::new(0, len as isize - 1));
        }
        QuickSort {
            stack,
            phase: Phase::Pop,
            reported_finish: false,
        }
    }

    /// Ranges still waiting to be handled
    pub fn pending(&self) -> &[Span] {
        &self.stack
    }

    /// The range currently being partitioned, if any
    pub fn active_span(&self) -> Option<Span> {
        match self.phase {
            Phase::Partitioning(p) => Some(p.span),
            Phase::Split { span, .. } => Some(span),
            Phase::Pop => None,
        }
    }

    /// Advance the partition by one suspension point.
    ///
    /// Returns the step to report and the next phase.
    fn step_partition(mut p: Partition, data: &mut Dataset) -> (Step, Phase) {
        let high = p.span.high as usize;
        loop {
            if !p.compared {
                if p.cursor < p.span.high {
                    p.compared = true;
                    return (
                        Step::Compare(p.cursor as usize, high),
                        Phase::Partitioning(p),
                    );
                }
                let pivot = p.boundary + 1;
                data.swap(pivot as usize, high);
                return (
                    Step::Swap(pivot as usize, high),
                    Phase::Split {
                        span: p.span,
                        pivot,
                    },
                );
            }

            let j = p.cursor as usize;
            p.compared = false;
            p.cursor += 1;
            if data.get(j) < p.pivot {
                p.boundary += 1;
                let i = p.boundary as usize;
                data.swap(i, j);
                return (Step::Swap(i, j), Phase::Partitioning(p));
            }
        }
    }
}

impl Emitter for QuickSort {
    fn resume(&mut self, data: &mut Dataset) -> Resume {
        match self.phase {
            Phase::Pop => {
                let Some(span) = self.stack.pop() else {
                    if self.reported_finish {
                        warn!("quick sort resumed after finishing");
                    }
                    self.reported_finish = true;
                    return Resume::Finished;
                };
                if !span.needs_partition() {
                    trace!(low = span.low, high = span.high, "skipping sorted range");
                    return Resume::Ongoing(Step::RangeDone);
                }
                let partition = Partition {
                    span,
                    pivot: data.get(span.high as usize),
                    boundary: span.low - 1,
                    cursor: span.low,
                    compared: false,
                };
                let (step, next) = Self::step_partition(partition, data);
                self.phase = next;
                Resume::Ongoing(step)
            }
            Phase::Partitioning(partition) => {
                let (step, next) = Self::step_partition(partition, data);
                self.phase = next;
                Resume::Ongoing(step)
            }
            Phase::Split { span, pivot } => {
                trace!(low = span.low, high = span.high, pivot, "range partitioned");
                self.stack.push(Span::new(span.low, pivot - 1));
                self.stack.push(Span::new(pivot + 1, span.high));
                self.phase = Phase::Pop;
                Resume::Ongoing(Step::RangeDone)
            }
        }
    }

    fn algorithm(&self) -> Algorithm {
        Algorithm::Quick
    }

    fn is_finished(&self) -> bool {
        self.reported_finish
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sorting::run_to_completion;

    #[test]
    fn test_scenario_4_2_7_1() {
        let mut data = Dataset::new(vec![4, 2, 7, 1]);
        let mut sort = QuickSort::new(data.len());

        // partition(0, 3) with pivot 1: nothing is smaller
        for j in 0..3 {
            assert_eq!(sort.resume(&mut data), Resume::Ongoing(Step::Compare(j, 3)));
        }
        assert_eq!(sort.resume(&mut data), Resume::Ongoing(Step::Swap(0, 3)));
        assert_eq!(data.values(), &[1, 2, 7, 4]);

        assert_eq!(sort.resume(&mut data), Resume::Ongoing(Step::RangeDone));
        assert_eq!(sort.pending(), &[Span::new(0, -1), Span::new(1, 3)]);

        run_to_completion(&mut sort, &mut data);
        assert_eq!(data.values(), &[1, 2, 4, 7]);
        assert!(sort.pending().is_empty());
        assert!(sort.is_finished());
    }

    #[test]
    fn test_partition_swap_reports_boundary_and_cursor() {
        let mut data = Dataset::new(vec![9, 1, 5]);
        let mut sort = QuickSort::new(data.len());

        assert_eq!(sort.resume(&mut data), Resume::Ongoing(Step::Compare(0, 2)));
        assert_eq!(sort.resume(&mut data), Resume::Ongoing(Step::Compare(1, 2)));
        // 1 < 5: boundary moves to 0 and swaps with cursor 1
        assert_eq!(sort.resume(&mut data), Resume::Ongoing(Step::Swap(0, 1)));
        assert_eq!(data.values(), &[1, 9, 5]);
        assert_eq!(sort.resume(&mut data), Resume::Ongoing(Step::Swap(1, 2)));
        assert_eq!(data.values(), &[1, 5, 9]);
    }

    #[test]
    fn test_ties_stay_right_of_pivot() {
        let mut data = Dataset::new(vec![3, 3, 3]);
        let mut sort = QuickSort::new(data.len());
        let steps = run_to_completion(&mut sort, &mut data);
        assert_eq!(data.values(), &[3, 3, 3]);
        // First partition never finds a strictly smaller value
        assert_eq!(steps[2], Step::Swap(0, 2));
    }

    #[test]
    fn test_only_valid_ranges_are_partitioned() {
        let mut data = Dataset::new(vec![8, 3, 5, 1, 9, 2, 7]);
        let mut sort = QuickSort::new(data.len());
        loop {
            if let Some(span) = sort.active_span() {
                assert!(span.low < span.high);
            }
            if sort.resume(&mut data).is_finished() {
                break;
            }
        }
        assert!(sort.pending().is_empty());
        assert!(data.is_sorted());
    }

    #[test]
    fn test_short_inputs_finish_immediately() {
        for values in [vec![], vec![4]] {
            let mut data = Dataset::new(values);
            let mut sort = QuickSort::new(data.len());
            assert!(sort.pending().is_empty());
            assert_eq!(sort.resume(&mut data), Resume::Finished);
        }
    }

    #[test]
    fn test_resume_after_finish_is_noop() {
        let mut data = Dataset::new(vec![3, 1, 2]);
        let mut sort = QuickSort::new(data.len());
        run_to_completion(&mut sort, &mut data);
        assert_eq!(sort.resume(&mut data), Resume::Finished);
        assert_eq!(data.values(), &[1, 2, 3]);
    }
}
