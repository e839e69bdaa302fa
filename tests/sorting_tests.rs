// Integration tests for the stepwise sorting engine

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sortty::dataset::Dataset;
use sortty::sorting::{
    run_to_completion, Algorithm, BubbleSort, Emitter, QuickSort, Resume, Step,
};

fn random_values(rng: &mut StdRng) -> Vec<i32> {
    let len = rng.gen_range(0..40);
    (0..len).map(|_| rng.gen_range(-20..20)).collect()
}

fn sorted_copy(values: &[i32]) -> Vec<i32> {
    let mut expected = values.to_vec();
    expected.sort();
    expected
}

#[test]
fn test_every_algorithm_sorts_random_inputs() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..200 {
        let values = random_values(&mut rng);
        for algorithm in Algorithm::ALL {
            let mut data = Dataset::new(values.clone());
            let mut emitter = algorithm.emitter(data.len());
            run_to_completion(emitter.as_mut(), &mut data);

            // Sorted and a permutation of the input
            assert_eq!(
                data.values(),
                sorted_copy(&values).as_slice(),
                "{} failed on {:?}",
                algorithm,
                values
            );
            assert!(emitter.is_finished());
        }
    }
}

#[test]
fn test_bubble_comparisons_are_n_choose_2() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..50 {
        let values = random_values(&mut rng);
        let mut data = Dataset::new(values.clone());
        let mut sort = BubbleSort::new(data.len());
        let steps = run_to_completion(&mut sort, &mut data);
        let comparisons = steps.iter().filter(|s| s.is_comparison()).count();
        let n = values.len();
        assert_eq!(comparisons, n * n.saturating_sub(1) / 2);
    }
}

#[test]
fn test_swap_steps_follow_their_comparison() {
    let mut data = Dataset::new(vec![9, 7, 5, 3, 1]);
    let mut sort = BubbleSort::new(data.len());
    let steps = run_to_completion(&mut sort, &mut data);
    for pair in steps.windows(2) {
        if let Step::Swap(a, b) = pair[1] {
            assert_eq!(pair[0], Step::Compare(a, b));
        }
    }
}

#[test]
fn test_resorting_sorted_input_is_unchanged() {
    let sorted = vec![1, 2, 2, 3, 5, 8, 13];
    for algorithm in Algorithm::ALL {
        let mut data = Dataset::new(sorted.clone());
        let mut emitter = algorithm.emitter(data.len());
        let steps = run_to_completion(emitter.as_mut(), &mut data);
        assert_eq!(data.values(), sorted.as_slice());
        assert!(!steps.is_empty());
    }

    // Bubble sort never swaps on sorted input
    let mut data = Dataset::new(sorted.clone());
    let steps = run_to_completion(&mut BubbleSort::new(data.len()), &mut data);
    assert!(!steps.iter().any(Step::is_swap));
}

#[test]
fn test_interrupted_runs_match_uninterrupted_runs() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..50 {
        let values = random_values(&mut rng);

        let mut straight = Dataset::new(values.clone());
        let mut reference = QuickSort::new(straight.len());
        let expected_steps = run_to_completion(&mut reference, &mut straight);

        // Hand the state machine around between resumes
        let mut data = Dataset::new(values.clone());
        let mut sort = QuickSort::new(data.len());
        let mut steps = Vec::new();
        loop {
            let mut handed_off = sort.clone();
            let resume = handed_off.resume(&mut data);
            sort = handed_off;
            match resume {
                Resume::Ongoing(step) => steps.push(step),
                Resume::Finished => break,
            }
        }

        assert!(sort.is_finished());
        assert_eq!(steps, expected_steps);
        assert_eq!(data, straight);
    }
}

#[test]
fn test_quick_sort_stack_empty_exactly_when_done() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..50 {
        let values = random_values(&mut rng);
        let mut data = Dataset::new(values);
        let mut sort = QuickSort::new(data.len());
        loop {
            if let Some(span) = sort.active_span() {
                assert!(span.low < span.high, "partitioned an empty range");
            }
            let resume = sort.resume(&mut data);
            if resume.is_finished() {
                assert!(sort.pending().is_empty());
                break;
            }
        }
        assert!(data.is_sorted());
    }
}

#[test]
fn test_quick_sort_scenario() {
    let mut data = Dataset::new(vec![4, 2, 7, 1]);
    let mut sort = QuickSort::new(data.len());
    let steps = run_to_completion(&mut sort, &mut data);

    assert_eq!(
        &steps[..5],
        &[
            Step::Compare(0, 3),
            Step::Compare(1, 3),
            Step::Compare(2, 3),
            Step::Swap(0, 3),
            Step::RangeDone,
        ]
    );
    assert_eq!(data.values(), &[1, 2, 4, 7]);
}

#[test]
fn test_min_max_fixed_after_sort() {
    let mut data = Dataset::new(vec![50, 10, 90, 30]);
    let mut sort = QuickSort::new(data.len());
    run_to_completion(&mut sort, &mut data);
    assert_eq!(data.min_val(), 10);
    assert_eq!(data.max_val(), 90);
}
