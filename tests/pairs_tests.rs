// Integration tests for pair sum and pair product

use algotrace::algorithms::pairs::{pair_product, pair_sum};
use algotrace::algorithms::Strategy;
use algotrace::snapshot::{Action, PairAction};
use algotrace::structures::value::Value;

const STRATEGIES: [Strategy; 2] = [Strategy::BruteForce, Strategy::SetOptimized];

#[test]
fn test_pair_sum_found() {
    for strategy in STRATEGIES {
        let traced = pair_sum(&[3, 2, 5, 4, 1], 8, strategy).expect("valid trace");
        assert_eq!(traced.result, Some((0, 2)), "{:?}", strategy);

        let last = traced.snapshots.last().expect("non-empty trace");
        assert_eq!(last.action, Action::Pair(PairAction::PairFound));
        assert_eq!(
            last.result,
            Some(Value::List(vec![Value::Int(0), Value::Int(2)]))
        );
    }
}

#[test]
fn test_pair_sum_none() {
    for strategy in STRATEGIES {
        let traced = pair_sum(&[1, 2, 3], 100, strategy).expect("valid trace");
        assert_eq!(traced.result, None);
        let last = traced.snapshots.last().expect("non-empty trace");
        assert_eq!(last.action, Action::Pair(PairAction::Complete));
        assert_eq!(last.result, Some(Value::Null));
    }
}

#[test]
fn test_pair_sum_first_complement_wins() {
    // 4 appears twice; both strategies keep the earliest partner
    for strategy in STRATEGIES {
        let traced = pair_sum(&[4, 4, 1, 7], 8, strategy).expect("valid trace");
        assert_eq!(traced.result, Some((0, 1)), "{:?}", strategy);

        let traced = pair_sum(&[1, 7, 1, 5, 7], 8, strategy).expect("valid trace");
        assert_eq!(traced.result, Some((0, 1)), "{:?}", strategy);

        let traced = pair_sum(&[3, 3, 5], 8, strategy).expect("valid trace");
        assert_eq!(traced.result, Some((0, 2)), "{:?}", strategy);
    }
}

#[test]
fn test_pair_sum_needs_two_indices() {
    // 4 + 4 would need the same element twice
    for strategy in STRATEGIES {
        let traced = pair_sum(&[4, 1], 8, strategy).expect("valid trace");
        assert_eq!(traced.result, None, "{:?}", strategy);
    }
}

#[test]
fn test_pair_sum_empty_and_single() {
    for strategy in STRATEGIES {
        assert_eq!(pair_sum(&[], 0, strategy).expect("valid trace").result, None);
        assert_eq!(pair_sum(&[0], 0, strategy).expect("valid trace").result, None);
    }
}

#[test]
fn test_pair_product_found() {
    for strategy in STRATEGIES {
        let traced = pair_product(&[3, 2, 5, 4, 1], 8, strategy).expect("valid trace");
        assert_eq!(traced.result, Some((1, 3)), "{:?}", strategy);

        let traced = pair_product(&[4, 7, 9, 2, 5, 1], 5, strategy).expect("valid trace");
        assert_eq!(traced.result, Some((4, 5)), "{:?}", strategy);
    }
}

#[test]
fn test_pair_product_with_zero() {
    for strategy in STRATEGIES {
        let traced = pair_product(&[3, 0, 5], 0, strategy).expect("valid trace");
        assert_eq!(traced.result, Some((0, 1)), "{:?}", strategy);

        let traced = pair_product(&[0, 5, 3], 0, strategy).expect("valid trace");
        assert_eq!(traced.result, Some((0, 1)), "{:?}", strategy);

        let traced = pair_product(&[0, 5, 3], 15, strategy).expect("valid trace");
        assert_eq!(traced.result, Some((1, 2)), "{:?}", strategy);
    }
}

#[test]
fn test_pair_product_non_divisor_skipped() {
    for strategy in STRATEGIES {
        let traced = pair_product(&[3, 5, 2], 7, strategy).expect("valid trace");
        assert_eq!(traced.result, None, "{:?}", strategy);
    }
}

#[test]
fn test_overflow_never_matches() {
    for strategy in STRATEGIES {
        let traced = pair_sum(&[i64::MAX, 1, -1], i64::MIN, strategy).expect("valid trace");
        assert_eq!(traced.result, None, "{:?}", strategy);

        let traced = pair_product(&[i64::MAX, 2], -2, strategy).expect("valid trace");
        assert_eq!(traced.result, None, "{:?}", strategy);
    }
}
