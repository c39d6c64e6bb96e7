//! Property-based tests for the range accumulator and sparse table.
//!
//! Verifies:
//! 1. A range addition changes exactly the elements inside the range, by exactly its value
//! 2. Any sequence of updates matches applying them naively
//! 3. Every power-of-two block pair that fits a range yields the range maximum
//! 4. A full-range query equals a linear scan

use proptest::prelude::*;
use rangemax::{Max, MaxSparseTable, RangeAccumulator, SparseTable};

fn arb_values() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-1_000_000i64..1_000_000, 1..64)
}

fn arb_values_and_range() -> impl Strategy<Value = (Vec<i64>, usize, usize)> {
    arb_values().prop_flat_map(|values| {
        let len = values.len();
        (Just(values), 0..len, 0..len)
            .prop_map(|(values, a, b)| (values, a.min(b), a.max(b)))
    })
}

fn arb_updates() -> impl Strategy<Value = (Vec<i64>, Vec<(usize, usize, i64)>)> {
    arb_values().prop_flat_map(|values| {
        let len = values.len();
        let update = (0..len, 0..len, -1_000i64..1_000)
            .prop_map(|(a, b, value)| (a.min(b), a.max(b), value));
        (Just(values), prop::collection::vec(update, 0..32))
    })
}

proptest! {
    #[test]
    fn update_changes_exactly_the_range((values, left, right) in arb_values_and_range(), value in -1_000i64..1_000) {
        let mut acc = RangeAccumulator::from_values(values.clone());
        acc.update(left, right, value).unwrap();
        let result = acc.finalize().unwrap();

        for (i, (before, after)) in values.iter().zip(&result).enumerate() {
            if (left..=right).contains(&i) {
                prop_assert_eq!(*after, before + value);
            } else {
                prop_assert_eq!(after, before);
            }
        }
    }

    #[test]
    fn updates_match_naive((values, updates) in arb_updates()) {
        let mut naive = values.clone();
        let mut acc = RangeAccumulator::from_values(values);
        for &(left, right, value) in &updates {
            acc.update(left, right, value).unwrap();
            for x in &mut naive[left..=right] {
                *x += value;
            }
        }
        prop_assert_eq!(acc.finalize().unwrap(), naive);
    }

    #[test]
    fn overlapping_blocks_cover_range((values, left, right) in arb_values_and_range()) {
        let table = SparseTable::new(Max, &values);
        let expected = *values[left..=right].iter().max().unwrap();
        let width = right - left + 1;

        for level in 0..table.levels() {
            if 1 << level > width {
                break;
            }
            let head = table.block(left, level).unwrap();
            let tail = table.block(right + 1 - (1 << level), level).unwrap();
            if level == width.ilog2() as usize {
                prop_assert_eq!(*head.max(tail), expected);
            } else {
                prop_assert!(*head.max(tail) <= expected);
            }
        }
        prop_assert_eq!(table.query(left, right).unwrap(), expected);
    }

    #[test]
    fn full_range_matches_scan(values in arb_values()) {
        let table = MaxSparseTable::new(Max, &values);
        prop_assert_eq!(
            table.query(0, values.len() - 1).unwrap(),
            *values.iter().max().unwrap()
        );
    }
}
