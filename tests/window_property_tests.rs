// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Property-based tests for window planning
//!
//! These tests validate invariants of [`WindowPlan`] across arbitrary starts,
//! tips and window sizes.

use proptest::prelude::*;
use txscan::{TailPolicy, WindowPlan, WindowSize};

fn arb_bounds() -> impl Strategy<Value = (u64, u64)> {
    (0u64..=30_000_000, 0u64..=200_000).prop_map(|(start, span)| (start, start + span))
}

proptest! {
    /// Property: windows are contiguous, each exactly one window size long,
    /// and there are floor((tip - start) / size) of them
    #[test]
    fn prop_full_windows_are_contiguous(
        (start, tip) in arb_bounds(),
        size in 1u64..=10_000,
    ) {
        let plan = WindowPlan::new(start, tip, WindowSize::new(size), TailPolicy::Drop);
        let windows: Vec<_> = plan.iter().collect();

        prop_assert_eq!(windows.len() as u64, (tip - start) / size);

        let mut expected_start = start;
        for window in &windows {
            prop_assert_eq!(window.start(), expected_start);
            prop_assert_eq!(window.span(), size);
            prop_assert!(window.end() <= tip);
            expected_start = window.end();
        }
    }

    /// Property: with the tail included, the last window ends exactly at the tip
    #[test]
    fn prop_tail_reaches_tip(
        (start, tip) in arb_bounds(),
        size in 1u64..=10_000,
    ) {
        let plan = WindowPlan::new(start, tip, WindowSize::new(size), TailPolicy::Include);
        let windows: Vec<_> = plan.iter().collect();

        if tip > start {
            prop_assert_eq!(windows.last().map(|w| w.end()), Some(tip));
            prop_assert_eq!(windows.first().map(|w| w.start()), Some(start));
        } else {
            prop_assert!(windows.is_empty());
        }
        for pair in windows.windows(2) {
            prop_assert_eq!(pair[0].end(), pair[1].start());
        }
    }

    /// Property: the tail adds at most one window
    #[test]
    fn prop_tail_adds_at_most_one(
        (start, tip) in arb_bounds(),
        size in 1u64..=10_000,
    ) {
        let dropped = WindowPlan::new(start, tip, WindowSize::new(size), TailPolicy::Drop);
        let included = WindowPlan::new(start, tip, WindowSize::new(size), TailPolicy::Include);
        let extra = included.len() - dropped.len();
        prop_assert!(extra <= 1);
        prop_assert_eq!(extra == 1, (tip - start) % size != 0);
    }

    /// Property: a tip at or before the start yields no windows
    #[test]
    fn prop_no_windows_when_tip_not_past_start(
        start in 0u64..=30_000_000,
        back in 0u64..=1_000_000,
        size in 1u64..=10_000,
    ) {
        let tip = start.saturating_sub(back);
        for tail in [TailPolicy::Drop, TailPolicy::Include] {
            let plan = WindowPlan::new(start, tip, WindowSize::new(size), tail);
            prop_assert!(plan.is_empty());
            prop_assert_eq!(plan.iter().count(), 0);
        }
    }
}
