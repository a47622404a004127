// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Splitting a lookback range into fixed-size fetch windows.
//!
//! Given the resolved start and the current tip, a [`WindowPlan`] yields
//! `floor((tip - start) / window_size)` consecutive windows
//! `(start + size * i, start + size * (i + 1))`, in ascending order.
//!
//! ```rust
//! use txscan::{TailPolicy, WindowPlan, WindowSize};
//!
//! let plan = WindowPlan::new(5_760, 11_520, WindowSize::new(1_920), TailPolicy::Drop);
//! let windows: Vec<_> = plan.iter().map(|r| (r.start(), r.end())).collect();
//! assert_eq!(windows, vec![(5_760, 7_680), (7_680, 9_600), (9_600, 11_520)]);
//! ```

use alloy_primitives::BlockNumber;
use serde::{Deserialize, Serialize};

use crate::blocks::BlockRange;
use crate::types::config::WindowSize;

/// What to do with the blocks after the last full window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TailPolicy {
    /// Only full windows are fetched. Blocks between the last full window and
    /// the tip are not queried.
    #[default]
    Drop,
    /// A final shorter window `(last_full_end, tip)` is added when the span is
    /// not a multiple of the window size.
    Include,
}

/// The ordered windows covering `[start, tip]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowPlan {
    start: BlockNumber,
    tip: BlockNumber,
    size: WindowSize,
    tail: TailPolicy,
}

impl WindowPlan {
    pub fn new(start: BlockNumber, tip: BlockNumber, size: WindowSize, tail: TailPolicy) -> Self {
        Self {
            start,
            tip,
            size,
            tail,
        }
    }

    /// Number of full windows (`floor((tip - start) / size)`, 0 if `tip <= start`).
    pub fn full_windows(&self) -> u64 {
        self.size.full_windows(self.start, self.tip)
    }

    /// Total number of windows, including a tail window when one applies.
    pub fn len(&self) -> usize {
        self.full_windows() as usize + usize::from(self.tail_window().is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Window `index` of the plan, or `None` past the end.
    pub fn window(&self, index: u64) -> Option<BlockRange> {
        let full = self.full_windows();
        if index < full {
            let size = self.size.as_u64();
            // index < full guarantees start + size * (index + 1) <= tip
            let lo = self.start + size * index;
            BlockRange::new(lo, lo + size)
        } else if index == full {
            self.tail_window()
        } else {
            None
        }
    }

    /// Windows in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = BlockRange> + '_ {
        (0..self.len() as u64).filter_map(|index| self.window(index))
    }

    fn tail_window(&self) -> Option<BlockRange> {
        if self.tail == TailPolicy::Drop || self.tip <= self.start {
            return None;
        }
        let covered_to = self.start + self.size.as_u64() * self.full_windows();
        if covered_to < self.tip {
            BlockRange::new(covered_to, self.tip)
        } else {
            None
        }
    }
}
