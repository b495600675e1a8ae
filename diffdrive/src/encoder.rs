// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Read-only access to the two wheel encoders.
//!
//! Hardware counters are direction-aware, so a wheel driven backward counts down from zero. Every
//! maneuver compares travelled distance, not signed position, so the sampler reports the absolute
//! value of each counter.

use crate::hal::{EncoderCounter, Side};

/// Pulse counts for both wheels since the last reset.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct WheelState {
    pub left: u32,
    pub right: u32,
}

impl WheelState {
    pub const ZERO: WheelState = WheelState { left: 0, right: 0 };

    #[inline]
    pub fn new(left: u32, right: u32) -> Self {
        Self { left, right }
    }

    /// Count for a single wheel.
    #[inline]
    pub fn side(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

/// Borrowing wrapper around the HAL's encoder counters.
pub struct EncoderSampler<'a, E: EncoderCounter> {
    counters: &'a mut E,
}

impl<'a, E: EncoderCounter> EncoderSampler<'a, E> {
    pub fn new(counters: &'a mut E) -> Self {
        Self { counters }
    }

    /// Zero both counters.
    pub fn reset(&mut self) {
        self.counters.reset_count(Side::Left);
        self.counters.reset_count(Side::Right);
    }

    /// Latest absolute pulse counts. Never blocks.
    pub fn sample(&self) -> WheelState {
        WheelState {
            left: self.counters.read_count(Side::Left).unsigned_abs(),
            right: self.counters.read_count(Side::Right).unsigned_abs(),
        }
    }
}
