// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Tuning for the maneuver loops.
//!
//! A [`ManeuverConfig`] is handed to each maneuver by value. Nothing in it is shared or mutated
//! across maneuvers.

use crate::error::DriveError;

/// Default baseline PWM level for all maneuvers.
pub const DEFAULT_BASELINE_SPEED: u8 = 150;

/// Default safe PWM range.
pub const DEFAULT_MIN_SPEED: u8 = 60;
pub const DEFAULT_MAX_SPEED: u8 = 230;

/// Straight: wheel lag (pulses) tolerated before a correction.
pub const DEFAULT_LAG_THRESHOLD: u32 = 1;

/// Rotate: pulses subtracted from the target to absorb momentum.
pub const DEFAULT_ROTATE_SLACK: u32 = 10;

/// Arc: allowed drift of the outer wheel from `inner × ratio`.
pub const DEFAULT_ARC_TOLERANCE: u32 = 10;

/// Arc: pulses added to the outer target before stopping.
pub const DEFAULT_ARC_OVERSHOOT: u32 = 25;

/// Pause between control iterations.
pub const DEFAULT_POLL_INTERVAL_MS: u32 = 20;

/// Pause after disabling the motors at the end of a rotate or arc.
pub const DEFAULT_SETTLE_MS: u32 = 1_000;

/// Hard cap on loop iterations per maneuver (60 s at the default poll rate).
pub const DEFAULT_MAX_ITERATIONS: u32 = 3_000;

/// Consecutive samples with no encoder movement before a maneuver is declared stalled.
pub const DEFAULT_STALL_ITERATIONS: u32 = 50;

/// Inclusive PWM range the controller may command.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SpeedLimits {
    pub min: u8,
    pub max: u8,
}

impl SpeedLimits {
    pub const fn new(min: u8, max: u8) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn clamp(&self, level: i32) -> u8 {
        level.clamp(self.min as i32, self.max as i32) as u8
    }

    #[inline]
    pub fn contains(&self, level: u8) -> bool {
        (self.min..=self.max).contains(&level)
    }
}

impl Default for SpeedLimits {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_SPEED, DEFAULT_MAX_SPEED)
    }
}

/// Per-maneuver tuning and supervision budgets.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ManeuverConfig {
    pub baseline_speed: u8,
    pub limits: SpeedLimits,

    pub lag_threshold: u32,
    pub rotate_slack: u32,
    pub arc_tolerance: u32,
    pub arc_overshoot: u32,

    pub poll_interval_ms: u32,
    pub settle_ms: u32,

    pub max_iterations: u32,
    pub stall_iterations: u32,
}

impl Default for ManeuverConfig {
    fn default() -> Self {
        Self {
            baseline_speed: DEFAULT_BASELINE_SPEED,
            limits: SpeedLimits::default(),
            lag_threshold: DEFAULT_LAG_THRESHOLD,
            rotate_slack: DEFAULT_ROTATE_SLACK,
            arc_tolerance: DEFAULT_ARC_TOLERANCE,
            arc_overshoot: DEFAULT_ARC_OVERSHOOT,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            settle_ms: DEFAULT_SETTLE_MS,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            stall_iterations: DEFAULT_STALL_ITERATIONS,
        }
    }
}

impl ManeuverConfig {
    pub fn with_baseline_speed(mut self, speed: u8) -> Self {
        self.baseline_speed = speed;
        self
    }

    pub fn with_speed_limits(mut self, min: u8, max: u8) -> Self {
        self.limits = SpeedLimits::new(min, max);
        self
    }

    pub fn with_lag_threshold(mut self, pulses: u32) -> Self {
        self.lag_threshold = pulses;
        self
    }

    pub fn with_rotate_slack(mut self, pulses: u32) -> Self {
        self.rotate_slack = pulses;
        self
    }

    pub fn with_arc_margins(mut self, tolerance: u32, overshoot: u32) -> Self {
        self.arc_tolerance = tolerance;
        self.arc_overshoot = overshoot;
        self
    }

    pub fn with_timing(mut self, poll_interval_ms: u32, settle_ms: u32) -> Self {
        self.poll_interval_ms = poll_interval_ms;
        self.settle_ms = settle_ms;
        self
    }

    /// Set the supervision budgets. `stall_iterations` counts consecutive samples without
    /// encoder movement.
    pub fn with_budget(mut self, max_iterations: u32, stall_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self.stall_iterations = stall_iterations;
        self
    }

    /// Check internal consistency before any motor moves.
    pub fn validate(&self) -> Result<(), DriveError> {
        if self.limits.min > self.limits.max {
            return Err(DriveError::InvalidConfig("speed limits are inverted"));
        }
        if self.limits.max == 0 {
            return Err(DriveError::InvalidConfig("maximum speed is zero"));
        }
        if !self.limits.contains(self.baseline_speed) {
            return Err(DriveError::InvalidConfig(
                "baseline speed outside speed limits",
            ));
        }
        if self.max_iterations == 0 {
            return Err(DriveError::InvalidConfig("iteration budget is zero"));
        }
        if self.stall_iterations == 0 {
            return Err(DriveError::InvalidConfig("stall window is zero"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(ManeuverConfig::default().validate(), Ok(()));
    }

    #[test]
    fn clamp_saturates_at_both_ends() {
        let limits = SpeedLimits::new(60, 230);
        assert_eq!(limits.clamp(-5), 60);
        assert_eq!(limits.clamp(59), 60);
        assert_eq!(limits.clamp(150), 150);
        assert_eq!(limits.clamp(400), 230);
    }

    #[test]
    fn baseline_outside_limits_is_rejected() {
        let cfg = ManeuverConfig::default().with_baseline_speed(250);
        assert_eq!(
            cfg.validate(),
            Err(DriveError::InvalidConfig(
                "baseline speed outside speed limits"
            ))
        );
    }

    #[test]
    fn inverted_limits_are_rejected() {
        let cfg = ManeuverConfig::default().with_speed_limits(200, 100);
        assert!(matches!(cfg.validate(), Err(DriveError::InvalidConfig(_))));
    }

    #[test]
    fn zero_budgets_are_rejected() {
        assert!(ManeuverConfig::default()
            .with_budget(0, 10)
            .validate()
            .is_err());
        assert!(ManeuverConfig::default()
            .with_budget(10, 0)
            .validate()
            .is_err());
    }
}
