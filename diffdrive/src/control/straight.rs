// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Straight-line tracking.
//!
//! Both wheels run the same direction at the baseline speed. Whenever one wheel falls more than
//! `lag_threshold` pulses behind the other, the lagging wheel gains one speed level and the
//! leading wheel loses one. The maneuver ends when the *left* wheel reaches the target; the right
//! wheel is assumed to be within the lag threshold by then and is not gated separately.

use crate::config::{ManeuverConfig, SpeedLimits};
use crate::control::{next_speed, Maneuver, ManeuverKind, MotorCommand, Step, WheelCommand};
use crate::encoder::WheelState;
use crate::hal::Direction;

#[derive(Clone, Debug)]
pub struct Straight {
    target_pulses: u32,
    direction: Direction,
    left_speed: u8,
    right_speed: u8,
    lag_threshold: u32,
    limits: SpeedLimits,
}

impl Straight {
    pub fn new(target_pulses: u32, direction: Direction, config: &ManeuverConfig) -> Self {
        let baseline = config.limits.clamp(config.baseline_speed as i32);
        Self {
            target_pulses,
            direction,
            left_speed: baseline,
            right_speed: baseline,
            lag_threshold: config.lag_threshold,
            limits: config.limits,
        }
    }

    #[inline]
    pub fn target_pulses(&self) -> u32 {
        self.target_pulses
    }

    /// Current `(left, right)` speed levels.
    #[inline]
    pub fn speeds(&self) -> (u8, u8) {
        (self.left_speed, self.right_speed)
    }

    fn command(&self) -> MotorCommand {
        MotorCommand {
            left: WheelCommand::new(self.direction, self.left_speed),
            right: WheelCommand::new(self.direction, self.right_speed),
        }
    }
}

impl Maneuver for Straight {
    fn kind(&self) -> ManeuverKind {
        ManeuverKind::Straight
    }

    fn start(&self) -> MotorCommand {
        self.command()
    }

    fn step(&mut self, wheels: WheelState) -> Step {
        if wheels.left >= self.target_pulses {
            return Step {
                command: self.command(),
                done: true,
            };
        }

        // Positive: left is behind right.
        let left_lag = wheels.right as i64 - wheels.left as i64;
        self.left_speed = next_speed(self.left_speed, left_lag, self.lag_threshold, self.limits);
        self.right_speed = next_speed(self.right_speed, -left_lag, self.lag_threshold, self.limits);

        Step {
            command: self.command(),
            done: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn straight(target: u32) -> Straight {
        Straight::new(target, Direction::Forward, &ManeuverConfig::default())
    }

    #[test]
    fn starts_both_wheels_at_baseline() {
        let cmd = straight(1000).start();
        assert_eq!(cmd.left, WheelCommand::new(Direction::Forward, 150));
        assert_eq!(cmd.right, WheelCommand::new(Direction::Forward, 150));
    }

    #[test]
    fn backward_drives_both_wheels_backward() {
        let cmd = Straight::new(10, Direction::Backward, &ManeuverConfig::default()).start();
        assert_eq!(cmd.left.direction, Direction::Backward);
        assert_eq!(cmd.right.direction, Direction::Backward);
    }

    #[test]
    fn balanced_wheels_hold_speed() {
        let mut m = straight(1000);
        let step = m.step(WheelState::new(100, 101));
        assert!(!step.done);
        assert_eq!(m.speeds(), (150, 150));
    }

    #[test]
    fn left_ahead_slows_left_and_speeds_right() {
        let mut m = straight(10_000);
        for i in 0..30 {
            let step = m.step(WheelState::new(105 + i * 10, 100 + i * 10));
            assert!(!step.done);
            let (l, r) = m.speeds();
            assert!(l < r);
            assert!(ManeuverConfig::default().limits.contains(l));
            assert!(ManeuverConfig::default().limits.contains(r));
        }
        assert_eq!(m.speeds(), (120, 180));
    }

    #[test]
    fn accumulation_stops_at_limits() {
        let mut m = straight(10_000);
        for _ in 0..500 {
            m.step(WheelState::new(50, 100));
        }
        assert_eq!(m.speeds(), (230, 60));
    }

    #[test]
    fn completes_on_left_wheel_only() {
        let mut m = straight(500);
        assert!(!m.step(WheelState::new(499, 900)).done);
        assert!(m.step(WheelState::new(500, 10)).done);
    }

    #[test]
    fn zero_target_completes_immediately() {
        let mut m = straight(0);
        assert!(m.step(WheelState::ZERO).done);
    }
}
