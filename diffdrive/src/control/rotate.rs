// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! In-place pivot.
//!
//! The wheels spin in opposite directions at the baseline speed with no correction. The pivot
//! stops as soon as *either* wheel reaches `target - slack`; the slack absorbs the momentum that
//! carries the base further after the motors are cut.

use crate::config::ManeuverConfig;
use crate::control::{Maneuver, ManeuverKind, MotorCommand, Step, WheelCommand};
use crate::encoder::WheelState;
use crate::hal::Direction;
use crate::kinematics::Turn;

#[derive(Clone, Debug)]
pub struct Rotate {
    target_pulses: u32,
    slack: u32,
    turn: Turn,
    speed: u8,
}

impl Rotate {
    pub fn new(target_pulses: u32, turn: Turn, config: &ManeuverConfig) -> Self {
        Self {
            target_pulses,
            slack: config.rotate_slack,
            turn,
            speed: config.limits.clamp(config.baseline_speed as i32),
        }
    }

    /// Pulse count at which the motors are cut.
    #[inline]
    pub fn stop_threshold(&self) -> u32 {
        self.target_pulses.saturating_sub(self.slack)
    }

    fn command(&self) -> MotorCommand {
        let (left, right) = match self.turn {
            Turn::Left => (Direction::Backward, Direction::Forward),
            Turn::Right => (Direction::Forward, Direction::Backward),
        };
        MotorCommand {
            left: WheelCommand::new(left, self.speed),
            right: WheelCommand::new(right, self.speed),
        }
    }
}

impl Maneuver for Rotate {
    fn kind(&self) -> ManeuverKind {
        ManeuverKind::Rotate
    }

    fn start(&self) -> MotorCommand {
        self.command()
    }

    fn step(&mut self, wheels: WheelState) -> Step {
        let threshold = self.stop_threshold();
        Step {
            command: self.command(),
            done: wheels.left >= threshold || wheels.right >= threshold,
        }
    }

    fn settles(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rotate(target: u32, turn: Turn) -> Rotate {
        Rotate::new(target, turn, &ManeuverConfig::default())
    }

    #[test]
    fn left_turn_spins_left_wheel_backward() {
        let cmd = rotate(172, Turn::Left).start();
        assert_eq!(cmd.left, WheelCommand::new(Direction::Backward, 150));
        assert_eq!(cmd.right, WheelCommand::new(Direction::Forward, 150));
    }

    #[test]
    fn right_turn_mirrors_directions() {
        let cmd = rotate(172, Turn::Right).start();
        assert_eq!(cmd.left.direction, Direction::Forward);
        assert_eq!(cmd.right.direction, Direction::Backward);
    }

    #[test]
    fn stops_when_either_wheel_reaches_threshold() {
        let mut m = rotate(172, Turn::Left);
        assert_eq!(m.stop_threshold(), 162);
        assert!(!m.step(WheelState::new(161, 150)).done);
        assert!(m.step(WheelState::new(162, 10)).done);

        let mut m = rotate(172, Turn::Left);
        assert!(m.step(WheelState::new(0, 170)).done);
    }

    #[test]
    fn speed_is_never_corrected() {
        let mut m = rotate(1000, Turn::Left);
        let step = m.step(WheelState::new(10, 400));
        assert_eq!(step.command, m.start());
    }

    #[test]
    fn slack_larger_than_target_saturates() {
        let m = rotate(4, Turn::Left);
        assert_eq!(m.stop_threshold(), 0);
    }

    #[test]
    fn pivot_settles_after_stop() {
        assert!(rotate(10, Turn::Left).settles());
    }
}
