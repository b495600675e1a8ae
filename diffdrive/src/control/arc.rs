// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Arc following at a fixed inner/outer speed ratio.
//!
//! Both wheels drive forward; the outer wheel starts at the baseline speed and the inner wheel at
//! `baseline / ratio`. Every iteration the outer wheel's count is compared with
//! `inner_count × ratio`: while the two wheels keep that ratio they trace concentric circles
//! around a common center. Drift beyond the tolerance nudges the outer speed by one level; the
//! inner speed is never touched.

#[allow(unused_imports)]
use micromath::F32Ext;

use crate::config::{ManeuverConfig, SpeedLimits};
use crate::control::{next_speed, Maneuver, ManeuverKind, MotorCommand, Step, WheelCommand};
use crate::encoder::WheelState;
use crate::error::DriveError;
use crate::hal::{Direction, Side};
use crate::kinematics::Turn;

#[derive(Clone, Debug)]
pub struct Arc {
    outer_target: u32,
    overshoot: u32,
    speed_ratio: f32,
    turn: Turn,
    inner_speed: u8,
    outer_speed: u8,
    tolerance: u32,
    limits: SpeedLimits,
}

impl Arc {
    /// `speed_ratio` is outer pulses over inner pulses and must be finite and at least 1.
    pub fn new(
        outer_target: u32,
        speed_ratio: f32,
        turn: Turn,
        config: &ManeuverConfig,
    ) -> Result<Self, DriveError> {
        if !(speed_ratio.is_finite() && speed_ratio >= 1.0) {
            return Err(DriveError::InvalidGoal);
        }

        let outer_speed = config.limits.clamp(config.baseline_speed as i32);
        let inner_speed = config
            .limits
            .clamp((config.baseline_speed as f32 / speed_ratio).round() as i32);

        Ok(Self {
            outer_target,
            overshoot: config.arc_overshoot,
            speed_ratio,
            turn,
            inner_speed,
            outer_speed,
            tolerance: config.arc_tolerance,
            limits: config.limits,
        })
    }

    /// Wheel on the smaller circle.
    #[inline]
    pub fn inner_side(&self) -> Side {
        match self.turn {
            Turn::Left => Side::Left,
            Turn::Right => Side::Right,
        }
    }

    #[inline]
    pub fn outer_side(&self) -> Side {
        match self.turn {
            Turn::Left => Side::Right,
            Turn::Right => Side::Left,
        }
    }

    /// Current `(inner, outer)` speed levels.
    #[inline]
    pub fn speeds(&self) -> (u8, u8) {
        (self.inner_speed, self.outer_speed)
    }

    /// Outer count at which the motors are cut.
    #[inline]
    pub fn stop_threshold(&self) -> u32 {
        self.outer_target.saturating_add(self.overshoot)
    }

    fn command(&self) -> MotorCommand {
        let inner = WheelCommand::new(Direction::Forward, self.inner_speed);
        let outer = WheelCommand::new(Direction::Forward, self.outer_speed);
        match self.turn {
            Turn::Left => MotorCommand {
                left: inner,
                right: outer,
            },
            Turn::Right => MotorCommand {
                left: outer,
                right: inner,
            },
        }
    }
}

impl Maneuver for Arc {
    fn kind(&self) -> ManeuverKind {
        ManeuverKind::Arc
    }

    fn start(&self) -> MotorCommand {
        self.command()
    }

    fn step(&mut self, wheels: WheelState) -> Step {
        let inner = wheels.side(self.inner_side());
        let outer = wheels.side(self.outer_side());

        if outer >= self.stop_threshold() {
            return Step {
                command: self.command(),
                done: true,
            };
        }

        let expected_outer = (inner as f32 * self.speed_ratio).round() as i64;
        let outer_lag = expected_outer - outer as i64;
        self.outer_speed = next_speed(self.outer_speed, outer_lag, self.tolerance, self.limits);

        Step {
            command: self.command(),
            done: false,
        }
    }

    fn settles(&self) -> bool {
        true
    }
}
