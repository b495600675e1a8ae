// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Motion Control
//!
//! The three closed-loop maneuvers and the driver that runs them against hardware.
//!
//! Each maneuver is a small state machine: [`Maneuver::start`] gives the initial motor command and
//! [`Maneuver::step`] consumes one encoder sample and returns the next command plus whether the
//! completion condition holds. [`MotionController`] owns the hardware and calls `step` in a
//! polling loop, so the same maneuver code runs on the board and against a simulated base.
//!
//! ## Modules
//!
//! - [`correction`] - Bounded ±1 speed nudge shared by the loops.
//! - [`straight`] - Straight-line tracking.
//! - [`rotate`] - In-place pivot.
//! - [`arc`] - Arc following at a fixed inner/outer ratio.
//! - [`cancel`] - Cancellation tokens checked every iteration.
//! - [`controller`] - The polling driver with stall supervision.

use core::fmt;

use crate::encoder::WheelState;
use crate::hal::{Direction, Side};

pub mod arc;
pub mod cancel;
pub mod controller;
pub mod correction;
pub mod rotate;
pub mod straight;

pub use arc::Arc;
pub use cancel::{CancelToken, NeverCancel};
pub use controller::{ManeuverReport, MotionController};
pub use correction::next_speed;
pub use rotate::Rotate;
pub use straight::Straight;

/// Which loop is running.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ManeuverKind {
    #[default]
    Straight,
    Rotate,
    Arc,
}

impl fmt::Display for ManeuverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ManeuverKind::Straight => "straight",
            ManeuverKind::Rotate => "rotate",
            ManeuverKind::Arc => "arc",
        })
    }
}

/// Direction and PWM level for one wheel.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct WheelCommand {
    pub direction: Direction,
    pub speed: u8,
}

impl WheelCommand {
    #[inline]
    pub fn new(direction: Direction, speed: u8) -> Self {
        Self { direction, speed }
    }
}

/// Commands for both wheels, recomputed every iteration.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MotorCommand {
    pub left: WheelCommand,
    pub right: WheelCommand,
}

impl MotorCommand {
    #[inline]
    pub fn side(&self, side: Side) -> WheelCommand {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

/// Result of one control iteration.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Step {
    pub command: MotorCommand,
    pub done: bool,
}

/// A closed-loop maneuver driven one sample at a time.
pub trait Maneuver {
    fn kind(&self) -> ManeuverKind;

    /// Directions and baseline speeds applied before the motors are enabled.
    fn start(&self) -> MotorCommand;

    /// Consume one encoder sample.
    fn step(&mut self, wheels: WheelState) -> Step;

    /// Whether the driver should wait out residual momentum after disabling the motors.
    fn settles(&self) -> bool {
        false
    }
}

impl<M: Maneuver + ?Sized> Maneuver for &mut M {
    fn kind(&self) -> ManeuverKind {
        (**self).kind()
    }

    fn start(&self) -> MotorCommand {
        (**self).start()
    }

    fn step(&mut self, wheels: WheelState) -> Step {
        (**self).step(wheels)
    }

    fn settles(&self) -> bool {
        (**self).settles()
    }
}
