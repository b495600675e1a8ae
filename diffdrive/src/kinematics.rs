// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Kinematics for a two-wheel differential base.
//!
//! Converts physical motion goals (centimeters, degrees) into encoder pulse targets, assuming the
//! wheels do not slip. Every function here is pure and allocation free.
//!
//! The one linear relation everything reduces to:
//!
//! ```text
//! cm_per_pulse = π · wheel_diameter / pulses_per_rev
//! pulses       = distance_cm / cm_per_pulse
//! ```

use core::f32::consts::PI;

#[allow(unused_imports)]
use micromath::F32Ext;

use crate::error::{DriveError, GeometryField};
use crate::hal::Direction;

/// Fixed physical constants of the drive base.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RobotGeometry {
    wheel_diameter_cm: f32,
    wheel_base_cm: f32,
    pulses_per_rev: u32,
}

impl RobotGeometry {
    /// Validate and build a geometry.
    ///
    /// `wheel_base_cm` is the distance between the two wheel contact points.
    pub fn new(
        wheel_diameter_cm: f32,
        wheel_base_cm: f32,
        pulses_per_rev: u32,
    ) -> Result<Self, DriveError> {
        if !(wheel_diameter_cm.is_finite() && wheel_diameter_cm > 0.0) {
            return Err(DriveError::InvalidGeometry(GeometryField::WheelDiameter));
        }
        if !(wheel_base_cm.is_finite() && wheel_base_cm > 0.0) {
            return Err(DriveError::InvalidGeometry(GeometryField::WheelBase));
        }
        if pulses_per_rev == 0 {
            return Err(DriveError::InvalidGeometry(GeometryField::PulsesPerRev));
        }

        Ok(Self {
            wheel_diameter_cm,
            wheel_base_cm,
            pulses_per_rev,
        })
    }

    #[inline]
    pub fn wheel_diameter_cm(&self) -> f32 {
        self.wheel_diameter_cm
    }

    #[inline]
    pub fn wheel_base_cm(&self) -> f32 {
        self.wheel_base_cm
    }

    #[inline]
    pub fn pulses_per_rev(&self) -> u32 {
        self.pulses_per_rev
    }

    /// Linear travel of one wheel per encoder pulse.
    #[inline]
    pub fn cm_per_pulse(&self) -> f32 {
        PI * self.wheel_diameter_cm / self.pulses_per_rev as f32
    }

    /// Smallest arc radius whose inner wheel still rolls forward.
    #[inline]
    pub fn min_arc_radius_cm(&self) -> f32 {
        self.wheel_base_cm / 2.0
    }
}

/// Commanded motion in physical units.
///
/// Signs pick the direction: a negative distance drives backward, a positive angle turns
/// counter-clockwise, a positive radius arcs to the left.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MotionGoal {
    Straight(f32),
    Rotate(f32),
    Arc(f32),
}

/// Turning sense for rotations and arcs, viewed from above.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Turn {
    /// Counter-clockwise: left wheel is the inner (or backward) wheel.
    Left,
    /// Clockwise: right wheel is the inner (or backward) wheel.
    Right,
}

/// Per-wheel pulse targets derived from a [`MotionGoal`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PulseTarget {
    Straight {
        pulses: u32,
        direction: Direction,
    },
    Rotate {
        pulses: u32,
        turn: Turn,
    },
    Arc {
        inner_pulses: u32,
        outer_pulses: u32,
        speed_ratio: f32,
        turn: Turn,
    },
}

/// One lap of an arc, in pulses per wheel.
///
/// `inner` is signed: zero or negative means the requested radius does not clear half the wheel
/// base and the inner wheel would have to stop or spin backward.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ArcPulses {
    pub inner: f32,
    pub outer: f32,
}

impl ArcPulses {
    /// `outer / inner`, or `None` when the inner wheel does not roll forward.
    pub fn speed_ratio(&self) -> Option<f32> {
        if self.inner > 0.0 {
            Some(self.outer / self.inner)
        } else {
            None
        }
    }

    /// True when the inner wheel would stop or run backward.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.inner <= 0.0
    }
}

/// Pulses one wheel must count to travel `distance_cm`.
pub fn pulses_for_linear_distance(distance_cm: f32, geometry: &RobotGeometry) -> f32 {
    distance_cm / geometry.cm_per_pulse()
}

/// Pulses each wheel must count for the base to pivot `angle_deg` about its center.
pub fn pulses_for_rotation(angle_deg: f32, geometry: &RobotGeometry) -> f32 {
    let wheel_circumference = PI * geometry.wheel_diameter_cm;
    let pivot_circumference = PI * geometry.wheel_base_cm;
    (angle_deg / 360.0) * pivot_circumference / wheel_circumference
        * geometry.pulses_per_rev as f32
}

/// Pulses for one full lap around a circle of `radius_cm`, measured at the base's center.
pub fn pulses_for_arc(radius_cm: f32, geometry: &RobotGeometry) -> ArcPulses {
    let half_base = geometry.wheel_base_cm / 2.0;
    let inner_lap = 2.0 * PI * (radius_cm - half_base);
    let outer_lap = 2.0 * PI * (radius_cm + half_base);

    ArcPulses {
        inner: pulses_for_linear_distance(inner_lap, geometry),
        outer: pulses_for_linear_distance(outer_lap, geometry),
    }
}

/// Turn a goal into whole-pulse targets.
pub fn plan(goal: MotionGoal, geometry: &RobotGeometry) -> Result<PulseTarget, DriveError> {
    match goal {
        MotionGoal::Straight(distance_cm) => {
            let distance_cm = finite(distance_cm)?;
            let direction = if distance_cm < 0.0 {
                Direction::Backward
            } else {
                Direction::Forward
            };
            Ok(PulseTarget::Straight {
                pulses: whole_pulses(pulses_for_linear_distance(distance_cm, geometry)),
                direction,
            })
        }

        MotionGoal::Rotate(angle_deg) => {
            let angle_deg = finite(angle_deg)?;
            Ok(PulseTarget::Rotate {
                pulses: whole_pulses(pulses_for_rotation(angle_deg, geometry)),
                turn: turn_for(angle_deg),
            })
        }

        MotionGoal::Arc(radius_cm) => {
            let radius_cm = finite(radius_cm)?;
            let arc = pulses_for_arc(radius_cm.abs(), geometry);

            match arc.speed_ratio() {
                Some(speed_ratio) => Ok(PulseTarget::Arc {
                    inner_pulses: whole_pulses(arc.inner),
                    outer_pulses: whole_pulses(arc.outer),
                    speed_ratio,
                    turn: turn_for(radius_cm),
                }),
                None => Err(DriveError::DegenerateArc {
                    radius_cm,
                    min_radius_cm: geometry.min_arc_radius_cm(),
                }),
            }
        }
    }
}

#[inline]
fn finite(value: f32) -> Result<f32, DriveError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(DriveError::InvalidGoal)
    }
}

#[inline]
fn turn_for(signed: f32) -> Turn {
    if signed < 0.0 {
        Turn::Right
    } else {
        Turn::Left
    }
}

#[inline]
fn whole_pulses(pulses: f32) -> u32 {
    pulses.abs().round() as u32
}
