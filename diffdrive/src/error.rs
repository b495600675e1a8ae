// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Error type shared by planning, configuration and the maneuver driver.

use core::fmt;

use crate::control::ManeuverKind;
use crate::encoder::WheelState;

/// Which geometry field failed validation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GeometryField {
    WheelDiameter,
    WheelBase,
    PulsesPerRev,
}

/// Everything that can stop a maneuver from being planned or completed.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DriveError {
    /// A physical constant is zero, negative or not finite.
    InvalidGeometry(GeometryField),

    /// A goal parameter is NaN or infinite.
    InvalidGoal,

    /// Controller configuration is inconsistent.
    InvalidConfig(&'static str),

    /// Arc radius does not clear half the wheel base, so the inner wheel would have to stop or
    /// run backward.
    DegenerateArc { radius_cm: f32, min_radius_cm: f32 },

    /// Encoders stopped advancing, or the iteration budget ran out. Motors are already disabled.
    Stalled {
        maneuver: ManeuverKind,
        iterations: u32,
        wheels: WheelState,
    },

    /// The cancel token fired mid-maneuver. Motors are already disabled.
    Cancelled {
        maneuver: ManeuverKind,
        iterations: u32,
    },
}

impl fmt::Display for GeometryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GeometryField::WheelDiameter => "wheel diameter",
            GeometryField::WheelBase => "wheel base",
            GeometryField::PulsesPerRev => "pulses per revolution",
        };
        f.write_str(name)
    }
}

impl fmt::Display for DriveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DriveError::InvalidGeometry(field) => {
                write!(f, "invalid geometry: {} must be positive and finite", field)
            }
            DriveError::InvalidGoal => f.write_str("invalid goal: parameter is not finite"),
            DriveError::InvalidConfig(reason) => write!(f, "invalid config: {}", reason),
            DriveError::DegenerateArc {
                radius_cm,
                min_radius_cm,
            } => write!(
                f,
                "degenerate arc: radius {} cm must exceed {} cm",
                radius_cm, min_radius_cm
            ),
            DriveError::Stalled {
                maneuver,
                iterations,
                wheels,
            } => write!(
                f,
                "{} stalled after {} iterations (L={} R={})",
                maneuver, iterations, wheels.left, wheels.right
            ),
            DriveError::Cancelled {
                maneuver,
                iterations,
            } => write!(f, "{} cancelled after {} iterations", maneuver, iterations),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_failing_field() {
        let err = DriveError::InvalidGeometry(GeometryField::WheelBase);
        assert_eq!(
            err.to_string(),
            "invalid geometry: wheel base must be positive and finite"
        );
    }

    #[test]
    fn display_stalled_reports_counts() {
        let err = DriveError::Stalled {
            maneuver: ManeuverKind::Arc,
            iterations: 42,
            wheels: WheelState { left: 7, right: 9 },
        };
        assert_eq!(err.to_string(), "arc stalled after 42 iterations (L=7 R=9)");
    }
}
