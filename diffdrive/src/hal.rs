// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Hardware boundary consumed by the motion controller.
//!
//! The controller never touches timers or GPIO directly. Board crates implement [`MotorDriver`]
//! and [`EncoderCounter`] over their own peripherals (see the `firmware` crate's `Chassis`), and
//! tests implement them over a simulated drive base.
//!
//! All calls are infallible: pin and timer register writes on the target cannot fail, and a
//! wheel that never moves is detected by the controller's stall supervision instead.

/// One physical wheel.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Which motor(s) a command addresses.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MotorSelect {
    Left,
    Right,
    Both,
}

impl MotorSelect {
    /// Whether this selector addresses `side`.
    #[inline]
    pub fn includes(self, side: Side) -> bool {
        matches!(
            (self, side),
            (MotorSelect::Both, _)
                | (MotorSelect::Left, Side::Left)
                | (MotorSelect::Right, Side::Right)
        )
    }
}

impl From<Side> for MotorSelect {
    fn from(side: Side) -> Self {
        match side {
            Side::Left => MotorSelect::Left,
            Side::Right => MotorSelect::Right,
        }
    }
}

/// Wheel rotation direction, relative to driving the robot forward.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    #[inline]
    pub fn reversed(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }
}

/// Motor output stage.
///
/// `level` is a PWM speed level in `0..=255`; the controller keeps it inside its configured safe
/// range.
pub trait MotorDriver {
    fn enable(&mut self, motor: MotorSelect);
    fn disable(&mut self, motor: MotorSelect);
    fn set_direction(&mut self, motor: MotorSelect, direction: Direction);
    fn set_speed(&mut self, motor: MotorSelect, level: u8);
}

/// Incremental wheel encoder counters.
///
/// Counts may be direction-aware (negative while the wheel turns backward); the
/// [`EncoderSampler`](crate::encoder::EncoderSampler) folds them into magnitudes.
pub trait EncoderCounter {
    fn reset_count(&mut self, side: Side);
    fn read_count(&self, side: Side) -> i32;
}

impl<T: MotorDriver + ?Sized> MotorDriver for &mut T {
    fn enable(&mut self, motor: MotorSelect) {
        (**self).enable(motor)
    }

    fn disable(&mut self, motor: MotorSelect) {
        (**self).disable(motor)
    }

    fn set_direction(&mut self, motor: MotorSelect, direction: Direction) {
        (**self).set_direction(motor, direction)
    }

    fn set_speed(&mut self, motor: MotorSelect, level: u8) {
        (**self).set_speed(motor, level)
    }
}

impl<T: EncoderCounter + ?Sized> EncoderCounter for &mut T {
    fn reset_count(&mut self, side: Side) {
        (**self).reset_count(side)
    }

    fn read_count(&self, side: Side) -> i32 {
        (**self).read_count(side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_includes_each_side() {
        assert!(MotorSelect::Both.includes(Side::Left));
        assert!(MotorSelect::Both.includes(Side::Right));
        assert!(MotorSelect::Left.includes(Side::Left));
        assert!(!MotorSelect::Left.includes(Side::Right));
        assert!(!MotorSelect::Right.includes(Side::Left));
    }

    #[test]
    fn reversed_flips_direction() {
        assert_eq!(Direction::Forward.reversed(), Direction::Backward);
        assert_eq!(Direction::Backward.reversed(), Direction::Forward);
    }
}
