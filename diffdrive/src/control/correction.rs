// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Bang-bang speed correction.
//!
//! Not a PID: every iteration where the tracking error exceeds the deadband moves the speed one
//! level toward closing it. Nothing is reset between iterations, so a persistent imbalance keeps
//! pushing the speed the same way until it hits the configured limits.

use crate::config::SpeedLimits;

/// Next PWM level for a wheel.
///
/// `error` is how far the wheel is *behind* where it should be, in pulses; positive speeds it
/// up, negative slows it down. Errors within `±deadband` leave the speed unchanged. The result
/// always lies inside `limits`.
pub fn next_speed(current: u8, error: i64, deadband: u32, limits: SpeedLimits) -> u8 {
    let deadband = deadband as i64;
    let nudged = if error > deadband {
        current as i32 + 1
    } else if error < -deadband {
        current as i32 - 1
    } else {
        current as i32
    };
    limits.clamp(nudged)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIMITS: SpeedLimits = SpeedLimits::new(60, 230);

    #[test]
    fn lagging_wheel_speeds_up_one_level() {
        assert_eq!(next_speed(150, 5, 1, LIMITS), 151);
    }

    #[test]
    fn leading_wheel_slows_down_one_level() {
        assert_eq!(next_speed(150, -5, 1, LIMITS), 149);
    }

    #[test]
    fn error_inside_deadband_holds() {
        assert_eq!(next_speed(150, 1, 1, LIMITS), 150);
        assert_eq!(next_speed(150, -1, 1, LIMITS), 150);
        assert_eq!(next_speed(150, 0, 0, LIMITS), 150);
    }

    #[test]
    fn step_size_ignores_error_magnitude() {
        assert_eq!(next_speed(150, 10_000, 1, LIMITS), 151);
    }

    #[test]
    fn result_is_clamped() {
        assert_eq!(next_speed(230, 50, 1, LIMITS), 230);
        assert_eq!(next_speed(60, -50, 1, LIMITS), 60);
        // A current value already outside the range is pulled back in.
        assert_eq!(next_speed(10, 0, 1, LIMITS), 60);
    }

    #[test]
    fn repeated_imbalance_accumulates() {
        let mut speed = 150;
        for _ in 0..20 {
            speed = next_speed(speed, 8, 1, LIMITS);
        }
        assert_eq!(speed, 170);
    }
}
