// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Robot constants: chassis geometry, drive tuning and the demo script.

use diffdrive::{ManeuverConfig, Mission};
use log::LevelFilter;

/// 2.75 in wheels.
pub const WHEEL_DIAMETER_CM: f32 = 6.985;
/// 5.25 in track width, contact patch to contact patch.
pub const WHEEL_BASE_CM: f32 = 13.335;
/// 90-line encoders read in x4 quadrature.
pub const PULSES_PER_REV: u32 = 360;

pub const PWM_FREQ_HZ: u32 = 20_000;
pub const USART_BAUD: u32 = 115_200;
pub const LOG_LEVEL: LevelFilter = LevelFilter::Info;

/// Time to step away from the robot after reset.
pub const START_DELAY_MS: u32 = 3_000;

pub const MISSION: Mission = Mission {
    straight_cm: 75.0,
    rotate_deg: 90.0,
    radius_cm: 30.0,
    pause_ms: 2_000,
};

pub fn maneuver_config() -> ManeuverConfig {
    ManeuverConfig::default()
        .with_baseline_speed(150)
        .with_speed_limits(60, 230)
        .with_timing(20, 1_000)
}
