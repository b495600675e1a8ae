// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # diffdrive
//!
//! Encoder-based motion control for a two-wheeled differential drive base, written in Rust and
//! free of `std` so the same code runs on the robot's MCU and in host-side tests.
//!
//! Motion goals (drive straight, pivot in place, follow an arc) are converted into per-wheel
//! encoder pulse targets, then executed by closed-loop maneuvers that keep the two wheels at the
//! commanded kinematic ratio.
//!
//! ## Crate Structure
//!
//! | Module | Purpose |
//! | ------ | -------- |
//! | [`kinematics`] | Geometry, goals and pulse-target math |
//! | [`hal`] | Motor/encoder traits implemented by board crates |
//! | [`encoder`] | Encoder sampling |
//! | [`control`] | Straight, rotate and arc maneuvers plus the polling driver |
//! | [`config`] | Per-maneuver tuning and supervision budgets |
//! | [`diagnostics`] | Progress sinks (log, text, none) |
//! | [`sequence`] | The fixed five-maneuver demo script |
//! | [`error`] | Error type |
//!
//! ## Getting Started
//!
//! Run the host tests:
//!
//! ```bash
//! cargo test -p diffdrive
//! ```
//!
//! Flash the robot (from `firmware/`):
//!
//! ```bash
//! cargo run --release
//! ```
//!
//! ## License
//!
//! Licensed under the **MIT License**.
//! See the `LICENSE` file in the repository root for full terms.
//!
//! © 2025–2026 Christopher Liu

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod control;
pub mod diagnostics;
pub mod encoder;
pub mod error;
pub mod hal;
pub mod kinematics;
pub mod sequence;

pub use config::{ManeuverConfig, SpeedLimits};
pub use control::{CancelToken, ManeuverKind, ManeuverReport, MotionController, NeverCancel};
pub use diagnostics::{DiagnosticSink, LogSink, NullSink, Progress, WriteSink};
pub use encoder::{EncoderSampler, WheelState};
pub use error::DriveError;
pub use hal::{Direction, EncoderCounter, MotorDriver, MotorSelect, Side};
pub use kinematics::{plan, MotionGoal, PulseTarget, RobotGeometry, Turn};
pub use sequence::{run_mission, Mission, MissionReport};
