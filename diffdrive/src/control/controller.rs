// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Polling driver for the maneuvers.
//!
//! The controller owns the drive hardware, so only one maneuver can run at a time. A run looks
//! like:
//!
//! ```text
//! reset encoders, set directions and baseline speeds, enable both motors
//! loop {
//!     cancelled?           -> stop, Cancelled
//!     sample encoders
//!     step the maneuver, report progress
//!     done?                -> stop
//!     no movement / budget -> stop, Stalled
//!     apply speeds
//!     wait poll_interval_ms
//! }
//! disable both motors, settle if the maneuver asks for it
//! ```
//!
//! Motors are disabled exactly once on every exit path.

use embedded_hal::delay::DelayNs;
use log::{info, warn};

use crate::config::ManeuverConfig;
use crate::control::{
    Arc, CancelToken, Maneuver, ManeuverKind, MotorCommand, Rotate, Straight,
};
use crate::diagnostics::{DiagnosticSink, NullSink, Progress};
use crate::encoder::{EncoderSampler, WheelState};
use crate::error::DriveError;
use crate::hal::{Direction, EncoderCounter, MotorDriver, MotorSelect};
use crate::kinematics::{plan, MotionGoal, PulseTarget, RobotGeometry, Turn};

/// Outcome of a completed maneuver.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ManeuverReport {
    pub kind: ManeuverKind,
    /// Samples taken, including the one that met the completion condition.
    pub iterations: u32,
    /// Counts at completion, before any coasting.
    pub wheels: WheelState,
}

/// Drive-base controller. Call one maneuver at a time; each call blocks until it finishes.
pub struct MotionController<H, D, S = NullSink> {
    hal: H,
    delay: D,
    sink: S,
    config: ManeuverConfig,
}

impl<H, D> MotionController<H, D, NullSink>
where
    H: MotorDriver + EncoderCounter,
    D: DelayNs,
{
    /// Controller without progress reporting.
    pub fn new(hal: H, delay: D, config: ManeuverConfig) -> Result<Self, DriveError> {
        Self::with_sink(hal, delay, NullSink, config)
    }
}

impl<H, D, S> MotionController<H, D, S>
where
    H: MotorDriver + EncoderCounter,
    D: DelayNs,
    S: DiagnosticSink,
{
    pub fn with_sink(
        hal: H,
        delay: D,
        sink: S,
        config: ManeuverConfig,
    ) -> Result<Self, DriveError> {
        config.validate()?;
        Ok(Self {
            hal,
            delay,
            sink,
            config,
        })
    }

    #[inline]
    pub fn config(&self) -> &ManeuverConfig {
        &self.config
    }

    /// Replace the tuning used by subsequent maneuvers.
    pub fn set_config(&mut self, config: ManeuverConfig) -> Result<(), DriveError> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    #[inline]
    pub fn hal(&self) -> &H {
        &self.hal
    }

    #[inline]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Release the hardware, delay and sink.
    pub fn free(self) -> (H, D, S) {
        (self.hal, self.delay, self.sink)
    }

    /// Block with motors untouched, e.g. between maneuvers.
    pub fn pause_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }

    /// Drive straight until the left wheel has counted `target_pulses`.
    pub fn straight<C: CancelToken + ?Sized>(
        &mut self,
        target_pulses: u32,
        direction: Direction,
        cancel: &C,
    ) -> Result<ManeuverReport, DriveError> {
        let maneuver = Straight::new(target_pulses, direction, &self.config);
        self.run(maneuver, cancel)
    }

    /// Pivot in place until either wheel reaches `target_pulses - rotate_slack`.
    pub fn rotate<C: CancelToken + ?Sized>(
        &mut self,
        target_pulses: u32,
        turn: Turn,
        cancel: &C,
    ) -> Result<ManeuverReport, DriveError> {
        let maneuver = Rotate::new(target_pulses, turn, &self.config);
        self.run(maneuver, cancel)
    }

    /// Follow an arc until the outer wheel reaches `outer_target + arc_overshoot`.
    pub fn arc<C: CancelToken + ?Sized>(
        &mut self,
        outer_target: u32,
        speed_ratio: f32,
        turn: Turn,
        cancel: &C,
    ) -> Result<ManeuverReport, DriveError> {
        let maneuver = Arc::new(outer_target, speed_ratio, turn, &self.config)?;
        self.run(maneuver, cancel)
    }

    /// Run the maneuver matching a planned target.
    pub fn execute<C: CancelToken + ?Sized>(
        &mut self,
        target: PulseTarget,
        cancel: &C,
    ) -> Result<ManeuverReport, DriveError> {
        match target {
            PulseTarget::Straight { pulses, direction } => self.straight(pulses, direction, cancel),
            PulseTarget::Rotate { pulses, turn } => self.rotate(pulses, turn, cancel),
            PulseTarget::Arc {
                outer_pulses,
                speed_ratio,
                turn,
                ..
            } => self.arc(outer_pulses, speed_ratio, turn, cancel),
        }
    }

    /// Plan `goal` against `geometry` and run it.
    pub fn drive<C: CancelToken + ?Sized>(
        &mut self,
        goal: MotionGoal,
        geometry: &RobotGeometry,
        cancel: &C,
    ) -> Result<ManeuverReport, DriveError> {
        let target = plan(goal, geometry)?;
        self.execute(target, cancel)
    }

    /// Run any maneuver to completion, cancellation or stall.
    pub fn run<M: Maneuver, C: CancelToken + ?Sized>(
        &mut self,
        mut maneuver: M,
        cancel: &C,
    ) -> Result<ManeuverReport, DriveError> {
        let kind = maneuver.kind();
        let start = maneuver.start();

        EncoderSampler::new(&mut self.hal).reset();
        self.apply_directions(&start);
        self.apply_speeds(&start);
        self.hal.enable(MotorSelect::Both);
        info!(
            "{} started: speed L={} R={}",
            kind, start.left.speed, start.right.speed
        );

        let result = self.supervise(&mut maneuver, kind, cancel);

        self.hal.disable(MotorSelect::Both);

        match result {
            Ok(report) => {
                if maneuver.settles() {
                    self.delay.delay_ms(self.config.settle_ms);
                }
                info!(
                    "{} done after {} iterations: L={} R={}",
                    kind, report.iterations, report.wheels.left, report.wheels.right
                );
            }
            Err(err) => warn!("{}", err),
        }

        result
    }

    fn supervise<M: Maneuver, C: CancelToken + ?Sized>(
        &mut self,
        maneuver: &mut M,
        kind: ManeuverKind,
        cancel: &C,
    ) -> Result<ManeuverReport, DriveError> {
        let mut iterations: u32 = 0;
        let mut last = WheelState::ZERO;
        let mut idle: u32 = 0;

        loop {
            if cancel.is_cancelled() {
                return Err(DriveError::Cancelled {
                    maneuver: kind,
                    iterations,
                });
            }

            let wheels = EncoderSampler::new(&mut self.hal).sample();
            iterations += 1;

            let step = maneuver.step(wheels);
            self.sink.record(&Progress {
                maneuver: kind,
                iteration: iterations,
                wheels,
                command: step.command,
            });

            if step.done {
                return Ok(ManeuverReport {
                    kind,
                    iterations,
                    wheels,
                });
            }

            if wheels == last {
                idle += 1;
            } else {
                idle = 0;
                last = wheels;
            }

            if idle >= self.config.stall_iterations || iterations >= self.config.max_iterations {
                return Err(DriveError::Stalled {
                    maneuver: kind,
                    iterations,
                    wheels,
                });
            }

            self.apply_speeds(&step.command);
            self.delay.delay_ms(self.config.poll_interval_ms);
        }
    }

    fn apply_directions(&mut self, command: &MotorCommand) {
        self.hal
            .set_direction(MotorSelect::Left, command.left.direction);
        self.hal
            .set_direction(MotorSelect::Right, command.right.direction);
    }

    fn apply_speeds(&mut self, command: &MotorCommand) {
        self.hal.set_speed(MotorSelect::Left, command.left.speed);
        self.hal.set_speed(MotorSelect::Right, command.right.speed);
    }
}
