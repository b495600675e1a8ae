// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Per-iteration progress reporting.
//!
//! The controller hands every sample to a [`DiagnosticSink`]. Sinks are purely observational:
//! which one is installed (if any) never changes what the motors are told to do.
//!
//! - [`NullSink`] discards everything.
//! - [`LogSink`] forwards to the `log` facade at debug level.
//! - [`WriteSink`] prints one line per iteration to any `core::fmt::Write`, e.g. a USART.

use core::fmt::{self, Write};

use crate::control::{ManeuverKind, MotorCommand};
use crate::encoder::WheelState;

/// Snapshot of one control iteration.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Progress {
    pub maneuver: ManeuverKind,
    pub iteration: u32,
    pub wheels: WheelState,
    pub command: MotorCommand,
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} L={} R={}",
            self.maneuver, self.wheels.left, self.wheels.right
        )
    }
}

pub trait DiagnosticSink {
    fn record(&mut self, progress: &Progress);
}

#[derive(Copy, Clone, Debug, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    #[inline]
    fn record(&mut self, _progress: &Progress) {}
}

#[derive(Copy, Clone, Debug, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn record(&mut self, progress: &Progress) {
        log::debug!(
            "{} #{} speed L={} R={}",
            progress,
            progress.iteration,
            progress.command.left.speed,
            progress.command.right.speed
        );
    }
}

/// Line-oriented text sink. Lines end in CRLF for serial terminals.
pub struct WriteSink<W: Write> {
    out: W,
}

impl<W: Write> WriteSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn free(self) -> W {
        self.out
    }
}

impl<W: Write> DiagnosticSink for WriteSink<W> {
    fn record(&mut self, progress: &Progress) {
        // Dropped lines are not worth stopping the loop for.
        let _ = write!(self.out, "{}\r\n", progress);
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn record(&mut self, progress: &Progress) {
        (**self).record(progress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::WheelCommand;
    use crate::hal::Direction;

    fn progress(left: u32, right: u32) -> Progress {
        let wheel = WheelCommand::new(Direction::Forward, 150);
        Progress {
            maneuver: ManeuverKind::Straight,
            iteration: 3,
            wheels: WheelState::new(left, right),
            command: MotorCommand {
                left: wheel,
                right: wheel,
            },
        }
    }

    #[test]
    fn write_sink_prints_crlf_lines() {
        let mut sink = WriteSink::new(String::new());
        sink.record(&progress(12, 10));
        sink.record(&progress(25, 24));
        assert_eq!(sink.free(), "straight L=12 R=10\r\nstraight L=25 R=24\r\n");
    }

    #[test]
    fn sinks_compose_through_mut_refs() {
        fn feed<S: DiagnosticSink>(mut sink: S) {
            sink.record(&progress(1, 2));
        }

        let mut inner = WriteSink::new(String::new());
        feed(&mut inner);
        assert_eq!(inner.free(), "straight L=1 R=2\r\n");
    }
}
