// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! The fixed demo script: straight, rotate, straight, rotate, arc.
//!
//! Every goal is planned before the first motor is enabled, so a bad geometry or a degenerate
//! arc is reported without the robot moving at all.

use embedded_hal::delay::DelayNs;
use log::info;

use crate::control::{CancelToken, ManeuverReport, MotionController};
use crate::diagnostics::DiagnosticSink;
use crate::error::DriveError;
use crate::hal::{EncoderCounter, MotorDriver};
use crate::kinematics::{plan, MotionGoal, PulseTarget, RobotGeometry};

/// Number of maneuvers in a mission.
pub const MISSION_LEN: usize = 5;

/// Goal magnitudes for the demo script.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Mission {
    pub straight_cm: f32,
    pub rotate_deg: f32,
    pub radius_cm: f32,
    /// Settling pause between consecutive maneuvers.
    pub pause_ms: u32,
}

impl Default for Mission {
    fn default() -> Self {
        Self {
            straight_cm: 75.0,
            rotate_deg: 90.0,
            radius_cm: 30.0,
            pause_ms: 2_000,
        }
    }
}

impl Mission {
    pub fn goals(&self) -> [MotionGoal; MISSION_LEN] {
        [
            MotionGoal::Straight(self.straight_cm),
            MotionGoal::Rotate(self.rotate_deg),
            MotionGoal::Straight(self.straight_cm),
            MotionGoal::Rotate(self.rotate_deg),
            MotionGoal::Arc(self.radius_cm),
        ]
    }

    /// Plan every goal up front.
    pub fn plan(&self, geometry: &RobotGeometry) -> Result<[PulseTarget; MISSION_LEN], DriveError> {
        let goals = self.goals();
        Ok([
            plan(goals[0], geometry)?,
            plan(goals[1], geometry)?,
            plan(goals[2], geometry)?,
            plan(goals[3], geometry)?,
            plan(goals[4], geometry)?,
        ])
    }
}

/// Per-maneuver results of a completed mission.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct MissionReport {
    pub maneuvers: [ManeuverReport; MISSION_LEN],
}

impl MissionReport {
    pub fn total_iterations(&self) -> u32 {
        self.maneuvers.iter().map(|m| m.iterations).sum()
    }
}

/// Run the whole script once. The first failing maneuver aborts the rest.
pub fn run_mission<H, D, S, C>(
    controller: &mut MotionController<H, D, S>,
    geometry: &RobotGeometry,
    mission: &Mission,
    cancel: &C,
) -> Result<MissionReport, DriveError>
where
    H: MotorDriver + EncoderCounter,
    D: DelayNs,
    S: DiagnosticSink,
    C: CancelToken + ?Sized,
{
    let targets = mission.plan(geometry)?;
    let mut report = MissionReport::default();

    for (i, target) in targets.into_iter().enumerate() {
        if i > 0 {
            controller.pause_ms(mission.pause_ms);
        }
        report.maneuvers[i] = controller.execute(target, cancel)?;
    }

    info!(
        "mission complete: {} iterations total",
        report.total_iterations()
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinematics::Turn;

    fn geometry() -> RobotGeometry {
        RobotGeometry::new(6.985, 13.335, 360).unwrap()
    }

    #[test]
    fn default_script_order() {
        let goals = Mission::default().goals();
        assert_eq!(goals[0], MotionGoal::Straight(75.0));
        assert_eq!(goals[1], MotionGoal::Rotate(90.0));
        assert_eq!(goals[2], MotionGoal::Straight(75.0));
        assert_eq!(goals[3], MotionGoal::Rotate(90.0));
        assert_eq!(goals[4], MotionGoal::Arc(30.0));
    }

    #[test]
    fn plan_covers_every_goal() {
        let targets = Mission::default().plan(&geometry()).unwrap();
        assert!(matches!(targets[1], PulseTarget::Rotate { pulses: 172, turn: Turn::Left }));
        assert!(matches!(targets[4], PulseTarget::Arc { .. }));
    }

    #[test]
    fn plan_fails_on_degenerate_arc() {
        let mission = Mission {
            radius_cm: 3.0,
            ..Mission::default()
        };
        assert!(matches!(
            mission.plan(&geometry()),
            Err(DriveError::DegenerateArc { .. })
        ));
    }
}
