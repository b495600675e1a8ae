//! Five-maneuver script against the simulated base.
//!
//! Run with: `cargo test -p diffdrive --test mission`

mod common;

use std::sync::atomic::AtomicBool;

use common::{world, SimDelay, SimRobot};
use diffdrive::error::GeometryField;
use diffdrive::{
    run_mission, DriveError, LogSink, ManeuverConfig, ManeuverKind, Mission, MotionController,
    NeverCancel, RobotGeometry,
};

fn geometry() -> RobotGeometry {
    RobotGeometry::new(6.985, 13.335, 360).unwrap()
}

#[test]
fn default_mission_runs_every_maneuver_in_order() {
    let shared = world();
    let mut ctl = MotionController::with_sink(
        SimRobot(shared.clone()),
        SimDelay(shared.clone()),
        LogSink,
        ManeuverConfig::default(),
    )
    .unwrap();

    let report = run_mission(&mut ctl, &geometry(), &Mission::default(), &NeverCancel).unwrap();

    let kinds: Vec<ManeuverKind> = report.maneuvers.iter().map(|m| m.kind).collect();
    assert_eq!(
        kinds,
        [
            ManeuverKind::Straight,
            ManeuverKind::Rotate,
            ManeuverKind::Straight,
            ManeuverKind::Rotate,
            ManeuverKind::Arc,
        ]
    );
    assert!(report.maneuvers[0].wheels.left >= 1230);
    assert!(report.maneuvers[4].wheels.right >= 3805);
    assert_eq!(
        report.total_iterations(),
        report.maneuvers.iter().map(|m| m.iterations).sum::<u32>()
    );

    let w = shared.borrow();
    assert_eq!(w.enable_calls, 5);
    assert_eq!(w.disable_calls, 5);
}

#[test]
fn mission_pauses_between_maneuvers() {
    let shared = world();
    let cfg = ManeuverConfig::default().with_timing(20, 500);
    let mut ctl =
        MotionController::new(SimRobot(shared.clone()), SimDelay(shared.clone()), cfg).unwrap();
    let mission = Mission {
        pause_ms: 1_500,
        ..Mission::default()
    };

    let report = run_mission(&mut ctl, &geometry(), &mission, &NeverCancel).unwrap();

    let polling: u64 = report
        .maneuvers
        .iter()
        .map(|m| (m.iterations as u64 - 1) * 20)
        .sum();
    // Two rotations and one arc settle; four pauses separate five maneuvers.
    let expected = polling + 3 * 500 + 4 * 1_500;
    assert_eq!(shared.borrow().elapsed_ms, expected);
}

#[test]
fn degenerate_arc_aborts_before_any_motion() {
    let shared = world();
    let mut ctl = MotionController::new(
        SimRobot(shared.clone()),
        SimDelay(shared.clone()),
        ManeuverConfig::default(),
    )
    .unwrap();
    let mission = Mission {
        radius_cm: 4.0,
        ..Mission::default()
    };

    let err = run_mission(&mut ctl, &geometry(), &mission, &NeverCancel).unwrap_err();

    assert!(matches!(err, DriveError::DegenerateArc { .. }));
    let w = shared.borrow();
    assert_eq!(w.enable_calls, 0);
    assert_eq!(w.elapsed_ms, 0);
}

#[test]
fn invalid_geometry_fails_fast() {
    assert_eq!(
        RobotGeometry::new(6.985, 0.0, 360),
        Err(DriveError::InvalidGeometry(GeometryField::WheelBase))
    );
}

#[test]
fn stall_aborts_remaining_maneuvers() {
    let shared = world();
    shared.borrow_mut().frozen = true;
    let cfg = ManeuverConfig::default().with_budget(3_000, 20);
    let mut ctl =
        MotionController::new(SimRobot(shared.clone()), SimDelay(shared.clone()), cfg).unwrap();

    let err = run_mission(&mut ctl, &geometry(), &Mission::default(), &NeverCancel).unwrap_err();

    assert!(matches!(
        err,
        DriveError::Stalled {
            maneuver: ManeuverKind::Straight,
            iterations: 20,
            ..
        }
    ));
    assert_eq!(shared.borrow().enable_calls, 1);
}

#[test]
fn cancelled_mission_stops_at_first_maneuver() {
    let shared = world();
    let mut ctl = MotionController::new(
        SimRobot(shared.clone()),
        SimDelay(shared.clone()),
        ManeuverConfig::default(),
    )
    .unwrap();
    let abort = AtomicBool::new(true);

    let err = run_mission(&mut ctl, &geometry(), &Mission::default(), &abort).unwrap_err();

    assert!(matches!(err, DriveError::Cancelled { iterations: 0, .. }));
    assert_eq!(shared.borrow().disable_calls, 1);
}
