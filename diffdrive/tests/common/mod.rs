//! Simulated differential base for driving the controller without hardware.
//!
//! `SimRobot` implements the motor and encoder traits, `SimDelay` implements `DelayNs`. Both share
//! one `World`: commanded speeds are integrated into encoder counts whenever the controller
//! sleeps, at `pulses_per_level_ms` pulses per speed level per millisecond, scaled per wheel.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use diffdrive::{Direction, EncoderCounter, MotorDriver, MotorSelect, Side};
use embedded_hal::delay::DelayNs;

#[derive(Clone, Debug, Default)]
pub struct Wheel {
    pub enabled: bool,
    pub direction: Option<Direction>,
    pub speed: u8,
    pub count: i32,
    /// Fractional pulses carried between ticks.
    pub residue: f64,
    /// Multiplier on this wheel's pulse rate, e.g. to model a weaker motor.
    pub gain: f64,
    /// Speeds commanded over the run, in order.
    pub speed_log: Vec<u8>,
}

#[derive(Clone, Debug)]
pub struct World {
    pub left: Wheel,
    pub right: Wheel,
    pub pulses_per_level_ms: f64,
    /// Encoders stop counting (disconnected sensor / stalled base).
    pub frozen: bool,
    pub elapsed_ms: u64,
    pub enable_calls: u32,
    pub disable_calls: u32,
}

impl World {
    pub fn wheel(&self, side: Side) -> &Wheel {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    fn wheel_mut(&mut self, side: Side) -> &mut Wheel {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    fn selected(&mut self, motor: MotorSelect) -> Vec<&mut Wheel> {
        match motor {
            MotorSelect::Left => vec![&mut self.left],
            MotorSelect::Right => vec![&mut self.right],
            MotorSelect::Both => vec![&mut self.left, &mut self.right],
        }
    }

    fn advance(&mut self, ms: f64) {
        self.elapsed_ms += ms as u64;
        if self.frozen {
            return;
        }
        let rate = self.pulses_per_level_ms;
        for side in [Side::Left, Side::Right] {
            let wheel = self.wheel_mut(side);
            if !wheel.enabled {
                continue;
            }
            let travel = wheel.speed as f64 * rate * wheel.gain * ms + wheel.residue;
            let whole = travel.floor();
            wheel.residue = travel - whole;
            match wheel.direction {
                Some(Direction::Backward) => wheel.count -= whole as i32,
                _ => wheel.count += whole as i32,
            }
        }
    }
}

pub type Shared = Rc<RefCell<World>>;

pub fn world() -> Shared {
    let wheel = Wheel {
        gain: 1.0,
        ..Wheel::default()
    };
    Rc::new(RefCell::new(World {
        left: wheel.clone(),
        right: wheel,
        // 150 * 0.002 * 20 ms = 6 pulses per iteration at baseline.
        pulses_per_level_ms: 0.002,
        frozen: false,
        elapsed_ms: 0,
        enable_calls: 0,
        disable_calls: 0,
    }))
}

pub struct SimRobot(pub Shared);

impl MotorDriver for SimRobot {
    fn enable(&mut self, motor: MotorSelect) {
        let mut world = self.0.borrow_mut();
        world.enable_calls += 1;
        for wheel in world.selected(motor) {
            wheel.enabled = true;
        }
    }

    fn disable(&mut self, motor: MotorSelect) {
        let mut world = self.0.borrow_mut();
        world.disable_calls += 1;
        for wheel in world.selected(motor) {
            wheel.enabled = false;
        }
    }

    fn set_direction(&mut self, motor: MotorSelect, direction: Direction) {
        for wheel in self.0.borrow_mut().selected(motor) {
            wheel.direction = Some(direction);
        }
    }

    fn set_speed(&mut self, motor: MotorSelect, level: u8) {
        for wheel in self.0.borrow_mut().selected(motor) {
            wheel.speed = level;
            wheel.speed_log.push(level);
        }
    }
}

impl EncoderCounter for SimRobot {
    fn reset_count(&mut self, side: Side) {
        let mut world = self.0.borrow_mut();
        let wheel = world.wheel_mut(side);
        wheel.count = 0;
        wheel.residue = 0.0;
    }

    fn read_count(&self, side: Side) -> i32 {
        self.0.borrow().wheel(side).count
    }
}

pub struct SimDelay(pub Shared);

impl DelayNs for SimDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.0.borrow_mut().advance(ns as f64 / 1_000_000.0);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.0.borrow_mut().advance(ms as f64);
    }
}
