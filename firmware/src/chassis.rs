// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! The drive base as seen by `diffdrive`: two H-bridges on one PWM timer plus two encoders.

use diffdrive::{Direction, EncoderCounter, MotorDriver, MotorSelect, Side};
use stm32f7xx_hal::pac;

use crate::drivers::HBridge;
use crate::hw::{Encoder, Pwm4, QuadratureCounter};

pub type LeftBridge = HBridge<'E', 2, 'E', 4>;
pub type RightBridge = HBridge<'E', 5, 'E', 6>;

pub struct Chassis {
    pwm: Pwm4,
    left: LeftBridge,
    right: RightBridge,
    left_encoder: Encoder<pac::TIM2>,
    right_encoder: Encoder<pac::TIM3>,
}

impl Chassis {
    pub fn new(
        pwm: Pwm4,
        left: LeftBridge,
        right: RightBridge,
        left_encoder: Encoder<pac::TIM2>,
        right_encoder: Encoder<pac::TIM3>,
    ) -> Self {
        Self {
            pwm,
            left,
            right,
            left_encoder,
            right_encoder,
        }
    }
}

impl MotorDriver for Chassis {
    fn enable(&mut self, motor: MotorSelect) {
        if motor.includes(Side::Left) {
            self.left.enable(&mut self.pwm);
        }
        if motor.includes(Side::Right) {
            self.right.enable(&mut self.pwm);
        }
    }

    fn disable(&mut self, motor: MotorSelect) {
        if motor.includes(Side::Left) {
            self.left.disable(&mut self.pwm);
        }
        if motor.includes(Side::Right) {
            self.right.disable(&mut self.pwm);
        }
    }

    fn set_direction(&mut self, motor: MotorSelect, direction: Direction) {
        if motor.includes(Side::Left) {
            self.left.set_direction(direction);
        }
        if motor.includes(Side::Right) {
            self.right.set_direction(direction);
        }
    }

    fn set_speed(&mut self, motor: MotorSelect, level: u8) {
        if motor.includes(Side::Left) {
            self.left.set_level(&mut self.pwm, level);
        }
        if motor.includes(Side::Right) {
            self.right.set_level(&mut self.pwm, level);
        }
    }
}

impl EncoderCounter for Chassis {
    fn reset_count(&mut self, side: Side) {
        match side {
            Side::Left => self.left_encoder.reset(),
            Side::Right => self.right_encoder.reset(),
        }
    }

    fn read_count(&self, side: Side) -> i32 {
        match side {
            Side::Left => self.left_encoder.position(),
            Side::Right => self.right_encoder.position(),
        }
    }
}
