// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Dual-input H-bridge (L298N style) for one drive motor.
//!
//! IN1/IN2 select the rotation sense and a PWM channel on the enable input sets the speed. The PWM
//! timer is not owned here and must be passed in as `&mut Pwm4` so that both bridges can share
//! one timer.
//!
//! | State | IN1 | IN2 | EN |
//! | ----- | --- | --- | -- |
//! | Forward | H | L | PWM |
//! | Backward | L | H | PWM |
//! | Coast (disabled) | L | L | 0 |

use diffdrive::Direction;
use stm32f7xx_hal::gpio::{self, Output, PushPull};

use crate::hw::{Channel, Pwm4};

pub struct HBridge<const IN1_P: char, const IN1_N: u8, const IN2_P: char, const IN2_N: u8> {
    in1: gpio::Pin<IN1_P, IN1_N, Output<PushPull>>,
    in2: gpio::Pin<IN2_P, IN2_N, Output<PushPull>>,
    channel: Channel,
    direction: Direction,
    level: u8,
    enabled: bool,
}

impl<const IN1_P: char, const IN1_N: u8, const IN2_P: char, const IN2_N: u8>
    HBridge<IN1_P, IN1_N, IN2_P, IN2_N>
{
    /// Create a bridge in the coasting state.
    pub fn new(
        mut in1: gpio::Pin<IN1_P, IN1_N, Output<PushPull>>,
        mut in2: gpio::Pin<IN2_P, IN2_N, Output<PushPull>>,
        channel: Channel,
    ) -> Self {
        in1.set_low();
        in2.set_low();
        Self {
            in1,
            in2,
            channel,
            direction: Direction::Forward,
            level: 0,
            enabled: false,
        }
    }

    /// Drive the output stage with the stored direction and level.
    pub fn enable(&mut self, pwm: &mut Pwm4) {
        self.enabled = true;
        self.apply_direction();
        pwm.set_level(self.channel, self.level);
    }

    /// Zero the duty and float both inputs. Direction and level are kept for the next enable.
    pub fn disable(&mut self, pwm: &mut Pwm4) {
        self.enabled = false;
        pwm.set_level(self.channel, 0);
        self.in1.set_low();
        self.in2.set_low();
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
        if self.enabled {
            self.apply_direction();
        }
    }

    pub fn set_level(&mut self, pwm: &mut Pwm4, level: u8) {
        self.level = level;
        if self.enabled {
            pwm.set_level(self.channel, level);
        }
    }

    #[inline]
    pub fn level(&self) -> u8 {
        self.level
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn apply_direction(&mut self) {
        // Both low first so a reversal never passes through brake (IN1 = IN2 = H).
        self.in1.set_low();
        self.in2.set_low();
        match self.direction {
            Direction::Forward => self.in1.set_high(),
            Direction::Backward => self.in2.set_high(),
        }
    }
}
