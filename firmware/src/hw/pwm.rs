// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Two-channel PWM on TIM4 (CH1 = left motor, CH2 = right motor) via direct PAC register access.

use stm32f7xx_hal::pac;

/// Timer tick after prescaling.
const TICK_HZ: u32 = 1_000_000;

// CCMR1: OC1M = OC2M = PWM mode 1 (0b110), OC1PE/OC2PE preload enabled.
const CCMR1_PWM1_PRELOAD: u32 = (0b110 << 4) | (1 << 3) | (0b110 << 12) | (1 << 11);
// CCER: CC1E | CC2E, active high.
const CCER_CH1_CH2: u32 = (1 << 0) | (1 << 4);

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Channel {
    Ch1,
    Ch2,
}

pub struct Pwm4 {
    tim: pac::TIM4,
    period: u16,
}

impl Pwm4 {
    /// Start TIM4 at `freq_hz` with both channels at zero duty.
    ///
    /// `timer_clock_hz` is the APB1 timer clock feeding TIM4.
    pub fn new(tim4: pac::TIM4, timer_clock_hz: u32, freq_hz: u32) -> Self {
        let tim = tim4;

        tim.cr1.modify(|_, w| w.cen().clear_bit());

        let psc = (timer_clock_hz / TICK_HZ).saturating_sub(1);
        let period = (TICK_HZ / freq_hz.max(1)).clamp(2, u16::MAX as u32) as u16;

        tim.psc.write(|w| unsafe { w.bits(psc) });
        tim.arr.write(|w| unsafe { w.bits(period as u32 - 1) });
        tim.ccr1().write(|w| unsafe { w.bits(0) });
        tim.ccr2().write(|w| unsafe { w.bits(0) });
        tim.ccmr1_output().write(|w| unsafe { w.bits(CCMR1_PWM1_PRELOAD) });
        tim.ccer.write(|w| unsafe { w.bits(CCER_CH1_CH2) });

        // Auto-reload preload, then latch PSC/ARR with an update event
        tim.cr1.modify(|_, w| w.arpe().set_bit());
        tim.egr.write(|w| w.ug().set_bit());
        tim.cr1.modify(|_, w| w.cen().set_bit());

        Self { tim, period }
    }

    /// Compare value that gives 100% duty.
    #[inline]
    pub fn max_duty(&self) -> u16 {
        self.period
    }

    pub fn set_duty(&mut self, channel: Channel, duty: u16) {
        let duty = duty.min(self.period) as u32;
        match channel {
            Channel::Ch1 => self.tim.ccr1().write(|w| unsafe { w.bits(duty) }),
            Channel::Ch2 => self.tim.ccr2().write(|w| unsafe { w.bits(duty) }),
        }
    }

    /// Map a 0..=255 speed level onto this channel's duty range.
    pub fn set_level(&mut self, channel: Channel, level: u8) {
        let duty = (level as u32 * self.period as u32) / u8::MAX as u32;
        self.set_duty(channel, duty as u16);
    }

    #[inline]
    pub fn free(self) -> pac::TIM4 {
        self.tim
    }
}
