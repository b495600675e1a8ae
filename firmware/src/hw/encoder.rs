// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Quadrature wheel encoders on TIM2 (left, 32-bit) and TIM3 (right, 16-bit).
//!
//! Both timers run in encoder mode 3, so one encoder line produces four counts. Counters are
//! zeroed at the start of each maneuver and read back as signed positions; the 16-bit TIM3 value
//! is sign-extended, which is plenty for a single maneuver.

use stm32f7xx_hal::pac;

pub struct Encoder<TIM> {
    tim: TIM,
}

impl<TIM> Encoder<TIM> {
    /// Consume the wrapper and return the underlying timer peripheral.
    #[inline]
    pub fn free(self) -> TIM {
        self.tim
    }
}

/// Common accessors so the chassis can treat both timers alike.
pub trait QuadratureCounter {
    /// Signed position since the last reset.
    fn position(&self) -> i32;
    fn reset(&mut self);
}

impl Encoder<pac::TIM2> {
    /// Configure TIM2 as a quadrature encoder with full 32-bit range.
    pub fn tim2(tim2: pac::TIM2) -> Self {
        let tim = tim2;

        // Disable counter while configuring
        tim.cr1.modify(|_, w| w.cen().clear_bit());

        // Auto-reload: max 32-bit
        tim.arr.write(|w| w.bits(0xFFFF_FFFF));

        // Slave mode: encoder mode 3 (count on both TI1 and TI2)
        tim.smcr.modify(|_, w| w.sms().bits(0b011));

        // CH1/CH2 as inputs from TI1/TI2
        tim.ccmr1_input().modify(|_, w| w.cc1s().ti1().cc2s().ti2());

        tim.ccer.modify(|_, w| {
            w.cc1p()
                .clear_bit()
                .cc2p()
                .clear_bit()
                .cc1e()
                .set_bit()
                .cc2e()
                .set_bit()
        });

        tim.cnt.write(|w| w.bits(0));
        tim.cr1.modify(|_, w| w.cen().set_bit());

        Self { tim }
    }
}

impl QuadratureCounter for Encoder<pac::TIM2> {
    #[inline]
    fn position(&self) -> i32 {
        self.tim.cnt.read().cnt().bits() as i32
    }

    #[inline]
    fn reset(&mut self) {
        self.tim.cnt.write(|w| w.bits(0));
    }
}

impl Encoder<pac::TIM3> {
    /// Configure TIM3 as a quadrature encoder with full 16-bit range.
    pub fn tim3(tim3: pac::TIM3) -> Self {
        let tim = tim3;

        tim.cr1.modify(|_, w| w.cen().clear_bit());

        // Auto-reload: max 16-bit
        tim.arr.write(|w| unsafe { w.bits(0xFFFF) });

        tim.smcr.modify(|_, w| w.sms().bits(0b011));
        tim.ccmr1_input().modify(|_, w| w.cc1s().ti1().cc2s().ti2());

        // The right motor is mounted mirrored; invert TI1 so forward counts up.
        tim.ccer.modify(|_, w| {
            w.cc1p()
                .set_bit()
                .cc2p()
                .clear_bit()
                .cc1e()
                .set_bit()
                .cc2e()
                .set_bit()
        });

        tim.cnt.write(|w| unsafe { w.bits(0) });
        tim.cr1.modify(|_, w| w.cen().set_bit());

        Self { tim }
    }
}

impl QuadratureCounter for Encoder<pac::TIM3> {
    #[inline]
    fn position(&self) -> i32 {
        self.tim.cnt.read().cnt().bits() as i16 as i32
    }

    #[inline]
    fn reset(&mut self) {
        self.tim.cnt.write(|w| unsafe { w.bits(0) });
    }
}
