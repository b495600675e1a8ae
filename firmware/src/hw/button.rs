// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Blue user button, used as the mission abort switch.

use diffdrive::CancelToken;
use stm32f7xx_hal::gpio::{self, Floating, Input};

/// Active-high push button (the Nucleo button has an external pull-down).
pub struct AbortButton<const P: char, const N: u8> {
    pin: gpio::Pin<P, N, Input<Floating>>,
}

impl<const P: char, const N: u8> AbortButton<P, N> {
    pub fn new(pin: gpio::Pin<P, N, Input<Floating>>) -> Self {
        Self { pin }
    }

    #[inline]
    pub fn is_pressed(&self) -> bool {
        self.pin.is_high()
    }
}

impl<const P: char, const N: u8> CancelToken for AbortButton<P, N> {
    fn is_cancelled(&self) -> bool {
        self.is_pressed()
    }
}
