// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Pin definitions for the NUCLEO-F767ZI carrying the drive base.
//!
//! | Function | Pins |
//! | -------- | ---- |
//! | Left encoder (TIM2) | PA0 / PA1, AF1 |
//! | Right encoder (TIM3) | PB4 / PB5, AF2 |
//! | Motor PWM (TIM4 CH1/CH2) | PD12 left / PD13 right, AF2 |
//! | Left H-bridge IN1/IN2 | PE2 / PE4 |
//! | Right H-bridge IN1/IN2 | PE5 / PE6 |
//! | USART3 (ST-LINK VCP) | PD8 TX / PD9 RX, AF7 |
//! | LEDs | PB0 green, PB7 blue, PB14 red |
//! | User button | PC13 |

use stm32f7xx_hal::{
    gpio::{gpioa, gpiob, gpioc, gpiod, gpioe, Alternate, Floating, Input, Output, PushPull},
    pac,
    prelude::*,
};

/// All board pins. Construct this once at startup using:
///
/// ```ignore
/// let pins = BoardPins::new(dp.GPIOA, dp.GPIOB, dp.GPIOC, dp.GPIOD, dp.GPIOE);
/// ```
pub struct BoardPins {
    pub leds: LedPins,
    pub usart3: Usart3Pins,
    pub encoders: EncoderPins,
    pub pwm: PwmPins,
    pub left_bridge: LeftBridgePins,
    pub right_bridge: RightBridgePins,
    pub button: gpioc::PC13<Input<Floating>>,
}

pub struct LedPins {
    pub green: gpiob::PB0<Output<PushPull>>, // LD1
    pub blue: gpiob::PB7<Output<PushPull>>,  // LD2
    pub red: gpiob::PB14<Output<PushPull>>,  // LD3
}

pub struct Usart3Pins {
    pub tx: gpiod::PD8<Alternate<7>>,
    pub rx: gpiod::PD9<Alternate<7>>,
}

/// Held only to keep the alternate functions configured; the timers read the pins directly.
pub struct EncoderPins {
    pub left_a: gpioa::PA0<Alternate<1>>,
    pub left_b: gpioa::PA1<Alternate<1>>,
    pub right_a: gpiob::PB4<Alternate<2>>,
    pub right_b: gpiob::PB5<Alternate<2>>,
}

pub struct PwmPins {
    pub left: gpiod::PD12<Alternate<2>>,
    pub right: gpiod::PD13<Alternate<2>>,
}

pub struct LeftBridgePins {
    pub in1: gpioe::PE2<Output<PushPull>>,
    pub in2: gpioe::PE4<Output<PushPull>>,
}

pub struct RightBridgePins {
    pub in1: gpioe::PE5<Output<PushPull>>,
    pub in2: gpioe::PE6<Output<PushPull>>,
}

impl BoardPins {
    pub fn new(
        gpioa: pac::GPIOA,
        gpiob: pac::GPIOB,
        gpioc: pac::GPIOC,
        gpiod: pac::GPIOD,
        gpioe: pac::GPIOE,
    ) -> Self {
        let gpioa = gpioa.split();
        let gpiob = gpiob.split();
        let gpioc = gpioc.split();
        let gpiod = gpiod.split();
        let gpioe = gpioe.split();

        Self {
            leds: LedPins {
                green: gpiob.pb0.into_push_pull_output(),
                blue: gpiob.pb7.into_push_pull_output(),
                red: gpiob.pb14.into_push_pull_output(),
            },

            usart3: Usart3Pins {
                tx: gpiod.pd8.into_alternate::<7>(),
                rx: gpiod.pd9.into_alternate::<7>(),
            },

            encoders: EncoderPins {
                left_a: gpioa.pa0.into_alternate::<1>(),
                left_b: gpioa.pa1.into_alternate::<1>(),
                right_a: gpiob.pb4.into_alternate::<2>(),
                right_b: gpiob.pb5.into_alternate::<2>(),
            },

            pwm: PwmPins {
                left: gpiod.pd12.into_alternate::<2>(),
                right: gpiod.pd13.into_alternate::<2>(),
            },

            left_bridge: LeftBridgePins {
                in1: gpioe.pe2.into_push_pull_output(),
                in2: gpioe.pe4.into_push_pull_output(),
            },

            right_bridge: RightBridgePins {
                in1: gpioe.pe5.into_push_pull_output(),
                in2: gpioe.pe6.into_push_pull_output(),
            },

            button: gpioc.pc13.into_floating_input(),
        }
    }
}
