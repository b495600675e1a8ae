// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

pub mod button;
pub mod delay;
pub mod encoder;
pub mod led;
pub mod pins;
pub mod pwm;
pub mod usart;

pub use button::AbortButton;
pub use delay::SysTickDelay;
pub use encoder::{Encoder, QuadratureCounter};
pub use led::Led;
pub use pins::BoardPins;
pub use pwm::{Channel, Pwm4};
pub use usart::Usart;
