// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Drive-base firmware for the NUCLEO-F767ZI.
//!
//! Runs the five-maneuver demo once after a short start delay, logging progress over the ST-LINK
//! virtual COM port. The green LED is lit while driving, blue on success, red on any fault.
//! Holding the blue user button aborts the run.

#![no_main]
#![no_std]
#![allow(dead_code)]

use cortex_m_rt::entry;
use panic_halt as _;

use cortex_m::delay::Delay;
use embedded_hal::delay::DelayNs;
use hal::{
    pac,
    prelude::*,
    serial::{Config, Serial},
};
use log::{error, info};
use stm32f7xx_hal as hal;

use diffdrive::{run_mission, LogSink, MotionController, RobotGeometry};

mod chassis;
mod config;
mod drivers;
mod hw;
mod logger;

use chassis::Chassis;
use drivers::HBridge;
use hw::{AbortButton, BoardPins, Channel, Encoder, Led, Pwm4, SysTickDelay, Usart};

#[entry]
fn main() -> ! {
    // Peripherals
    let dp = pac::Peripherals::take().unwrap();
    let cp = cortex_m::Peripherals::take().unwrap();

    // Timer clocks for the encoders and PWM, before RCC is consumed
    dp.RCC
        .apb1enr
        .modify(|_, w| w.tim2en().set_bit().tim3en().set_bit().tim4en().set_bit());

    // Clocks: HSI at 16 MHz with undivided APB1, so the timer clock equals SYSCLK
    let rcc = dp.RCC.constrain();
    let clocks = rcc.cfgr.freeze();
    let timer_clock_hz = clocks.sysclk().raw();

    let pins = BoardPins::new(dp.GPIOA, dp.GPIOB, dp.GPIOC, dp.GPIOD, dp.GPIOE);

    // LEDs
    let mut led_green = Led::active_high(pins.leds.green);
    let mut led_blue = Led::active_high(pins.leds.blue);
    let mut led_red = Led::active_high(pins.leds.red);

    // USART3 (ST-LINK VCP) behind `log`
    let usart_cfg = Config {
        baud_rate: config::USART_BAUD.bps(),
        ..Default::default()
    };
    let serial = Serial::new(
        dp.USART3,
        (pins.usart3.tx, pins.usart3.rx),
        &clocks,
        usart_cfg,
    );
    let mut usart = Usart::new(serial);
    usart.println("diffdrive firmware");
    if logger::init(usart, config::LOG_LEVEL).is_err() {
        led_red.on();
    }

    // Drive train
    let _encoder_pins = pins.encoders;
    let _pwm_pins = pins.pwm;
    let pwm = Pwm4::new(dp.TIM4, timer_clock_hz, config::PWM_FREQ_HZ);
    let left = HBridge::new(pins.left_bridge.in1, pins.left_bridge.in2, Channel::Ch1);
    let right = HBridge::new(pins.right_bridge.in1, pins.right_bridge.in2, Channel::Ch2);
    let chassis = Chassis::new(
        pwm,
        left,
        right,
        Encoder::tim2(dp.TIM2),
        Encoder::tim3(dp.TIM3),
    );

    let mut delay = SysTickDelay::new(Delay::new(cp.SYST, clocks.sysclk().raw()));
    let abort = AbortButton::new(pins.button);

    let geometry = match RobotGeometry::new(
        config::WHEEL_DIAMETER_CM,
        config::WHEEL_BASE_CM,
        config::PULSES_PER_REV,
    ) {
        Ok(geometry) => geometry,
        Err(err) => {
            error!("bad geometry: {}", err);
            fault(&mut led_red);
        }
    };

    info!(
        "{} cm per pulse, starting in {} ms",
        geometry.cm_per_pulse(),
        config::START_DELAY_MS
    );
    delay.delay_ms(config::START_DELAY_MS);

    let mut controller =
        match MotionController::with_sink(chassis, delay, LogSink, config::maneuver_config()) {
            Ok(controller) => controller,
            Err(err) => {
                error!("bad maneuver config: {}", err);
                fault(&mut led_red);
            }
        };

    led_green.on();
    let outcome = run_mission(&mut controller, &geometry, &config::MISSION, &abort);
    led_green.off();

    match outcome {
        Ok(report) => {
            for (i, m) in report.maneuvers.iter().enumerate() {
                info!(
                    "#{} {}: {} iterations, L={} R={}",
                    i + 1,
                    m.kind,
                    m.iterations,
                    m.wheels.left,
                    m.wheels.right
                );
            }
            led_blue.on();
        }
        Err(err) => {
            error!("mission aborted: {}", err);
            led_red.on();
        }
    }

    loop {
        cortex_m::asm::wfi();
    }
}

/// Park with the red LED lit.
fn fault<const P: char, const N: u8>(led: &mut Led<P, N>) -> ! {
    led.on();
    loop {
        cortex_m::asm::wfi();
    }
}
