// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! `log` backend that writes one CRLF-terminated line per record to USART3.

use core::cell::RefCell;
use core::fmt::Write;

use cortex_m::interrupt::{self, Mutex};
use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};
use stm32f7xx_hal::pac::USART3;

use crate::hw::Usart;

static SERIAL: Mutex<RefCell<Option<Usart<USART3>>>> = Mutex::new(RefCell::new(None));
static LOGGER: UsartLogger = UsartLogger;

struct UsartLogger;

impl Log for UsartLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        interrupt::free(|cs| {
            if let Some(usart) = SERIAL.borrow(cs).borrow_mut().as_mut() {
                let _ = write!(
                    usart,
                    "[{:<5}] {}: {}\r\n",
                    record.level(),
                    record.target(),
                    record.args()
                );
            }
        });
    }

    fn flush(&self) {
        interrupt::free(|cs| {
            if let Some(usart) = SERIAL.borrow(cs).borrow_mut().as_mut() {
                usart.flush();
            }
        });
    }
}

/// Hand the port to the logger and install it. Call once, before anything logs.
pub fn init(usart: Usart<USART3>, level: LevelFilter) -> Result<(), SetLoggerError> {
    interrupt::free(|cs| SERIAL.borrow(cs).replace(Some(usart)));
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}
