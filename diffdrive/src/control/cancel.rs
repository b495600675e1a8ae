// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Operator abort, polled once per control iteration.

use core::sync::atomic::{AtomicBool, Ordering};

/// Anything the controller can poll to abort a running maneuver.
pub trait CancelToken {
    fn is_cancelled(&self) -> bool;
}

/// Token that never fires.
#[derive(Copy, Clone, Debug, Default)]
pub struct NeverCancel;

impl CancelToken for NeverCancel {
    #[inline]
    fn is_cancelled(&self) -> bool {
        false
    }
}

/// Set from an interrupt handler or another context; the controller only reads it.
impl CancelToken for AtomicBool {
    #[inline]
    fn is_cancelled(&self) -> bool {
        self.load(Ordering::Relaxed)
    }
}

impl<T: CancelToken + ?Sized> CancelToken for &T {
    #[inline]
    fn is_cancelled(&self) -> bool {
        (**self).is_cancelled()
    }
}
