// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

pub mod h_bridge;

pub use h_bridge::HBridge;
