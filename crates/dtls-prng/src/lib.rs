// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # dtls_prng
//!
//! Pluggable randomness sources for a DTLS stack running on bare-metal
//! microcontrollers, embedded OS targets and general-purpose hosts.
//!
//! Every backend exposes the same two operations, `init` and `fill`. The
//! platform decides which backend is linked; callers only ever see
//! "give me N bytes".
//!
//! ## Core Types
//!
//! - [`Prng`]: Caller-owned handle; cannot exist uninitialized
//! - [`HardwareRng`]: On-chip RNG peripheral ([`Stm32Rng`], `RdRand`)
//! - [`OsEntropy`]: OS generator in native-width chunks (`LibcRand`, [`SystemGenerator`])
//! - [`SoftwarePrng`]: Seeded byte-at-a-time fallback of last resort ([`Xorshift64`], `LibcRand`)
//! - [`CustomSource`]: Platform-supplied fill routine
//!
//! ## Traits
//!
//! - [`RandomSource`]: The `init`/`fill` contract
//! - [`RngPeripheral`]: Interface for RNG peripherals
//! - [`OsGenerator`]: Interface for OS generators
//! - [`StepGenerator`]: Interface for generators stepped once per byte
//! - [`CryptoSource`]: Marker for sources suitable for key material
//!
//! ## Example
//!
//! ```rust
//! use dtls_prng::{OsEntropy, Prng, SystemGenerator, TargetConfig};
//!
//! let source = OsEntropy::new(SystemGenerator::new(), TargetConfig::new());
//! let mut prng = Prng::new(source, None).expect("Failed to Prng::new()");
//!
//! let mut client_random = [0u8; 32];
//! prng.fill(&mut client_random).expect("Failed to fill()");
//! ```
//!
//! ## Platform Selection
//!
//! The `hardware`, `embedded-os`, `generic` (default) and `custom` features
//! pick the backend behind [`platform::dtls_prng_init`] and [`platform::dtls_prng`].
//! They are mutually exclusive. See [`platform`].
//!
//! ## Concurrency
//!
//! No backend synchronizes internally. [`Prng`] methods take `&mut self`;
//! guard a shared handle with a single lock. `LibcRand` state is
//! process-global, so all users of libc `rand` must share that lock.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

#[cfg(test)]
mod tests;

mod config;
mod custom;
mod error;
mod hardware;
mod os;
mod prng;
mod software;
mod support;
mod traits;

#[cfg(any(
    feature = "hardware",
    feature = "embedded-os",
    feature = "generic",
    feature = "custom"
))]
pub mod platform;

pub use config::TargetConfig;
pub use custom::{CustomSource, FillFn};
pub use error::{PeripheralError, PrngError};
#[cfg(target_arch = "x86_64")]
pub use hardware::RdRand;
pub use hardware::{HardwareRng, Stm32Rng};
#[cfg(unix)]
pub use os::LibcRand;
pub use os::{OsEntropy, SystemGenerator};
pub use prng::{Prng, PrngState};
pub use software::{SoftwarePrng, Xorshift64};
pub use traits::{
    CryptoSource, OsGenerator, PeripheralState, RandomSource, RngPeripheral, StepGenerator,
};

#[cfg(any(test, feature = "test-utils"))]
pub use support::test_utils;
