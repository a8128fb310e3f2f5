// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! x86_64 on-chip DRBG exposed as an RNG peripheral.

use crate::error::PeripheralError;
use crate::traits::{PeripheralState, RngPeripheral};

/// Maximum retry attempts per word.
///
/// RDRAND can transiently report no data when the DRBG is reseeding.
const MAX_RETRIES: usize = 10;

cpufeatures::new!(x86_64_rdrand_cpuid, "rdrand");

/// Attempts one RDRAND read. Returns `None` when the carry flag is clear.
#[inline(always)]
fn try_rdrand() -> Option<u32> {
    let value: u32;
    let success: u8;

    // SAFETY: only called after cpuid reported RDRAND support.
    unsafe {
        core::arch::asm!(
            "rdrand {value:e}",
            "setc {success}",
            value = out(reg) value,
            success = out(reg_byte) success,
            options(nomem, nostack)
        );
    }

    (success != 0).then_some(value)
}

/// RDRAND peripheral.
///
/// `initialize` checks cpuid; on CPUs without the instruction the peripheral
/// ends in [`PeripheralState::Error`] and every word fails with
/// [`PeripheralError::Unsupported`].
#[derive(Debug)]
pub struct RdRand {
    state: PeripheralState,
}

impl RdRand {
    /// Creates an uninitialized peripheral.
    pub const fn new() -> Self {
        Self {
            state: PeripheralState::Reset,
        }
    }

    /// Returns `true` if this CPU supports RDRAND.
    pub fn is_supported() -> bool {
        x86_64_rdrand_cpuid::get()
    }
}

impl Default for RdRand {
    fn default() -> Self {
        Self::new()
    }
}

impl RngPeripheral for RdRand {
    fn state(&self) -> PeripheralState {
        self.state
    }

    fn initialize(&mut self) {
        self.state = if Self::is_supported() {
            PeripheralState::Ready
        } else {
            log::debug!("rdrand: instruction not supported by this cpu");
            PeripheralState::Error
        };
    }

    fn next_word(&mut self) -> Result<u32, PeripheralError> {
        match self.state {
            PeripheralState::Ready => {}
            PeripheralState::Error if !Self::is_supported() => {
                return Err(PeripheralError::Unsupported);
            }
            _ => return Err(PeripheralError::NotReady),
        }

        for _ in 0..MAX_RETRIES {
            if let Some(word) = try_rdrand() {
                return Ok(word);
            }
        }

        self.state = PeripheralState::Error;
        Err(PeripheralError::Exhausted)
    }
}
