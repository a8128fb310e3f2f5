// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Register-level driver for the STM32 RNG block.

use core::ptr;

use crate::error::PeripheralError;
use crate::traits::{PeripheralState, RngPeripheral};

/// Register offsets, in 32-bit words.
const CR: usize = 0;
const SR: usize = 1;
const DR: usize = 2;

/// CR: RNG enable.
pub(crate) const CR_RNGEN: u32 = 1 << 2;
/// SR: data ready.
pub(crate) const SR_DRDY: u32 = 1 << 0;
/// SR: clock error current status.
pub(crate) const SR_CECS: u32 = 1 << 1;
/// SR: seed error current status.
pub(crate) const SR_SECS: u32 = 1 << 2;
/// SR: clock error interrupt status (rc_w0).
pub(crate) const SR_CEIS: u32 = 1 << 5;
/// SR: seed error interrupt status (rc_w0).
pub(crate) const SR_SEIS: u32 = 1 << 6;

/// STM32 RNG peripheral (F2/F4/F7/L4 families).
///
/// Polls `SR` until `DRDY` is set, with no timeout: a stalled peripheral
/// stalls the caller. Seed and clock errors move the driver to
/// [`PeripheralState::Error`]. A new `initialize` re-arms it: it clears the
/// latched `SEIS`/`CEIS` flags and restarts the block by clearing and then
/// setting `RNGEN`.
#[derive(Debug)]
pub struct Stm32Rng {
    regs: *mut u32,
    state: PeripheralState,
}

impl Stm32Rng {
    /// Creates a driver for the register block at `base`.
    ///
    /// # Safety
    ///
    /// `base` must point to the RNG register block (CR, SR, DR), valid for
    /// volatile reads and writes for the lifetime of the driver, and no other
    /// code may drive the same block concurrently.
    pub const unsafe fn new(base: *mut u32) -> Self {
        Self {
            regs: base,
            state: PeripheralState::Reset,
        }
    }

    #[inline(always)]
    fn read(&self, offset: usize) -> u32 {
        // SAFETY: `new` guarantees `regs` addresses a valid register block.
        unsafe { ptr::read_volatile(self.regs.add(offset)) }
    }

    #[inline(always)]
    fn write(&mut self, offset: usize, value: u32) {
        // SAFETY: `new` guarantees `regs` addresses a valid register block.
        unsafe { ptr::write_volatile(self.regs.add(offset), value) }
    }
}

impl RngPeripheral for Stm32Rng {
    fn state(&self) -> PeripheralState {
        self.state
    }

    fn initialize(&mut self) {
        let cr = self.read(CR);

        if self.state == PeripheralState::Error {
            // Interrupt flags clear on a written 0; writing 1 leaves a bit as is.
            let sr = self.read(SR);
            self.write(SR, sr & !(SR_SEIS | SR_CEIS));
            self.write(CR, cr & !CR_RNGEN);
        }

        self.write(CR, cr | CR_RNGEN);

        self.state = PeripheralState::Ready;
    }

    fn next_word(&mut self) -> Result<u32, PeripheralError> {
        if self.state != PeripheralState::Ready {
            return Err(PeripheralError::NotReady);
        }

        self.state = PeripheralState::Busy;

        loop {
            let sr = self.read(SR);

            if sr & SR_SECS != 0 {
                self.state = PeripheralState::Error;
                return Err(PeripheralError::SeedError);
            }

            if sr & SR_CECS != 0 {
                self.state = PeripheralState::Error;
                return Err(PeripheralError::ClockError);
            }

            if sr & SR_DRDY != 0 {
                let word = self.read(DR);
                self.state = PeripheralState::Ready;

                return Ok(word);
            }

            core::hint::spin_loop();
        }
    }
}
