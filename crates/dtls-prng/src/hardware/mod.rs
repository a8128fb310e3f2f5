// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Backend driving an on-chip RNG peripheral.

#[cfg(target_arch = "x86_64")]
mod rdrand;
pub(crate) mod stm32;

#[cfg(target_arch = "x86_64")]
pub use rdrand::RdRand;
pub use stm32::Stm32Rng;

use crate::error::PrngError;
use crate::traits::{CryptoSource, PeripheralState, RandomSource, RngPeripheral};

/// Hardware RNG backend.
///
/// Requests one 32-bit word per output byte and keeps its low 8 bits. The
/// other 24 bits are discarded, trading throughput for simplicity.
///
/// `init` takes no seed. It initializes the peripheral only when it is not
/// already ready, so repeated calls are safe.
///
/// # Example
///
/// ```rust,ignore
/// use dtls_prng::{HardwareRng, Prng, Stm32Rng};
///
/// // RNG block of an STM32F7
/// let peripheral = unsafe { Stm32Rng::new(0x5006_0800 as *mut u32) };
/// let mut prng = Prng::new(HardwareRng::new(peripheral), None)?;
///
/// let mut nonce = [0u8; 12];
/// prng.fill(&mut nonce)?;
/// ```
#[derive(Debug)]
pub struct HardwareRng<P: RngPeripheral> {
    peripheral: P,
}

impl<P: RngPeripheral> HardwareRng<P> {
    /// Wraps a peripheral. Nothing is touched until `init`.
    pub fn new(peripheral: P) -> Self {
        Self { peripheral }
    }

    /// Returns a reference to the peripheral.
    pub fn peripheral(&self) -> &P {
        &self.peripheral
    }
}

impl<P: RngPeripheral> RandomSource for HardwareRng<P> {
    type Seed = ();

    fn init(&mut self, _seed: Option<()>) {
        let state = self.peripheral.state();

        if state != PeripheralState::Ready {
            log::debug!("hardware rng: initializing peripheral (state {:?})", state);
            self.peripheral.initialize();
        }
    }

    fn fill(&mut self, dest: &mut [u8]) -> Result<(), PrngError> {
        for byte in dest.iter_mut() {
            let word = self
                .peripheral
                .next_word()
                .map_err(|_| PrngError::SourceFault)?;

            *byte = (word & 0xFF) as u8;
        }

        Ok(())
    }
}

impl<P: RngPeripheral> CryptoSource for HardwareRng<P> {}
