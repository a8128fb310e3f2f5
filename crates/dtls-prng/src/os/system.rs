// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use getrandom::Error as GetRandomError;

use crate::error::PrngError;
use crate::traits::OsGenerator;

/// Kernel CSPRNG, drawn 8 bytes at a time.
///
/// Uses the OS-level CSPRNG via `getrandom`:
/// - Linux/Android: `getrandom()` syscall
/// - macOS/iOS: `getentropy()`
/// - Windows: `ProcessPrng`
/// - WASI: `random_get`
///
/// The kernel pool cannot be reseeded from user space, so the seed is `()`
/// and [`reseed`](OsGenerator::reseed) does nothing.
#[derive(Debug, Default)]
pub struct SystemGenerator {}

impl SystemGenerator {
    /// Creates a handle to the kernel CSPRNG.
    pub fn new() -> Self {
        Self {}
    }

    pub(crate) fn draw_with(
        fill_fn: &dyn Fn(&mut [u8]) -> Result<(), GetRandomError>,
    ) -> Result<[u8; 8], PrngError> {
        let mut word = [0u8; 8];
        fill_fn(&mut word).map_err(|_| PrngError::SourceFault)?;

        Ok(word)
    }
}

impl OsGenerator for SystemGenerator {
    type Seed = ();
    type Word = [u8; 8];

    fn reseed(&mut self, _seed: ()) {
        log::trace!("system generator: kernel pool ignores reseed");
    }

    fn draw(&mut self) -> Result<[u8; 8], PrngError> {
        Self::draw_with(&getrandom::fill)
    }
}
