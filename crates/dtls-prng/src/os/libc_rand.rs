// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::PrngError;
use crate::traits::{OsGenerator, StepGenerator};

/// The C library `rand`/`srand` generator.
///
/// As an [`OsGenerator`] it is drawn 16 bits at a time. As a
/// [`StepGenerator`] each step is one `rand()` call.
///
/// The generator state is process-global: every `LibcRand` (and any other
/// code calling `rand`) shares it. Callers must serialize reseeding and
/// drawing across the whole process. Until `srand` is called, libc replays
/// the stream of `srand(1)`, so sources built on it require a seed.
///
/// Not suitable for key material.
#[derive(Debug, Default)]
pub struct LibcRand {}

impl LibcRand {
    /// Creates a handle to the process-global generator.
    pub fn new() -> Self {
        Self {}
    }

    #[inline(always)]
    fn srand(seed: u32) {
        // SAFETY: srand has no preconditions.
        unsafe { libc::srand(seed as libc::c_uint) };
    }

    #[inline(always)]
    fn rand() -> libc::c_int {
        // SAFETY: rand has no preconditions.
        unsafe { libc::rand() }
    }
}

impl OsGenerator for LibcRand {
    type Seed = u32;
    type Word = [u8; 2];

    const REQUIRES_SEED: bool = true;

    fn reseed(&mut self, seed: u32) {
        Self::srand(seed);
    }

    fn draw(&mut self) -> Result<[u8; 2], PrngError> {
        Ok((Self::rand() as u16).to_ne_bytes())
    }
}

impl StepGenerator for LibcRand {
    type Seed = u32;

    fn seed(&mut self, seed: u32) {
        Self::srand(seed);
    }

    fn step(&mut self) -> u32 {
        Self::rand() as u32
    }
}
