// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Seeded byte-at-a-time generator for targets without hardware or OS entropy.

use core::fmt;

use crate::config::TargetConfig;
use crate::error::PrngError;
use crate::traits::{RandomSource, StepGenerator};

/// State used until the generator is seeded (and in place of a zero state,
/// which xorshift can never leave).
pub(crate) const DEFAULT_STATE: u64 = 0x853C_49E6_748F_EA9B;

/// Software PRNG of last resort.
///
/// Steps its [`StepGenerator`] once per output byte, keeps the low 8 bits
/// and discards the rest. The default generator is the self-contained
/// [`Xorshift64`]; hosts can plug in the C library generator
/// (`SoftwarePrng<LibcRand>`). Fine for cookies and other non-hardened uses;
/// prefer [`HardwareRng`](crate::HardwareRng) or
/// [`OsEntropy`](crate::OsEntropy) for key material.
///
/// Must be seeded: without a seed every instance produces the same stream.
/// With [`TargetConfig::skip_reseed`], only the first seed is applied.
#[derive(Debug)]
pub struct SoftwarePrng<G: StepGenerator = Xorshift64> {
    generator: G,
    seeded: bool,
    config: TargetConfig,
}

impl SoftwarePrng {
    /// Creates an unseeded generator over [`Xorshift64`].
    pub fn new(config: TargetConfig) -> Self {
        Self::with_generator(Xorshift64::new(), config)
    }
}

impl<G: StepGenerator> SoftwarePrng<G> {
    /// Creates an unseeded generator over `generator`.
    pub fn with_generator(generator: G, config: TargetConfig) -> Self {
        Self {
            generator,
            seeded: false,
            config,
        }
    }

    /// Returns `true` once a seed has been applied.
    #[inline(always)]
    pub fn is_seeded(&self) -> bool {
        self.seeded
    }

    /// Returns a reference to the generator.
    pub fn generator(&self) -> &G {
        &self.generator
    }
}

impl<G: StepGenerator> RandomSource for SoftwarePrng<G> {
    type Seed = G::Seed;

    const REQUIRES_SEED: bool = true;

    fn init(&mut self, seed: Option<G::Seed>) {
        let Some(seed) = seed else {
            return;
        };

        if self.seeded && self.config.skip_reseed() {
            log::debug!("software prng: reseed skipped by target config");
            return;
        }

        self.generator.seed(seed);
        self.seeded = true;
    }

    fn fill(&mut self, dest: &mut [u8]) -> Result<(), PrngError> {
        for byte in dest.iter_mut() {
            *byte = (self.generator.step() & 0xFF) as u8;
        }

        Ok(())
    }
}

/// xorshift64 (13/7/17) with a splitmix64 seed expansion.
pub struct Xorshift64 {
    state: u64,
}

impl Xorshift64 {
    /// Creates an unseeded generator.
    pub const fn new() -> Self {
        Self {
            state: DEFAULT_STATE,
        }
    }

    /// Expands a 32-bit seed into a non-zero 64-bit state (splitmix64 step).
    pub(crate) fn expand_seed(seed: u32) -> u64 {
        let mut z = (seed as u64).wrapping_add(0x9E37_79B9_7F4A_7C15);
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^= z >> 31;

        if z == 0 { DEFAULT_STATE } else { z }
    }
}

impl Default for Xorshift64 {
    fn default() -> Self {
        Self::new()
    }
}

impl StepGenerator for Xorshift64 {
    type Seed = u32;

    fn seed(&mut self, seed: u32) {
        self.state = Self::expand_seed(seed);
    }

    #[inline(always)]
    fn step(&mut self) -> u32 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;

        self.state as u32
    }
}

impl fmt::Debug for Xorshift64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Xorshift64")
            .field("state", &"[REDACTED]")
            .finish()
    }
}
