// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Backend delegating to an operating-system generator.

#[cfg(unix)]
mod libc_rand;
mod system;

#[cfg(unix)]
pub use libc_rand::LibcRand;
pub use system::SystemGenerator;

use crate::config::TargetConfig;
use crate::error::PrngError;
use crate::traits::{CryptoSource, OsGenerator, RandomSource};

/// OS generator backend.
///
/// Fills in native-width chunks, drawing a fresh word per chunk. The last
/// chunk copies only the bytes still missing from one more draw; the rest of
/// that draw is discarded. With a 2-byte word, a 5-byte fill performs three
/// draws (2 + 2 + 1).
///
/// `init(Some(seed))` reseeds the generator unless the target declares
/// [`TargetConfig::skip_reseed`]. Reseeding may change process-wide state
/// (see `LibcRand`). A generator that repeats a fixed stream until reseeded
/// makes this source require a seed.
#[derive(Debug)]
pub struct OsEntropy<G: OsGenerator> {
    generator: G,
    config: TargetConfig,
}

impl<G: OsGenerator> OsEntropy<G> {
    /// Wraps `generator` with the given target configuration.
    pub fn new(generator: G, config: TargetConfig) -> Self {
        Self { generator, config }
    }

    /// Returns a reference to the generator.
    pub fn generator(&self) -> &G {
        &self.generator
    }
}

impl<G: OsGenerator> RandomSource for OsEntropy<G> {
    type Seed = G::Seed;

    const REQUIRES_SEED: bool = G::REQUIRES_SEED;

    fn init(&mut self, seed: Option<G::Seed>) {
        let Some(seed) = seed else {
            return;
        };

        if self.config.skip_reseed() {
            log::debug!("os entropy: reseed skipped by target config");
            return;
        }

        self.generator.reseed(seed);
    }

    fn fill(&mut self, dest: &mut [u8]) -> Result<(), PrngError> {
        let mut remaining = dest;

        while !remaining.is_empty() {
            let word = self.generator.draw()?;
            let bytes = word.as_ref();

            if bytes.is_empty() {
                return Err(PrngError::SourceFault);
            }

            let n = bytes.len().min(remaining.len());
            let (head, tail) = core::mem::take(&mut remaining).split_at_mut(n);
            head.copy_from_slice(&bytes[..n]);

            remaining = tail;
        }

        Ok(())
    }
}

impl CryptoSource for OsEntropy<SystemGenerator> {}
