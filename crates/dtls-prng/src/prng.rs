// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use rand_core::{TryCryptoRng, TryRngCore};

use crate::error::PrngError;
use crate::traits::{CryptoSource, RandomSource};

/// Lifecycle state of a [`Prng`] handle.
///
/// A handle only exists after a successful `init`, so there is no
/// uninitialized state here: a bare [`RandomSource`] that has not been
/// wrapped yet plays that role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrngState {
    /// Initialized; `fill` forwards to the source.
    Ready,
    /// The source faulted; [`Prng::reinit`] is required before the next fill.
    Faulted,
}

/// Caller-owned handle around exactly one randomness source.
///
/// Replaces a process-wide generator with an explicit context: callers pass
/// it by `&mut` into every fill, so access is serialized by ownership. Share
/// it across threads only behind a lock.
///
/// # Example
///
/// ```rust
/// use dtls_prng::{Prng, PrngState, SoftwarePrng, TargetConfig};
///
/// let mut prng = Prng::new(SoftwarePrng::new(TargetConfig::new()), Some(0x5eed))
///     .expect("Failed to Prng::new()");
///
/// let mut cookie = [0u8; 32];
/// prng.fill(&mut cookie).expect("Failed to fill()");
/// assert_eq!(prng.state(), PrngState::Ready);
/// ```
pub struct Prng<S: RandomSource> {
    source: S,
    state: PrngState,
}

impl<S: RandomSource> Prng<S> {
    /// Initializes `source` and wraps it in a ready handle.
    ///
    /// # Errors
    ///
    /// Returns [`PrngError::MissingSeed`] if the source requires a seed and
    /// `seed` is `None`.
    pub fn new(mut source: S, seed: Option<S::Seed>) -> Result<Self, PrngError> {
        if S::REQUIRES_SEED && seed.is_none() {
            return Err(PrngError::MissingSeed);
        }

        source.init(seed);
        log::debug!("prng ready (seeded: {})", seed.is_some());

        Ok(Self {
            source,
            state: PrngState::Ready,
        })
    }

    /// Fills `dest` with random bytes.
    ///
    /// # Errors
    ///
    /// - [`PrngError::Faulted`] if a previous fill faulted and no
    ///   [`reinit`](Self::reinit) happened since. `dest` is left untouched.
    /// - [`PrngError::SourceFault`] if the source fails during this call. The
    ///   handle moves to [`PrngState::Faulted`].
    pub fn fill(&mut self, dest: &mut [u8]) -> Result<(), PrngError> {
        if self.state == PrngState::Faulted {
            return Err(PrngError::Faulted);
        }

        let result = self.source.fill(dest);

        if result.is_err() {
            self.state = PrngState::Faulted;
        }

        result
    }

    /// Re-initializes the source and returns the handle to
    /// [`PrngState::Ready`].
    ///
    /// For hardware sources this re-arms a faulted peripheral. Sources that
    /// require a seed keep their running state when `seed` is `None`.
    pub fn reinit(&mut self, seed: Option<S::Seed>) {
        self.source.init(seed);
        log::debug!("prng re-initialized (was {:?})", self.state);

        self.state = PrngState::Ready;
    }

    /// Returns the current lifecycle state.
    #[inline(always)]
    pub fn state(&self) -> PrngState {
        self.state
    }

    /// Returns a reference to the wrapped source.
    #[inline(always)]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Consumes the handle, returning the wrapped source.
    pub fn into_inner(self) -> S {
        self.source
    }
}

impl<S: RandomSource> TryRngCore for Prng<S> {
    type Error = PrngError;

    fn try_next_u32(&mut self) -> Result<u32, Self::Error> {
        let mut bytes = [0u8; 4];
        self.fill(&mut bytes)?;

        Ok(u32::from_le_bytes(bytes))
    }

    fn try_next_u64(&mut self) -> Result<u64, Self::Error> {
        let mut bytes = [0u8; 8];
        self.fill(&mut bytes)?;

        Ok(u64::from_le_bytes(bytes))
    }

    fn try_fill_bytes(&mut self, dst: &mut [u8]) -> Result<(), Self::Error> {
        self.fill(dst)
    }
}

impl<S: CryptoSource> TryCryptoRng for Prng<S> {}
