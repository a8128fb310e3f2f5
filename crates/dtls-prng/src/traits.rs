// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::{PeripheralError, PrngError};

/// A randomness source behind the two-operation DTLS PRNG contract.
///
/// Every backend shares the same call contract: `init` once during bring-up,
/// then `fill` as often as needed. Backends differ only in failure semantics
/// and output quality.
pub trait RandomSource {
    /// Seed accepted by [`init`](Self::init). Sources without a seed use `()`.
    type Seed: Copy;

    /// Whether the source produces deterministic output until it is seeded.
    ///
    /// [`Prng::new`](crate::Prng::new) refuses to wrap such a source without
    /// a seed.
    const REQUIRES_SEED: bool = false;

    /// Prepares the source for use.
    ///
    /// Must be idempotent for hardware sources. Failures of the underlying
    /// source only surface through [`fill`](Self::fill).
    fn init(&mut self, seed: Option<Self::Seed>);

    /// Fills `dest` with random bytes.
    ///
    /// An empty `dest` returns `Ok(())` without touching the source.
    ///
    /// # Errors
    ///
    /// Returns [`PrngError::SourceFault`] if the underlying source reports an
    /// error. The call stops at the first fault; the content of `dest` is
    /// then unspecified.
    fn fill(&mut self, dest: &mut [u8]) -> Result<(), PrngError>;
}

/// Marker for sources suitable for key material.
///
/// Implemented only by sources backed by a hardware TRNG/DRBG or the kernel
/// CSPRNG.
pub trait CryptoSource: RandomSource {}

/// Lifecycle state of an RNG peripheral.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeripheralState {
    /// Not yet initialized.
    Reset,
    /// Initialized and idle.
    Ready,
    /// A word is being generated.
    Busy,
    /// The peripheral reported an error and must be re-initialized.
    Error,
}

/// An on-chip random number generator peripheral producing 32-bit words.
pub trait RngPeripheral {
    /// Returns the current peripheral state.
    fn state(&self) -> PeripheralState;

    /// Performs one-time peripheral initialization.
    fn initialize(&mut self);

    /// Blocks until the peripheral yields a word or reports an error.
    ///
    /// # Errors
    ///
    /// Returns a [`PeripheralError`] describing the fault.
    fn next_word(&mut self) -> Result<u32, PeripheralError>;
}

/// An operating-system pseudo-random generator with a native word width.
pub trait OsGenerator {
    /// Seed accepted by [`reseed`](Self::reseed).
    type Seed: Copy;

    /// One native-width draw. Must not be empty.
    type Word: AsRef<[u8]>;

    /// Whether draws repeat a fixed stream until [`reseed`](Self::reseed) is
    /// called. [`OsEntropy`](crate::OsEntropy) forwards it to
    /// [`RandomSource::REQUIRES_SEED`].
    const REQUIRES_SEED: bool = false;

    /// Reseeds the generator. May affect process-wide state.
    fn reseed(&mut self, seed: Self::Seed);

    /// Draws one native-width value.
    ///
    /// # Errors
    ///
    /// Returns [`PrngError::SourceFault`] if the OS facility fails.
    fn draw(&mut self) -> Result<Self::Word, PrngError>;
}

/// A seedable generator advanced one value at a time.
///
/// [`SoftwarePrng`](crate::SoftwarePrng) keeps the low byte of every step.
pub trait StepGenerator {
    /// Seed accepted by [`seed`](Self::seed).
    type Seed: Copy;

    /// Replaces the generator state with one derived from `seed`.
    fn seed(&mut self, seed: Self::Seed);

    /// Advances the generator and returns the new value.
    fn step(&mut self) -> u32;
}
