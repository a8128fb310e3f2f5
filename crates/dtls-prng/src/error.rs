// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for dtls-prng.
use thiserror::Error;

/// Errors returned by [`Prng`](crate::Prng) and the randomness sources.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PrngError {
    /// The underlying entropy source signaled an error mid-fill.
    ///
    /// Bytes written before the fault must not be treated as random.
    #[error("SourceFault")]
    SourceFault,

    /// The handle faulted earlier and must be re-initialized before use.
    #[error("Faulted")]
    Faulted,

    /// The source must be seeded before it produces output.
    #[error("MissingSeed")]
    MissingSeed,
}

/// Errors reported by an RNG peripheral.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PeripheralError {
    /// Peripheral is not in the ready state.
    #[error("NotReady")]
    NotReady,

    /// Seed error: the noise source produced a faulty sequence.
    #[error("SeedError")]
    SeedError,

    /// Clock error: the peripheral clock is outside its valid range.
    #[error("ClockError")]
    ClockError,

    /// The peripheral kept reporting no data after every retry.
    #[error("Exhausted")]
    Exhausted,

    /// The peripheral does not exist on this machine.
    #[error("Unsupported")]
    Unsupported,
}
