// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Per-target configuration passed into backend construction.

/// Per-target quirks.
///
/// Some targets must not reseed their generator because seeding touches
/// another peripheral (e.g. a radio that samples noise for the seed and
/// must not be disturbed once it is running). Such targets declare the quirk
/// here instead of the backends matching on platform names.
///
/// # Example
///
/// ```rust
/// use dtls_prng::TargetConfig;
///
/// const RADIO_TARGET: TargetConfig = TargetConfig::new().with_skip_reseed(true);
///
/// assert!(RADIO_TARGET.skip_reseed());
/// assert!(!TargetConfig::default().skip_reseed());
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TargetConfig {
    skip_reseed: bool,
}

impl TargetConfig {
    /// Configuration with no quirks.
    pub const fn new() -> Self {
        Self { skip_reseed: false }
    }

    /// Sets whether the backend must skip reseeding its generator.
    pub const fn with_skip_reseed(mut self, skip: bool) -> Self {
        self.skip_reseed = skip;
        self
    }

    /// Returns `true` if reseeding must be skipped on this target.
    #[inline(always)]
    pub const fn skip_reseed(&self) -> bool {
        self.skip_reseed
    }

    /// Configuration selected by the crate's build features.
    ///
    /// The `skip-reseed` feature enables the reseed quirk.
    pub const fn platform() -> Self {
        Self::new().with_skip_reseed(cfg!(feature = "skip-reseed"))
    }
}
