// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Build-time backend selection and the two calls used by the DTLS stack.
//!
//! Exactly one of the `hardware`, `embedded-os`, `generic` and `custom`
//! features picks [`PlatformSource`]:
//!
//! | feature       | source                                                         |
//! |---------------|----------------------------------------------------------------|
//! | `hardware`    | `HardwareRng<RdRand>` (x86_64)                                 |
//! | `embedded-os` | `OsEntropy<LibcRand>` (unix), `OsEntropy<SystemGenerator>`     |
//! | `generic`     | `SoftwarePrng<LibcRand>` (unix), `SoftwarePrng<Xorshift64>`    |
//! | `custom`      | `CustomSource` over the linked `__dtls_prng_custom_fill`       |
//!
//! `embedded-os` fills in the OS generator's 16-bit chunks and is where the
//! `skip-reseed` quirk usually applies. `generic` keeps the low byte of one
//! `rand()` per output byte and must be seeded. `custom` hands every fill to
//! the platform (see [`CustomSource`](crate::CustomSource)).
//!
//! The `skip-reseed` feature declares the reseed quirk for the target.

#[cfg(any(
    all(feature = "hardware", feature = "embedded-os"),
    all(feature = "hardware", feature = "generic"),
    all(feature = "hardware", feature = "custom"),
    all(feature = "embedded-os", feature = "generic"),
    all(feature = "embedded-os", feature = "custom"),
    all(feature = "generic", feature = "custom"),
))]
compile_error!(
    "features `hardware`, `embedded-os`, `generic` and `custom` are mutually exclusive \
     (use `default-features = false` to select one)"
);

#[cfg(all(feature = "hardware", not(target_arch = "x86_64")))]
compile_error!(
    "the `hardware` platform uses RDRAND and needs x86_64; \
     wrap your peripheral in `HardwareRng` directly instead"
);

use crate::error::PrngError;
use crate::prng::Prng;
use crate::traits::RandomSource;

#[cfg(any(feature = "embedded-os", feature = "generic"))]
use crate::config::TargetConfig;
#[cfg(feature = "custom")]
use crate::custom::CustomSource;
#[cfg(feature = "hardware")]
use crate::hardware::{HardwareRng, RdRand};
#[cfg(all(any(feature = "embedded-os", feature = "generic"), unix))]
use crate::os::LibcRand;
#[cfg(feature = "embedded-os")]
use crate::os::OsEntropy;
#[cfg(all(feature = "embedded-os", not(unix)))]
use crate::os::SystemGenerator;
#[cfg(feature = "generic")]
use crate::software::SoftwarePrng;

/// Randomness source selected for this build.
#[cfg(all(feature = "hardware", target_arch = "x86_64"))]
pub type PlatformSource = HardwareRng<RdRand>;

/// Randomness source selected for this build.
#[cfg(all(feature = "embedded-os", unix))]
pub type PlatformSource = OsEntropy<LibcRand>;

/// Randomness source selected for this build.
#[cfg(all(feature = "embedded-os", not(unix)))]
pub type PlatformSource = OsEntropy<SystemGenerator>;

/// Randomness source selected for this build.
#[cfg(all(feature = "generic", unix))]
pub type PlatformSource = SoftwarePrng<LibcRand>;

/// Randomness source selected for this build.
#[cfg(all(feature = "generic", not(unix)))]
pub type PlatformSource = SoftwarePrng;

/// Randomness source selected for this build.
#[cfg(feature = "custom")]
pub type PlatformSource = CustomSource;

/// Seed accepted by [`dtls_prng_init`].
pub type PlatformSeed = <PlatformSource as RandomSource>::Seed;

/// Builds the platform source, not yet initialized.
pub fn platform_source() -> PlatformSource {
    #[cfg(feature = "hardware")]
    {
        HardwareRng::new(RdRand::new())
    }

    #[cfg(all(feature = "embedded-os", unix))]
    {
        OsEntropy::new(LibcRand::new(), TargetConfig::platform())
    }

    #[cfg(all(feature = "embedded-os", not(unix)))]
    {
        OsEntropy::new(SystemGenerator::new(), TargetConfig::platform())
    }

    #[cfg(all(feature = "generic", unix))]
    {
        SoftwarePrng::with_generator(LibcRand::new(), TargetConfig::platform())
    }

    #[cfg(all(feature = "generic", not(unix)))]
    {
        SoftwarePrng::new(TargetConfig::platform())
    }

    #[cfg(feature = "custom")]
    {
        CustomSource::registered()
    }
}

/// Brings up the platform source. Call once during security-context setup.
///
/// # Errors
///
/// Returns [`PrngError::MissingSeed`] if the platform source must be seeded
/// and `seed` is `None`.
///
/// # Example
///
/// ```rust
/// use dtls_prng::platform::{dtls_prng, dtls_prng_init};
///
/// let mut prng = dtls_prng_init(Some(Default::default())).expect("Failed to dtls_prng_init()");
///
/// let mut random = [0u8; 32];
/// dtls_prng(&mut prng, &mut random).expect("Failed to dtls_prng()");
/// ```
pub fn dtls_prng_init(seed: Option<PlatformSeed>) -> Result<Prng<PlatformSource>, PrngError> {
    Prng::new(platform_source(), seed)
}

/// Fills `buf` with random bytes from the platform source.
///
/// # Errors
///
/// See [`Prng::fill`].
#[inline(always)]
pub fn dtls_prng(prng: &mut Prng<PlatformSource>, buf: &mut [u8]) -> Result<(), PrngError> {
    prng.fill(buf)
}
