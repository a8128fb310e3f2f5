// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Platform-supplied fill routine.
//!
//! With the `custom` feature, [`platform`](crate::platform) routes every
//! fill to a function the final binary links in:
//!
//! ```rust,ignore
//! use dtls_prng::PrngError;
//!
//! #[unsafe(no_mangle)]
//! unsafe extern "Rust" fn __dtls_prng_custom_fill(
//!     dest: *mut u8,
//!     len: usize,
//! ) -> Result<(), PrngError> {
//!     let buf = unsafe { core::slice::from_raw_parts_mut(dest, len) };
//!     board::trng_fill(buf).map_err(|_| PrngError::SourceFault)
//! }
//! ```
//!
//! The platform seeds its own generator, so [`CustomSource`] takes no seed.

use crate::error::PrngError;
use crate::traits::RandomSource;

/// Fill routine wrapped by [`CustomSource`].
pub type FillFn = fn(&mut [u8]) -> Result<(), PrngError>;

/// Source delegating every fill to a platform routine.
///
/// Any error the routine returns is reported as [`PrngError::SourceFault`].
#[derive(Debug, Clone, Copy)]
pub struct CustomSource {
    fill_fn: FillFn,
}

impl CustomSource {
    /// Wraps `fill_fn`.
    pub const fn new(fill_fn: FillFn) -> Self {
        Self { fill_fn }
    }

    /// Wraps the `__dtls_prng_custom_fill` routine linked into the binary.
    #[cfg(feature = "custom")]
    pub const fn registered() -> Self {
        Self::new(registered_fill)
    }
}

impl RandomSource for CustomSource {
    type Seed = ();

    fn init(&mut self, _seed: Option<()>) {
        log::trace!("custom source: platform owns seeding");
    }

    fn fill(&mut self, dest: &mut [u8]) -> Result<(), PrngError> {
        if dest.is_empty() {
            return Ok(());
        }

        (self.fill_fn)(dest).map_err(|_| PrngError::SourceFault)
    }
}

#[cfg(feature = "custom")]
unsafe extern "Rust" {
    fn __dtls_prng_custom_fill(dest: *mut u8, len: usize) -> Result<(), PrngError>;
}

#[cfg(feature = "custom")]
fn registered_fill(dest: &mut [u8]) -> Result<(), PrngError> {
    // SAFETY: `dest` is valid for writes of `dest.len()` bytes for the whole
    // call, and the linked routine has the declared signature.
    unsafe { __dtls_prng_custom_fill(dest.as_mut_ptr(), dest.len()) }
}
