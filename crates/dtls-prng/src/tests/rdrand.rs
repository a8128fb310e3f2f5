// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::{PeripheralError, PrngError};
use crate::hardware::{HardwareRng, RdRand};
use crate::prng::Prng;
use crate::traits::{PeripheralState, RngPeripheral};

#[test]
fn test_new_starts_in_reset() {
    let rng = RdRand::new();

    assert_eq!(rng.state(), PeripheralState::Reset);
}

#[test]
fn test_next_word_before_initialize_not_ready() {
    let mut rng = RdRand::new();

    assert!(matches!(rng.next_word(), Err(PeripheralError::NotReady)));
}

#[test]
fn test_initialize_follows_cpu_support() {
    let mut rng = RdRand::new();

    rng.initialize();

    if RdRand::is_supported() {
        assert_eq!(rng.state(), PeripheralState::Ready);
        assert!(rng.next_word().is_ok());
    } else {
        assert_eq!(rng.state(), PeripheralState::Error);
        assert!(matches!(rng.next_word(), Err(PeripheralError::Unsupported)));
    }
}

#[test]
fn test_prng_over_rdrand() {
    let mut prng = Prng::new(HardwareRng::new(RdRand::new()), None).expect("Failed to Prng::new()");
    let mut first = [0u8; 32];
    let mut second = [0u8; 32];

    if !RdRand::is_supported() {
        assert!(matches!(prng.fill(&mut first), Err(PrngError::SourceFault)));
        return;
    }

    prng.fill(&mut first).expect("Failed to fill() (#0)");
    prng.fill(&mut second).expect("Failed to fill() (#1)");

    assert_ne!(first, second);
}
