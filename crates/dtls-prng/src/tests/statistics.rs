// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Chi-squared uniformity sanity checks over single-byte fills.

use crate::config::TargetConfig;
use crate::hardware::HardwareRng;
use crate::os::{OsEntropy, SystemGenerator};
use crate::software::SoftwarePrng;
use crate::support::test_utils::{MockPeripheral, MockPeripheralBehaviour};
use crate::traits::RandomSource;

const SAMPLES: usize = 10_000;
const EXPECTED_PER_VALUE: f64 = SAMPLES as f64 / 256.0;

// Chi-squared critical value for df=255, p=0.001 is ~330.5
const MAX_CHI_SQUARED: f64 = 350.0;

/// Collects `SAMPLES` independent 1-byte fills and returns the statistic.
fn chi_squared<S: RandomSource>(source: &mut S) -> f64 {
    let mut counts = [0u32; 256];

    for _ in 0..SAMPLES {
        let mut byte = [0u8; 1];
        source.fill(&mut byte).expect("Failed to fill()");
        counts[byte[0] as usize] += 1;
    }

    counts
        .iter()
        .map(|&count| {
            let diff = count as f64 - EXPECTED_PER_VALUE;
            (diff * diff) / EXPECTED_PER_VALUE
        })
        .sum()
}

fn assert_uniform(chi_squared: f64) {
    assert!(
        chi_squared < MAX_CHI_SQUARED,
        "Chi-squared too high: {:.2} (distribution may not be uniform)",
        chi_squared
    );
}

#[test]
fn test_software_uniformity() {
    let mut prng = SoftwarePrng::new(TargetConfig::new());
    prng.init(Some(0x0DD5_EED5));

    assert_uniform(chi_squared(&mut prng));
}

#[test]
fn test_system_uniformity() {
    let mut entropy = OsEntropy::new(SystemGenerator::new(), TargetConfig::new());

    assert_uniform(chi_squared(&mut entropy));
}

#[test]
fn test_hardware_uniformity() {
    let mut rng = HardwareRng::new(MockPeripheral::new(MockPeripheralBehaviour::None));
    rng.init(None);

    assert_uniform(chi_squared(&mut rng));
}

#[cfg(unix)]
#[test]
#[serial_test::serial(libc_rand)]
fn test_libc_uniformity() {
    use crate::os::LibcRand;

    let mut entropy = OsEntropy::new(LibcRand::new(), TargetConfig::new());
    entropy.init(Some(0x5eed));

    assert_uniform(chi_squared(&mut entropy));
}

#[cfg(unix)]
#[test]
#[serial_test::serial(libc_rand)]
fn test_libc_bytewise_uniformity() {
    use crate::os::LibcRand;

    let mut prng = SoftwarePrng::with_generator(LibcRand::new(), TargetConfig::new());
    prng.init(Some(0x5eed));

    assert_uniform(chi_squared(&mut prng));
}
