// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::config::TargetConfig;

#[test]
fn test_new_has_no_quirks() {
    assert!(!TargetConfig::new().skip_reseed());
    assert_eq!(TargetConfig::new(), TargetConfig::default());
}

#[test]
fn test_with_skip_reseed() {
    let config = TargetConfig::new().with_skip_reseed(true);
    assert!(config.skip_reseed());

    let config = config.with_skip_reseed(false);
    assert!(!config.skip_reseed());
}

#[test]
fn test_platform_follows_skip_reseed_feature() {
    assert_eq!(
        TargetConfig::platform().skip_reseed(),
        cfg!(feature = "skip-reseed")
    );
}
