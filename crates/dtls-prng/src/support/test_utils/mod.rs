// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for mocking RNG peripherals and OS generators.
//!
//! Provides mock implementations with configurable behavior for testing.

mod mock_os_generator;
mod mock_peripheral;

pub use mock_os_generator::{MockOsGenerator, MockOsGeneratorBehaviour};
pub use mock_peripheral::{MockPeripheral, MockPeripheralBehaviour};
