// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::PeripheralError;
use crate::support::test_utils::{MockPeripheral, MockPeripheralBehaviour};
use crate::traits::{PeripheralState, RngPeripheral};

#[test]
fn test_mock_peripheral_starts_reset() {
    let mock = MockPeripheral::new(MockPeripheralBehaviour::None);

    assert_eq!(mock.state(), PeripheralState::Reset);
    assert_eq!(mock.initialize_count(), 0);
}

#[test]
fn test_mock_peripheral_ready() {
    let mut mock = MockPeripheral::ready(MockPeripheralBehaviour::None);

    assert_eq!(mock.state(), PeripheralState::Ready);
    assert!(mock.next_word().is_ok());
}

#[test]
fn test_mock_peripheral_not_ready_before_initialize() {
    let mut mock = MockPeripheral::new(MockPeripheralBehaviour::None);

    let result = mock.next_word();

    assert!(matches!(result, Err(PeripheralError::NotReady)));
    assert_eq!(mock.word_count(), 1);
}

#[test]
fn test_mock_peripheral_behaviour_fail_always() {
    let mut mock = MockPeripheral::ready(MockPeripheralBehaviour::FailAlways);

    let result = mock.next_word();

    assert!(matches!(result, Err(PeripheralError::SeedError)));
    assert_eq!(mock.state(), PeripheralState::Error);
}

#[test]
fn test_mock_peripheral_behaviour_fail_at_nth_third_call() {
    let mut mock = MockPeripheral::ready(MockPeripheralBehaviour::FailAtNthWord(3));

    // First two calls succeed
    assert!(mock.next_word().is_ok());
    assert!(mock.next_word().is_ok());

    // Third call fails
    assert!(matches!(mock.next_word(), Err(PeripheralError::SeedError)));

    // Error state until re-initialized
    assert!(matches!(mock.next_word(), Err(PeripheralError::NotReady)));

    mock.initialize();
    assert!(mock.next_word().is_ok());
    assert_eq!(mock.initialize_count(), 1);
}

#[test]
fn test_mock_peripheral_constant_word() {
    let mut mock = MockPeripheral::ready(MockPeripheralBehaviour::None).with_constant_word(0xCAFE);

    assert_eq!(mock.next_word().expect("Failed to next_word()"), 0xCAFE);
    assert_eq!(mock.next_word().expect("Failed to next_word()"), 0xCAFE);
}

#[test]
fn test_mock_peripheral_change_behaviour() {
    let mut mock = MockPeripheral::ready(MockPeripheralBehaviour::None);

    // First works
    assert!(mock.next_word().is_ok());

    // Change behaviour
    mock.change_behaviour(MockPeripheralBehaviour::FailAlways);

    // Now fails
    assert!(mock.next_word().is_err());

    // Change back and re-arm
    mock.change_behaviour(MockPeripheralBehaviour::None);
    mock.initialize();

    // Works again
    assert!(mock.next_word().is_ok());
}
