// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::PrngError;
use crate::support::test_utils::{MockOsGenerator, MockOsGeneratorBehaviour};
use crate::traits::OsGenerator;

#[test]
fn test_mock_os_generator_sequential_words() {
    let mut mock = MockOsGenerator::new(MockOsGeneratorBehaviour::None);

    assert_eq!(mock.draw().expect("Failed to draw() (#0)"), [0, 1]);
    assert_eq!(mock.draw().expect("Failed to draw() (#1)"), [2, 3]);
    assert_eq!(mock.draw_count(), 2);
}

#[test]
fn test_mock_os_generator_behaviour_fail_always() {
    let mut mock = MockOsGenerator::new(MockOsGeneratorBehaviour::FailAlways);

    let result = mock.draw();

    assert!(result.is_err());
    assert!(matches!(result, Err(PrngError::SourceFault)));
}

#[test]
fn test_mock_os_generator_behaviour_fail_at_nth_first_call() {
    let mut mock = MockOsGenerator::new(MockOsGeneratorBehaviour::FailAtNthDraw(1));

    // First call fails
    assert!(matches!(mock.draw(), Err(PrngError::SourceFault)));

    // Second call succeeds
    assert!(mock.draw().is_ok());
}

#[test]
fn test_mock_os_generator_reseed_tracking() {
    let mut mock = MockOsGenerator::new(MockOsGeneratorBehaviour::None);

    assert_eq!(mock.reseed_count(), 0);
    assert_eq!(mock.last_seed(), None);

    mock.reseed(1);
    mock.reseed(2);

    assert_eq!(mock.reseed_count(), 2);
    assert_eq!(mock.last_seed(), Some(2));
}

#[test]
fn test_mock_os_generator_change_behaviour() {
    let mut mock = MockOsGenerator::new(MockOsGeneratorBehaviour::None);

    assert!(mock.draw().is_ok());

    mock.change_behaviour(MockOsGeneratorBehaviour::FailAlways);
    assert!(mock.draw().is_err());

    mock.change_behaviour(MockOsGeneratorBehaviour::None);
    assert!(mock.draw().is_ok());
}
