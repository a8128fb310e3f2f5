// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::PeripheralError;
use crate::os::SystemGenerator;
use crate::traits::{OsGenerator, PeripheralState, RngPeripheral};

/// Configurable behavior for [`MockPeripheral`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockPeripheralBehaviour {
    /// Normal operation (words come from the system CSPRNG).
    None,
    /// Always fail next_word.
    FailAlways,
    /// Fail next_word on the Nth call (1-indexed: 1 = first call fails).
    FailAtNthWord(usize),
}

/// Mock RNG peripheral for testing.
///
/// Tracks peripheral state like a HAL driver does and allows simulating
/// faults via [`MockPeripheralBehaviour`].
#[derive(Debug)]
pub struct MockPeripheral {
    inner: SystemGenerator,
    behaviour: MockPeripheralBehaviour,
    state: PeripheralState,
    constant_word: Option<u32>,
    initialize_count: usize,
    word_count: usize,
}

impl MockPeripheral {
    /// Creates a mock peripheral in [`PeripheralState::Reset`].
    pub fn new(behaviour: MockPeripheralBehaviour) -> Self {
        Self {
            inner: SystemGenerator::new(),
            behaviour,
            state: PeripheralState::Reset,
            constant_word: None,
            initialize_count: 0,
            word_count: 0,
        }
    }

    /// Creates a mock peripheral that is already initialized.
    pub fn ready(behaviour: MockPeripheralBehaviour) -> Self {
        let mut mock = Self::new(behaviour);
        mock.state = PeripheralState::Ready;
        mock
    }

    /// Makes every successful next_word return `word`.
    pub fn with_constant_word(mut self, word: u32) -> Self {
        self.constant_word = Some(word);
        self
    }

    /// Changes the mock behavior at runtime.
    pub fn change_behaviour(&mut self, behaviour: MockPeripheralBehaviour) {
        self.behaviour = behaviour;
    }

    /// Returns how many times initialize ran.
    pub fn initialize_count(&self) -> usize {
        self.initialize_count
    }

    /// Returns how many words were requested.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    fn produce_word(&mut self) -> Result<u32, PeripheralError> {
        if let Some(word) = self.constant_word {
            return Ok(word);
        }

        let bytes = self
            .inner
            .draw()
            .map_err(|_| PeripheralError::Unsupported)?;

        Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }
}

impl RngPeripheral for MockPeripheral {
    fn state(&self) -> PeripheralState {
        self.state
    }

    fn initialize(&mut self) {
        self.initialize_count += 1;
        self.state = PeripheralState::Ready;
    }

    fn next_word(&mut self) -> Result<u32, PeripheralError> {
        self.word_count += 1;

        if self.state != PeripheralState::Ready {
            return Err(PeripheralError::NotReady);
        }

        let fail = match self.behaviour {
            MockPeripheralBehaviour::None => false,
            MockPeripheralBehaviour::FailAlways => true,
            MockPeripheralBehaviour::FailAtNthWord(n) => self.word_count == n,
        };

        if fail {
            self.state = PeripheralState::Error;
            return Err(PeripheralError::SeedError);
        }

        self.produce_word()
    }
}
