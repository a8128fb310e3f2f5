// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::PrngError;
use crate::traits::OsGenerator;

/// Configurable behavior for [`MockOsGenerator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockOsGeneratorBehaviour {
    /// Normal operation.
    None,
    /// Always fail draw.
    FailAlways,
    /// Fail draw on the Nth call (1-indexed: 1 = first call fails).
    FailAtNthDraw(usize),
}

/// Mock OS generator with a 2-byte native word.
///
/// Draws are sequential: the Nth draw (0-indexed) yields bytes `2N` and
/// `2N + 1` (wrapping), so tests can see exactly which parts of which draw
/// landed in the output.
#[derive(Debug)]
pub struct MockOsGenerator {
    behaviour: MockOsGeneratorBehaviour,
    draw_count: usize,
    reseed_count: usize,
    last_seed: Option<u16>,
}

impl MockOsGenerator {
    /// Creates a new mock generator with the specified behavior.
    pub fn new(behaviour: MockOsGeneratorBehaviour) -> Self {
        Self {
            behaviour,
            draw_count: 0,
            reseed_count: 0,
            last_seed: None,
        }
    }

    /// Changes the mock behavior at runtime.
    pub fn change_behaviour(&mut self, behaviour: MockOsGeneratorBehaviour) {
        self.behaviour = behaviour;
    }

    /// Returns how many draws were requested.
    pub fn draw_count(&self) -> usize {
        self.draw_count
    }

    /// Returns how many times the generator was reseeded.
    pub fn reseed_count(&self) -> usize {
        self.reseed_count
    }

    /// Returns the most recent seed, if any.
    pub fn last_seed(&self) -> Option<u16> {
        self.last_seed
    }
}

impl OsGenerator for MockOsGenerator {
    type Seed = u16;
    type Word = [u8; 2];

    fn reseed(&mut self, seed: u16) {
        self.reseed_count += 1;
        self.last_seed = Some(seed);
    }

    fn draw(&mut self) -> Result<[u8; 2], PrngError> {
        let index = self.draw_count;
        self.draw_count += 1;

        match self.behaviour {
            MockOsGeneratorBehaviour::None => {}
            MockOsGeneratorBehaviour::FailAlways => return Err(PrngError::SourceFault),
            MockOsGeneratorBehaviour::FailAtNthDraw(n) if index + 1 == n => {
                return Err(PrngError::SourceFault);
            }
            MockOsGeneratorBehaviour::FailAtNthDraw(_) => {}
        }

        let first = (index * 2) as u8;

        Ok([first, first.wrapping_add(1)])
    }
}
