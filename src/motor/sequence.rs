//! Half-step phase sequencing for 4-wire steppers.

use crate::effector::Level::{self, High as H, Low as L};

/// Number of phases in the half-step cycle.
pub const PHASE_COUNT: u8 = 8;

/// The half-step energization sequence: alternating two-coil and one-coil
/// patterns. Applying the entries in order (wrapping) rotates the motor one
/// way; in reverse order, the other way.
const HALF_STEP_PATTERNS: [[Level; 4]; PHASE_COUNT as usize] = [
    [H, L, L, L],
    [H, H, L, L],
    [L, H, L, L],
    [L, H, H, L],
    [L, L, H, L],
    [L, L, H, H],
    [L, L, L, H],
    [H, L, L, H],
];

/// Direction of motor travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Increasing position.
    Forward,
    /// Decreasing position.
    Backward,
}

/// Phase state machine for a 4-wire stepper.
///
/// Tracks the current position within the half-step cycle and yields the
/// coil pattern for each phase. The cycle has period [`PHASE_COUNT`]:
/// advancing 8 times in one direction returns to the starting phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepSequencer {
    phase: u8,
}

impl StepSequencer {
    /// Create a sequencer at phase 0.
    pub const fn new() -> Self {
        Self { phase: 0 }
    }

    /// Create a sequencer at a specific phase (wrapped into the cycle).
    pub const fn at(phase: u8) -> Self {
        Self {
            phase: phase % PHASE_COUNT,
        }
    }

    /// The current phase index, in `[0, 7]`.
    #[inline]
    pub const fn phase(&self) -> u8 {
        self.phase
    }

    /// The coil pattern for the current phase.
    #[inline]
    pub fn pattern(&self) -> [Level; 4] {
        HALF_STEP_PATTERNS[self.phase as usize]
    }

    /// Advance one half-step in the given direction and return the new
    /// phase's coil pattern.
    pub fn advance(&mut self, direction: Direction) -> [Level; 4] {
        self.phase = match direction {
            Direction::Forward => (self.phase + 1) % PHASE_COUNT,
            Direction::Backward => (self.phase + PHASE_COUNT - 1) % PHASE_COUNT,
        };
        self.pattern()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_pattern_table() {
        let expected: [[u8; 4]; 8] = [
            [1, 0, 0, 0],
            [1, 1, 0, 0],
            [0, 1, 0, 0],
            [0, 1, 1, 0],
            [0, 0, 1, 0],
            [0, 0, 1, 1],
            [0, 0, 0, 1],
            [1, 0, 0, 1],
        ];
        for (phase, bits) in expected.iter().enumerate() {
            let pattern = StepSequencer::at(phase as u8).pattern();
            for (level, &bit) in pattern.iter().zip(bits) {
                assert_eq!(level.is_high(), bit == 1, "phase {phase}");
            }
        }
    }

    #[test]
    fn test_advance_wraps_both_ways() {
        let mut seq = StepSequencer::at(7);
        seq.advance(Direction::Forward);
        assert_eq!(seq.phase(), 0);

        let mut seq = StepSequencer::new();
        seq.advance(Direction::Backward);
        assert_eq!(seq.phase(), 7);
    }

    proptest! {
        /// Advancing a full cycle in one direction returns to the start.
        #[test]
        fn prop_cycle_has_period_eight(start in 0u8..PHASE_COUNT, forward in proptest::bool::ANY) {
            let direction = if forward { Direction::Forward } else { Direction::Backward };
            let mut seq = StepSequencer::at(start);
            for _ in 0..PHASE_COUNT {
                seq.advance(direction);
            }
            prop_assert_eq!(seq.phase(), start);
        }

        /// n steps forward then n steps backward restores the phase.
        #[test]
        fn prop_forward_backward_round_trip(start in 0u8..PHASE_COUNT, n in 0usize..64) {
            let mut seq = StepSequencer::at(start);
            for _ in 0..n {
                seq.advance(Direction::Forward);
            }
            for _ in 0..n {
                seq.advance(Direction::Backward);
            }
            prop_assert_eq!(seq.phase(), start);
        }
    }
}
