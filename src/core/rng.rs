//! Shape generation - deterministic, seedable, swappable
//!
//! Shape selection is an injected dependency of the engine rather than an
//! ambient global: two peers started from the same seed draw identical piece
//! sequences, and tests can script exact sequences with `FixedShapes`.

use std::fmt;

use crate::types::ShapeKind;

/// Source of the next piece kind
pub trait ShapeSource: fmt::Debug {
    fn next_shape(&mut self) -> ShapeKind;
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

/// Seeded uniform shape picker: every draw is an independent uniform pick
/// over the seven kinds
#[derive(Debug, Clone)]
pub struct SeededShapes {
    rng: SimpleRng,
}

impl SeededShapes {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }
}

impl ShapeSource for SeededShapes {
    fn next_shape(&mut self) -> ShapeKind {
        ShapeKind::ALL[self.rng.next_range(ShapeKind::ALL.len() as u32) as usize]
    }
}

/// Scripted shape sequence for tests; cycles when exhausted
#[derive(Debug, Clone)]
pub struct FixedShapes {
    sequence: Vec<ShapeKind>,
    next: usize,
}

impl FixedShapes {
    pub fn new(sequence: Vec<ShapeKind>) -> Self {
        assert!(!sequence.is_empty());
        Self { sequence, next: 0 }
    }
}

impl ShapeSource for FixedShapes {
    fn next_shape(&mut self) -> ShapeKind {
        let kind = self.sequence[self.next];
        self.next = (self.next + 1) % self.sequence.len();
        kind
    }
}
