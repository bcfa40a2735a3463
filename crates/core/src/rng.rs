//! RNG module - seedable colour selection for new pieces
//!
//! The session never reaches for ambient randomness. It owns a [`ColorSource`]
//! and asks it for the colour of every spawned piece, which keeps games
//! reproducible from a seed and lets tests pin the colour entirely.

use crate::types::BlockColor;

/// Supplies the colour of each newly spawned piece
pub trait ColorSource {
    fn next_color(&mut self) -> BlockColor;
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

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // Low LCG bits cycle with short periods; take the high half.
        (self.next_u32() >> 16) % max.max(1)
    }

    /// Current internal state, usable as a seed to replay from this point
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl ColorSource for SimpleRng {
    /// Uniform draw from the seven-colour palette
    fn next_color(&mut self) -> BlockColor {
        let idx = self.next_range(BlockColor::PALETTE.len() as u32) as usize;
        BlockColor::PALETTE[idx]
    }
}

/// Always hands out the same colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedColor(pub BlockColor);

impl ColorSource for FixedColor {
    fn next_color(&mut self) -> BlockColor {
        self.0
    }
}

impl<S: ColorSource + ?Sized> ColorSource for Box<S> {
    fn next_color(&mut self) -> BlockColor {
        (**self).next_color()
    }
}
