//! Seeded LCG used for piece shape and color selection.
//!
//! Deterministic given a seed so whole games can be replayed in tests.

/// Simple linear congruential generator (Numerical Recipes constants).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed.
    pub fn new(seed: u32) -> Self {
        // A zero seed would make the low bits degenerate early on.
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate the next random u32.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate a random value in `[0, max)`.
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Pick a uniformly random element of a non-empty slice.
    ///
    /// # Panics
    ///
    /// Panics if `choices` is empty.
    pub fn choose<T: Copy>(&mut self, choices: &[T]) -> T {
        assert!(!choices.is_empty(), "cannot choose from an empty slice");
        choices[self.next_range(choices.len() as u32) as usize]
    }

    /// Current internal state, usable as a seed for a follow-up game.
    pub fn state(&self) -> u32 {
        self.state
    }
}
