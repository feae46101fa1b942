//! Dice rolling.
//!
//! Every random draw in the game goes through the [`Dice`] trait so that
//! level-ups, attack rolls and rests can be replayed. Any `rand::Rng` is a
//! `Dice`; [`LoadedDice`] replays a fixed sequence of results.

use rand::Rng;

/// Source of random draws for gameplay.
pub trait Dice {
    /// Uniform draw in `low..=high`. Returns `low` when the range is empty.
    fn roll(&mut self, low: u32, high: u32) -> u32;

    /// Uniform index in `0..len`. Returns 0 when `len` is 0.
    fn pick(&mut self, len: usize) -> usize;

    /// Rolls a single die with the given number of sides.
    fn roll_die(&mut self, sides: u32) -> u32 {
        self.roll(1, sides)
    }
}

impl<R: Rng + ?Sized> Dice for R {
    fn roll(&mut self, low: u32, high: u32) -> u32 {
        if low >= high {
            return low;
        }
        self.gen_range(low..=high)
    }

    fn pick(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.gen_range(0..len)
    }
}

/// Dice that replay a fixed sequence of results, cycling when exhausted.
///
/// Rolled values are clamped into the requested range; picks are taken
/// modulo the number of choices.
#[derive(Debug, Clone)]
pub struct LoadedDice {
    results: Vec<u32>,
    position: usize,
}

impl LoadedDice {
    pub fn new(results: Vec<u32>) -> Self {
        Self {
            results,
            position: 0,
        }
    }

    /// Number of results consumed so far.
    pub fn rolls_made(&self) -> usize {
        self.position
    }

    fn next_result(&mut self) -> Option<u32> {
        if self.results.is_empty() {
            return None;
        }
        let value = self.results[self.position % self.results.len()];
        self.position += 1;
        Some(value)
    }
}

impl Dice for LoadedDice {
    fn roll(&mut self, low: u32, high: u32) -> u32 {
        match self.next_result() {
            Some(value) if low < high => value.clamp(low, high),
            _ => low,
        }
    }

    fn pick(&mut self, len: usize) -> usize {
        match self.next_result() {
            Some(value) if len > 0 => value as usize % len,
            _ => 0,
        }
    }
}
