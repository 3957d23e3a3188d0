//! The shuffled queue of words left to guess in a round.

use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::VecDeque;

/// Words remaining in the current shuffle. The front is the next word shown.
#[derive(Debug, Clone)]
pub struct WordPool {
    vocabulary: Vec<String>,
    remaining: VecDeque<String>,
}

impl WordPool {
    /// Creates an empty pool over `vocabulary`. Call [`refill`](Self::refill)
    /// before drawing.
    pub fn new(vocabulary: Vec<String>) -> Self {
        Self {
            vocabulary,
            remaining: VecDeque::new(),
        }
    }

    /// Discards whatever is left and replaces it with a uniformly shuffled
    /// copy of the full vocabulary.
    pub fn refill<R: Rng>(&mut self, rng: &mut R) {
        let mut words = self.vocabulary.clone();
        words.shuffle(rng);
        self.remaining = words.into();
    }

    /// Removes and returns the front word.
    pub fn draw(&mut self) -> Option<String> {
        self.remaining.pop_front()
    }

    pub fn remaining(&self) -> usize {
        self.remaining.len()
    }

    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }

    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }
}
