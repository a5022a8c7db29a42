//! Randomness seam
//!
//! Random game ids and educated guesses draw from a [`RandomSource`] so tests
//! can script the picks.

use rand::Rng;

pub trait RandomSource {
    /// Uniform index in `0..len`; `len` is never zero
    fn pick(&mut self, len: usize) -> usize;
}

/// Thread-local system randomness
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRandom;

impl RandomSource for SystemRandom {
    fn pick(&mut self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}

#[cfg(test)]
pub(crate) struct ScriptedRandom(pub Vec<usize>);

#[cfg(test)]
impl RandomSource for ScriptedRandom {
    fn pick(&mut self, len: usize) -> usize {
        let next = if self.0.is_empty() { 0 } else { self.0.remove(0) };
        next % len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_random_stays_in_range() {
        let mut rng = SystemRandom;
        for len in 1..50 {
            assert!(rng.pick(len) < len);
        }
    }

    #[test]
    fn scripted_random_replays_picks() {
        let mut rng = ScriptedRandom(vec![2, 7]);
        assert_eq!(rng.pick(5), 2);
        assert_eq!(rng.pick(5), 2);
        assert_eq!(rng.pick(5), 0);
    }
}
