//! Client secret generation.

use rand::Rng;
use rand::rngs::OsRng;
use rand::seq::SliceRandom;

const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"~!@#$%^&*()_+-={}[]|:<>?,./";

/// Generates random client secrets from the OS RNG.
#[derive(Debug, Clone, Copy)]
pub struct SecretGenerator {
    length: usize,
    symbols: usize,
}

impl Default for SecretGenerator {
    fn default() -> Self {
        Self {
            length: 32,
            symbols: 10,
        }
    }
}

impl SecretGenerator {
    /// 32 characters, exactly 10 of them symbols.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a fresh secret. Characters may repeat; positions are shuffled.
    pub fn generate(&self) -> String {
        let mut rng = OsRng;
        let alphanumeric: Vec<u8> = LETTERS.iter().chain(DIGITS).copied().collect();

        let mut chars: Vec<u8> = Vec::with_capacity(self.length);
        for _ in 0..self.symbols {
            chars.push(SYMBOLS[rng.gen_range(0..SYMBOLS.len())]);
        }
        for _ in self.symbols..self.length {
            chars.push(alphanumeric[rng.gen_range(0..alphanumeric.len())]);
        }
        chars.shuffle(&mut rng);

        chars.into_iter().map(char::from).collect()
    }
}
