//! Zobrist hashing for game states.
//!
//! The hash XORs together fixed random values for:
//! - each piece id on each square with each rotation (56 × 56 × 4 values)
//! - player 2 to move (1 value)
//! - rotation chances left (3 values)
//! - each player's score (2 × 16 tabled values, larger scores get a key
//!   mixed from the player's base value and the score)

use crate::types::{NUM_SQUARES, Player, ROTATION_CHANCES};

const SCORE_SLOTS: usize = 16;

/// splitmix64 finalizer, a bijection on `u64`.
const fn mix64(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
    z ^ (z >> 31)
}

/// Pre-computed random values for Zobrist hashing.
pub struct ZobristKeys {
    /// Indexed by [piece id][square][rotation quarters]
    pub pieces: [[[u64; 4]; NUM_SQUARES]; NUM_SQUARES],
    pub side_to_move: u64,
    pub chances: [u64; ROTATION_CHANCES as usize + 1],
    pub scores: [[u64; SCORE_SLOTS]; 2],
}

impl Default for ZobristKeys {
    fn default() -> Self {
        Self::new()
    }
}

impl ZobristKeys {
    /// Generate keys with xorshift64 from a fixed seed.
    pub const fn new() -> Self {
        const fn xorshift64(mut state: u64) -> u64 {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            state
        }

        let mut state = 0x9E3779B97F4A7C15u64;

        let mut pieces = [[[0u64; 4]; NUM_SQUARES]; NUM_SQUARES];
        let mut id = 0;
        while id < NUM_SQUARES {
            let mut sq = 0;
            while sq < NUM_SQUARES {
                let mut q = 0;
                while q < 4 {
                    state = xorshift64(state);
                    pieces[id][sq][q] = state;
                    q += 1;
                }
                sq += 1;
            }
            id += 1;
        }

        state = xorshift64(state);
        let side_to_move = state;

        let mut chances = [0u64; ROTATION_CHANCES as usize + 1];
        let mut i = 0;
        while i < chances.len() {
            state = xorshift64(state);
            chances[i] = state;
            i += 1;
        }

        let mut scores = [[0u64; SCORE_SLOTS]; 2];
        let mut p = 0;
        while p < 2 {
            let mut s = 0;
            while s < SCORE_SLOTS {
                state = xorshift64(state);
                scores[p][s] = state;
                s += 1;
            }
            p += 1;
        }

        ZobristKeys {
            pieces,
            side_to_move,
            chances,
            scores,
        }
    }

    #[inline(always)]
    pub fn piece_key(&self, id: usize, sq: usize, quarters: u8) -> u64 {
        self.pieces[id][sq][quarters as usize & 3]
    }

    #[inline(always)]
    pub fn chances_key(&self, chances: u8) -> u64 {
        self.chances[(chances as usize).min(ROTATION_CHANCES as usize)]
    }

    #[inline(always)]
    pub fn score_key(&self, player: Player, score: u32) -> u64 {
        let table = &self.scores[player.idx()];
        match table.get(score as usize) {
            Some(&key) => key,
            None => mix64(table[0] ^ u64::from(score)),
        }
    }
}

/// Global static Zobrist keys, computed at compile time.
pub static ZOBRIST: ZobristKeys = ZobristKeys::new();

#[cfg(test)]
#[path = "zobrist_tests.rs"]
mod zobrist_tests;
