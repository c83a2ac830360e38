// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Linear congruential generator with the classic glibc constants.
//!
//! The stream is part of the observable contract: a day index always yields
//! the same exercises, so the arithmetic here must never change.

use rand::Rng;
use tracing::debug;

/// Modulus (2^31)
pub const LCG_MODULUS: u64 = 0x8000_0000;

/// Multiplier
pub const LCG_MULTIPLIER: u64 = 1_103_515_245;

/// Increment
pub const LCG_INCREMENT: u64 = 12_345;

/// Polynomial rolling hash of a string, reduced modulo 2^31.
///
/// Walks UTF-16 code units left to right: `hash = (hash * 31 + unit) mod 2^31`.
pub fn hash_string(text: &str) -> u32 {
    text.encode_utf16()
        .fold(0u64, |hash, unit| (hash * 31 + unit as u64) % LCG_MODULUS) as u32
}

/// Seeded 31-bit LCG
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lcg {
    state: u32,
}

impl Lcg {
    /// Create a generator from an integer seed.
    ///
    /// A zero seed falls back to an entropy seed, so it must not be used on
    /// the reproducible session path (see [`Lcg::from_state`]). Other seeds
    /// are reduced modulo 2^31.
    pub fn new(seed: i64) -> Self {
        if seed == 0 {
            return Self::from_entropy();
        }
        Self::from_state(seed.rem_euclid(LCG_MODULUS as i64) as u32)
    }

    /// Create a generator from a text seed via [`hash_string`]
    pub fn from_text(seed: &str) -> Self {
        Self::from_state(hash_string(seed))
    }

    /// Create a generator with an exact starting state (zero allowed)
    pub fn from_state(state: u32) -> Self {
        Self {
            state: (state as u64 % LCG_MODULUS) as u32,
        }
    }

    /// Create a non-reproducible generator
    pub fn from_entropy() -> Self {
        let state = rand::thread_rng().gen_range(0..(LCG_MODULUS - 1) as u32);
        debug!(state, "seeding generator from entropy");
        Self { state }
    }

    /// Current internal state
    pub fn state(&self) -> u32 {
        self.state
    }

    /// Advance the generator and return the new state
    pub fn next_int(&mut self) -> u32 {
        let next = (LCG_MULTIPLIER * self.state as u64 + LCG_INCREMENT) % LCG_MODULUS;
        self.state = next as u32;
        self.state
    }

    /// Next value in `[0, 1]`
    pub fn next_float(&mut self) -> f64 {
        self.next_int() as f64 / (LCG_MODULUS - 1) as f64
    }

    /// Next integer in `[start, end)`.
    ///
    /// Computes `start + floor(next_int / 2^31 * (end - start))` exactly.
    ///
    /// Panics if `end <= start`.
    pub fn next_range(&mut self, start: i64, end: i64) -> i64 {
        assert!(start < end, "next_range: start must be less than end");
        let span = (end as i128) - (start as i128);
        let offset = (self.next_int() as i128 * span) >> 31;
        (start as i128 + offset) as i64
    }

    /// Pick one element. An empty slice yields `None` without drawing.
    pub fn choice<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let index = self.next_range(0, items.len() as i64) as usize;
        items.get(index)
    }
}
