// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Deterministic random sequences.
//!
//! Every practice session owns one generator seeded from its day index.
//! Nothing here is global: determinism comes from reseeding, not from
//! resuming a stream.

pub mod lcg;

pub use lcg::{hash_string, Lcg, LCG_INCREMENT, LCG_MODULUS, LCG_MULTIPLIER};
