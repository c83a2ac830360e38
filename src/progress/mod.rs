// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Completion tracking.
//!
//! Each day index owns a bitmask; bit `i` is set when exercise slot `i` of
//! that day is done. The whole map is stored under one key as
//! `day:mask,day:mask`.

pub mod store;

pub use store::{FileStore, KeyValueStore, MemoryStore};

use std::collections::BTreeMap;

use tracing::{info, warn};

use crate::error::{PracticeError, Result};
use crate::session::MAX_SLOT;

/// Storage key holding the serialized completion map
pub const STORAGE_KEY: &str = "practice-generator-progress-v1";

/// Parse `day:mask,...`.
///
/// Empty input is an empty map. Segments that do not parse are skipped;
/// they disappear the next time the map is written.
pub fn parse_progress(serialized: &str) -> BTreeMap<i64, u64> {
    let mut progress = BTreeMap::new();
    if serialized.trim().is_empty() {
        return progress;
    }
    for segment in serialized.split(',') {
        let parsed = segment
            .split_once(':')
            .and_then(|(day, mask)| Some((day.trim().parse().ok()?, mask.trim().parse().ok()?)));
        match parsed {
            Some((day, mask)) => {
                progress.insert(day, mask);
            }
            None => warn!(segment, "skipping malformed progress entry"),
        }
    }
    progress
}

/// Serialize as `day:mask,...` in ascending day order
pub fn serialize_progress(progress: &BTreeMap<i64, u64>) -> String {
    progress
        .iter()
        .map(|(day, mask)| format!("{}:{}", day, mask))
        .collect::<Vec<_>>()
        .join(",")
}

fn slot_mask(slot: u32) -> Result<u64> {
    if slot > MAX_SLOT {
        return Err(PracticeError::SlotOutOfRange(slot));
    }
    Ok(1u64 << slot)
}

/// Completion tracker over a key-value store
#[derive(Debug)]
pub struct Progress<S: KeyValueStore> {
    store: S,
    days: BTreeMap<i64, u64>,
}

impl<S: KeyValueStore> Progress<S> {
    /// Read the completion map from `store` (absent value means empty)
    pub fn load(store: S) -> Result<Self> {
        let days = match store.get(STORAGE_KEY)? {
            Some(serialized) => parse_progress(&serialized),
            None => BTreeMap::new(),
        };
        Ok(Self { store, days })
    }

    /// Whether `slot` of `day` is done; unknown days have nothing done
    pub fn is_done(&self, day: i64, slot: u32) -> bool {
        match (self.days.get(&day), slot_mask(slot)) {
            (Some(mask), Ok(bit)) => mask & bit != 0,
            _ => false,
        }
    }

    /// Set or clear `slot` of `day`, then persist the whole map
    pub fn mark_done(&mut self, day: i64, slot: u32, done: bool) -> Result<()> {
        let bit = slot_mask(slot)?;
        let mask = self.days.entry(day).or_insert(0);
        if done {
            *mask |= bit;
        } else {
            *mask &= !bit;
        }
        info!(day, slot, done, "completion updated");
        self.save()
    }

    /// Raw mask for a day (0 when unknown)
    pub fn mask(&self, day: i64) -> u64 {
        self.days.get(&day).copied().unwrap_or(0)
    }

    pub fn days(&self) -> &BTreeMap<i64, u64> {
        &self.days
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn save(&mut self) -> Result<()> {
        let serialized = serialize_progress(&self.days);
        self.store.set(STORAGE_KEY, &serialized)
    }
}
