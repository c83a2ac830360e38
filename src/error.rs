// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Error types for the practice generator library.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::music::pitch::{Pitch, Step};

/// Errors produced while generating or tracking practice sessions
#[derive(Debug, Error)]
pub enum PracticeError {
    /// The adjacency table has no successor for this spelling.
    /// Signals a key/pattern combination outside the supported range.
    #[error("no {step} successor for pitch {pitch}")]
    MissingTransition { pitch: Pitch, step: Step },

    #[error("invalid pitch spelling: {0:?}")]
    InvalidPitch(String),

    #[error("unknown key: {0:?}")]
    InvalidKey(String),

    /// Exercise slots map to bits of a 64-bit mask
    #[error("exercise slot {0} does not fit in the completion mask")]
    SlotOutOfRange(u32),

    #[error("storage error at {path:?}: {source}")]
    Storage {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed store file: {0}")]
    StoreFormat(#[from] serde_yaml::Error),

    #[error("failed to write rendered output: {0}")]
    Render(#[source] io::Error),

    #[error("excerpt rendering failed: {0}")]
    Excerpt(String),
}

/// Result alias used across the library
pub type Result<T> = std::result::Result<T, PracticeError>;
