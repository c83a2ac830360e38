// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Daily music practice generator.
//!
//! Every calendar day maps to a day index that seeds a linear congruential
//! generator. From it a session draws a melodic pattern key, a scale key and
//! mode, and a repertoire excerpt. The same day always gives the same
//! session. Completion of each exercise is tracked per day as a bitmask.

pub mod config;
pub mod error;
pub mod generators;
pub mod music;
pub mod progress;
pub mod random;
pub mod render;
pub mod session;

pub use config::{OutputFormat, PracticeConfig};
pub use error::{PracticeError, Result};
pub use generators::{Excerpt, ExcerptSlot, ExcerptStatus, Sheet, SheetGenerator, EXCERPTS};
pub use music::{Key, Pitch, ScaleKind};
pub use progress::{FileStore, KeyValueStore, MemoryStore, Progress};
pub use random::Lcg;
pub use render::{LilypondRenderer, StaffRenderer, TextRenderer};
pub use session::{day_index, today, Exercise, ExerciseContent, PracticeGenerator, Session};
