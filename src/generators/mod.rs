// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Exercise generators for the daily practice session.
//!
//! Sheet generators turn a key index into a rendering-agnostic [`Sheet`]:
//! a key signature, a run of notes and an optional caption. The excerpt
//! module covers the one exercise that is not generated but picked from a
//! catalogue.

pub mod excerpt;
pub mod melody;
pub mod scale;

use std::fmt;
use std::ops::Range;

use serde::Serialize;

use crate::error::Result;
use crate::music::{GeneratedNote, Key, Pitch};

pub use excerpt::{render_excerpt, Excerpt, ExcerptSlot, ExcerptStatus, EXCERPTS};
pub use melody::SimpleButBeautiful;
pub use scale::ScaleSheet;

/// Written duration of every note on a sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NoteValue {
    Whole,
    Eighth,
}

impl NoteValue {
    /// Note division (1 = whole, 8 = eighth)
    pub fn division(self) -> u32 {
        match self {
            NoteValue::Whole => 1,
            NoteValue::Eighth => 8,
        }
    }
}

/// A single staff of notation, ready for a renderer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sheet {
    /// Key signature drawn at the start of the staff
    pub key: Key,
    pub notes: Vec<GeneratedNote>,
    pub note_value: NoteValue,
    /// Index ranges of notes joined by a beam
    pub beams: Vec<Range<usize>>,
    /// Caption shown above the staff
    pub annotation: Option<String>,
}

impl Sheet {
    pub fn new(key: Key, notes: Vec<GeneratedNote>, note_value: NoteValue) -> Self {
        Self {
            key,
            notes,
            note_value,
            beams: Vec::new(),
            annotation: None,
        }
    }

    /// Beam all notes together
    pub fn beamed(mut self) -> Self {
        self.beams = vec![0..self.notes.len()];
        self
    }

    pub fn with_annotation(mut self, annotation: impl Into<String>) -> Self {
        self.annotation = Some(annotation.into());
        self
    }
}

impl fmt::Display for Sheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let notes: Vec<String> = self.notes.iter().map(|n| n.to_string()).collect();
        write!(f, "[{}] {}", self.key, notes.join(" "))
    }
}

/// Caption text: starting pitch in glyph form plus the scale name
pub(crate) fn caption(start: Pitch, scale_name: &str) -> String {
    format!("{} {}", start.glyphs(), scale_name)
}

/// Trait for generators that produce a staff from a key index
pub trait SheetGenerator {
    /// Exercise title shown above the sheet
    fn title(&self) -> &'static str;

    /// Build the sheet for `key_index` (any integer; keys wrap)
    fn generate(&self, key_index: i64) -> Result<Sheet>;
}
