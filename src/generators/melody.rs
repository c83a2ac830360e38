// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! "Simple but Beautiful": a fixed melodic contour placed in a key.
//!
//! The contour is a short up-down-up shape in scale degrees. It is always
//! spelled with natural letters; the key signature alone supplies the
//! colour, so no note carries its own accidental.

use tracing::debug;

use super::{caption, NoteValue, Sheet, SheetGenerator};
use crate::error::Result;
use crate::music::{Annotation, GeneratedNote, Key, Letter, Pitch, ScaleKind};

/// Scale degrees of the melody relative to its starting degree
pub const CONTOUR: [i64; 17] = [0, -1, -2, -1, 0, 1, 2, 3, 4, 3, 2, 1, 0, -1, -2, -1, 0];

/// Octave of staff degree 0 (middle C)
const BASE_OCTAVE: i64 = 4;

/// A sequence of staff degrees (0 = C4, 7 = C5, -1 = B3)
#[derive(Debug, Clone, PartialEq, Eq)]
struct Motif {
    degrees: Vec<i64>,
}

impl Motif {
    fn new(degrees: &[i64]) -> Self {
        Self {
            degrees: degrees.to_vec(),
        }
    }

    /// Move every degree by `offset` staff steps
    fn transposed(&self, offset: i64) -> Self {
        Self {
            degrees: self.degrees.iter().map(|d| d + offset).collect(),
        }
    }

    fn notes(&self) -> Vec<GeneratedNote> {
        self.degrees
            .iter()
            .map(|&degree| {
                let octave = degree.div_euclid(7) + BASE_OCTAVE;
                let pitch = Pitch::natural(Letter::from_degree(degree));
                GeneratedNote::new(pitch, octave as i32, Annotation::None)
            })
            .collect()
    }
}

/// Melodic pattern generator
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleButBeautiful;

impl SimpleButBeautiful {
    pub fn new() -> Self {
        Self
    }

    /// Staff offset that keeps the melody near the middle of the treble staff.
    ///
    /// Starts from the key's circle-of-fifths position and folds positions
    /// above 4 down by a seventh.
    pub fn register_shift(key: Key) -> i64 {
        let shift = key.root_index() as i64;
        if shift > 4 {
            shift - 7
        } else {
            shift
        }
    }

    /// Staff degrees of the melody for `key_index`
    pub fn degrees(key_index: i64) -> Vec<i64> {
        let shift = Self::register_shift(Key::at(key_index));
        Motif::new(&CONTOUR).transposed(shift).degrees
    }
}

impl SheetGenerator for SimpleButBeautiful {
    fn title(&self) -> &'static str {
        "Simple but Beautiful"
    }

    fn generate(&self, key_index: i64) -> Result<Sheet> {
        let reference = ScaleKind::Major.descriptor();
        let key = Key::at(reference.start_key.int_val() as i64 + key_index);
        let start = Key::at(key_index + reference.start_note.int_val() as i64).tonic();
        let shift = Self::register_shift(Key::at(key_index));

        debug!(%key, shift, "building melodic pattern");

        let notes = Motif::new(&CONTOUR).transposed(shift).notes();
        Ok(Sheet::new(key, notes, NoteValue::Eighth)
            .beamed()
            .with_annotation(caption(start, reference.name)))
    }
}
