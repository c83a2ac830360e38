// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Scale descriptors and the two-octave scale builder.
//!
//! Scales are walked pitch by pitch through the successor table, so every
//! tone keeps a spelling consistent with its neighbours. The builder also
//! decides which notes need an accidental printed against the key signature.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::key::Key;
use super::pitch::{intervals_to_string, Accidental, Letter, Pitch, Step};
use crate::error::Result;

/// Number of notes in a practice scale: two octaves plus the top tonic
pub const SCALE_LENGTH: usize = 15;

const MAJOR_STEPS: [Step; 7] = [
    Step::Whole,
    Step::Whole,
    Step::Half,
    Step::Whole,
    Step::Whole,
    Step::Whole,
    Step::Half,
];

const MINOR_STEPS: [Step; 7] = [
    Step::Whole,
    Step::Half,
    Step::Whole,
    Step::Whole,
    Step::Half,
    Step::Whole,
    Step::Whole,
];

/// Scale kinds used by the practice generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleKind {
    Major,
    /// Natural minor (Aeolian)
    Minor,
}

/// Immutable description of a scale kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaleDescriptor {
    /// Display name
    pub name: &'static str,
    /// Steps between consecutive tones of one octave
    pub steps: [Step; 7],
    /// Tonic of the reference scale
    pub start_note: Key,
    /// Signature of the reference scale; other keys are reached by offset
    pub start_key: Key,
    pub description: &'static str,
    pub url: &'static str,
}

impl ScaleKind {
    pub const ALL: [ScaleKind; 2] = [ScaleKind::Major, ScaleKind::Minor];

    pub fn descriptor(self) -> ScaleDescriptor {
        match self {
            ScaleKind::Major => ScaleDescriptor {
                name: "Major",
                steps: MAJOR_STEPS,
                start_note: Key::C,
                start_key: Key::C,
                description: "The major scale (Ionian mode), one of the diatonic scales.",
                url: "https://en.wikipedia.org/wiki/Major_scale",
            },
            // C minor borrows the E-flat major signature; transposing by
            // offset from that pair gives every relative-major signature.
            ScaleKind::Minor => ScaleDescriptor {
                name: "Minor",
                steps: MINOR_STEPS,
                start_note: Key::C,
                start_key: Key::Eb,
                description: "The natural minor scale (Aeolian mode): W H W W H W W.",
                url: "https://en.wikipedia.org/wiki/Minor_scale#Natural_minor_scale",
            },
        }
    }

    pub fn name(self) -> &'static str {
        self.descriptor().name
    }

    /// Step pattern as "W - W - H - ..."
    pub fn steps_text(self) -> String {
        intervals_to_string(&self.descriptor().steps)
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "major" | "ionian" => Some(ScaleKind::Major),
            "minor" | "natural_minor" | "aeolian" => Some(ScaleKind::Minor),
            _ => None,
        }
    }
}

impl fmt::Display for ScaleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Accidental to print next to a note
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Annotation {
    /// Nothing printed; the signature (or lack of one) covers it
    None,
    Sharp,
    Flat,
    DoubleSharp,
    DoubleFlat,
    /// Cancels a signature accidental on this letter
    Natural,
}

impl Annotation {
    /// Decide the printed accidental for `pitch` under `signature`
    pub fn for_pitch(pitch: Pitch, signature: &[Pitch]) -> Self {
        if signature.contains(&pitch) {
            return Annotation::None;
        }
        match pitch.accidental {
            Accidental::Sharp => Annotation::Sharp,
            Accidental::Flat => Annotation::Flat,
            Accidental::DoubleSharp => Annotation::DoubleSharp,
            Accidental::DoubleFlat => Annotation::DoubleFlat,
            Accidental::Natural => {
                let flat = pitch.with_accidental(Accidental::Flat);
                let sharp = pitch.with_accidental(Accidental::Sharp);
                if signature.contains(&flat) || signature.contains(&sharp) {
                    Annotation::Natural
                } else {
                    Annotation::None
                }
            }
        }
    }

    pub fn is_marked(self) -> bool {
        self != Annotation::None
    }

    /// Text form ("#", "b", "##", "bb", "n"), empty when unmarked
    pub fn symbol(self) -> &'static str {
        match self {
            Annotation::None => "",
            Annotation::Sharp => "#",
            Annotation::Flat => "b",
            Annotation::DoubleSharp => "##",
            Annotation::DoubleFlat => "bb",
            Annotation::Natural => "n",
        }
    }
}

/// One note of generated output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GeneratedNote {
    pub pitch: Pitch,
    pub octave: i32,
    pub annotation: Annotation,
}

impl GeneratedNote {
    pub fn new(pitch: Pitch, octave: i32, annotation: Annotation) -> Self {
        Self {
            pitch,
            octave,
            annotation,
        }
    }

    pub fn letter(&self) -> Letter {
        self.pitch.letter
    }
}

impl fmt::Display for GeneratedNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.pitch, self.octave)
    }
}

/// Octave changes when moving from A or B up to C or D
fn crosses_octave(from: Letter, to: Letter) -> bool {
    matches!(from, Letter::A | Letter::B) && matches!(to, Letter::C | Letter::D)
}

/// Build an ascending scale of [`SCALE_LENGTH`] notes.
///
/// `steps` is reused cyclically. Fails only when the successor table has no
/// entry for a spelling reached on the way up.
pub fn build_scale(
    first: Pitch,
    steps: &[Step; 7],
    signature: &[Pitch],
    octave: i32,
) -> Result<Vec<GeneratedNote>> {
    let mut notes = Vec::with_capacity(SCALE_LENGTH);
    let mut pitch = first;
    let mut octave = octave;

    for i in 0..SCALE_LENGTH {
        let annotation = Annotation::for_pitch(pitch, signature);
        notes.push(GeneratedNote::new(pitch, octave, annotation));

        let next = pitch.successor(steps[i % steps.len()])?;
        if crosses_octave(pitch.letter, next.letter) {
            octave += 1;
        }
        trace!(from = %pitch, to = %next, octave, "scale step");
        pitch = next;
    }

    Ok(notes)
}
