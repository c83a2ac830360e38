// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! The twelve practice keys.
//!
//! Keys are plain lookup data: a circle-of-fifths position, a chromatic
//! position and the spelled pitches of the key signature. Index lookups wrap
//! so any integer names a key.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::pitch::{Accidental, Letter, Pitch};
use crate::error::{PracticeError, Result};

/// Major keys in canonical (chromatic) order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    C,
    Db,
    D,
    Eb,
    E,
    F,
    #[serde(rename = "F#")]
    Fs,
    G,
    Ab,
    A,
    Bb,
    B,
}

/// Static description of a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyInfo {
    /// Position on the circle of fifths, folded to 0-6
    pub root_index: u8,
    /// Chromatic position, 0-11
    pub int_val: u8,
    /// Spelled pitches covered by the key signature, in signature order
    pub accidentals: &'static [Pitch],
    /// Enharmonic spelling of the tonic, for flat keys only
    pub equivalent: Option<Pitch>,
}

const fn flat(letter: Letter) -> Pitch {
    Pitch::new(letter, Accidental::Flat)
}

const fn sharp(letter: Letter) -> Pitch {
    Pitch::new(letter, Accidental::Sharp)
}

static SHARPS: [Pitch; 6] = [
    sharp(Letter::F),
    sharp(Letter::C),
    sharp(Letter::G),
    sharp(Letter::D),
    sharp(Letter::A),
    sharp(Letter::E),
];

static FLATS: [Pitch; 5] = [
    flat(Letter::B),
    flat(Letter::E),
    flat(Letter::A),
    flat(Letter::D),
    flat(Letter::G),
];

impl Key {
    /// Keys in canonical order; index lookups wrap over this list
    pub const ALL: [Key; 12] = [
        Key::C,
        Key::Db,
        Key::D,
        Key::Eb,
        Key::E,
        Key::F,
        Key::Fs,
        Key::G,
        Key::Ab,
        Key::A,
        Key::Bb,
        Key::B,
    ];

    /// Key at `index` modulo 12 (negative indices wrap too)
    pub fn at(index: i64) -> Self {
        Key::ALL[index.rem_euclid(Key::ALL.len() as i64) as usize]
    }

    pub fn info(self) -> KeyInfo {
        match self {
            Key::C => KeyInfo {
                root_index: 0,
                int_val: 0,
                accidentals: &[],
                equivalent: None,
            },
            Key::Db => KeyInfo {
                root_index: 1,
                int_val: 1,
                accidentals: &FLATS,
                equivalent: Some(sharp(Letter::C)),
            },
            Key::D => KeyInfo {
                root_index: 1,
                int_val: 2,
                accidentals: &SHARPS[..2],
                equivalent: None,
            },
            Key::Eb => KeyInfo {
                root_index: 2,
                int_val: 3,
                accidentals: &FLATS[..3],
                equivalent: Some(sharp(Letter::D)),
            },
            Key::E => KeyInfo {
                root_index: 2,
                int_val: 4,
                accidentals: &SHARPS[..4],
                equivalent: None,
            },
            Key::F => KeyInfo {
                root_index: 3,
                int_val: 5,
                accidentals: &FLATS[..1],
                equivalent: None,
            },
            Key::Fs => KeyInfo {
                root_index: 3,
                int_val: 6,
                accidentals: &SHARPS,
                equivalent: None,
            },
            Key::G => KeyInfo {
                root_index: 4,
                int_val: 7,
                accidentals: &SHARPS[..1],
                equivalent: None,
            },
            Key::Ab => KeyInfo {
                root_index: 5,
                int_val: 8,
                accidentals: &FLATS[..4],
                equivalent: Some(sharp(Letter::G)),
            },
            Key::A => KeyInfo {
                root_index: 5,
                int_val: 9,
                accidentals: &SHARPS[..3],
                equivalent: None,
            },
            Key::Bb => KeyInfo {
                root_index: 6,
                int_val: 10,
                accidentals: &FLATS[..2],
                equivalent: Some(sharp(Letter::A)),
            },
            Key::B => KeyInfo {
                root_index: 6,
                int_val: 11,
                accidentals: &SHARPS[..5],
                equivalent: None,
            },
        }
    }

    pub fn root_index(self) -> u8 {
        self.info().root_index
    }

    pub fn int_val(self) -> u8 {
        self.info().int_val
    }

    pub fn accidentals(self) -> &'static [Pitch] {
        self.info().accidentals
    }

    /// The key's tonic as a spelled pitch
    pub fn tonic(self) -> Pitch {
        match self {
            Key::C => Pitch::natural(Letter::C),
            Key::Db => flat(Letter::D),
            Key::D => Pitch::natural(Letter::D),
            Key::Eb => flat(Letter::E),
            Key::E => Pitch::natural(Letter::E),
            Key::F => Pitch::natural(Letter::F),
            Key::Fs => sharp(Letter::F),
            Key::G => Pitch::natural(Letter::G),
            Key::Ab => flat(Letter::A),
            Key::A => Pitch::natural(Letter::A),
            Key::Bb => flat(Letter::B),
            Key::B => Pitch::natural(Letter::B),
        }
    }

    /// Key whose tonic has this spelling
    pub fn from_tonic(pitch: Pitch) -> Option<Self> {
        Key::ALL.into_iter().find(|key| key.tonic() == pitch)
    }

    /// Whether the signature contains any sharp-spelled pitch
    pub fn has_sharp_signature(self) -> bool {
        self.accidentals().iter().any(|p| p.is_sharp_spelling())
    }

    /// Count and kind of the signature accidentals, e.g. `(2, Sharp)` for D.
    /// C major gives `(0, Natural)`.
    pub fn signature_glyph(self) -> (usize, Accidental) {
        let accidentals = self.accidentals();
        match accidentals.first() {
            None => (0, Accidental::Natural),
            Some(first) => (accidentals.len(), first.accidental),
        }
    }

    /// Spell a scale's starting pitch so it agrees with this key's signature.
    ///
    /// A flat-spelled start in a sharp key is replaced by the enharmonic
    /// spelling of the key it names (`Db` becomes `C#`). Anything else is
    /// returned unchanged.
    pub fn resolve_start(self, start: Pitch) -> Pitch {
        if !start.is_flat_spelling() || !self.has_sharp_signature() {
            return start;
        }
        Key::from_tonic(start)
            .and_then(|named| named.info().equivalent)
            .unwrap_or(start)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tonic())
    }
}

impl FromStr for Key {
    type Err = PracticeError;

    fn from_str(s: &str) -> Result<Self> {
        let pitch: Pitch = s
            .parse()
            .map_err(|_| PracticeError::InvalidKey(s.to_string()))?;
        Key::from_tonic(pitch).ok_or_else(|| PracticeError::InvalidKey(s.to_string()))
    }
}
