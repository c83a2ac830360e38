// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Spelled pitches and melodic steps.
//!
//! A spelled pitch keeps its letter and accidental apart (`E#` is not `F`),
//! which is what lets scales come out with textbook spelling. The successor
//! table below drives every scale walk.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PracticeError, Result};

/// Natural letter names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Letter {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl Letter {
    /// Letters in staff order starting from C
    pub const ALL: [Letter; 7] = [
        Letter::C,
        Letter::D,
        Letter::E,
        Letter::F,
        Letter::G,
        Letter::A,
        Letter::B,
    ];

    /// Letter at a (wrapping) staff position, 0 = C
    pub fn from_degree(degree: i64) -> Self {
        Letter::ALL[degree.rem_euclid(7) as usize]
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'C' => Some(Letter::C),
            'D' => Some(Letter::D),
            'E' => Some(Letter::E),
            'F' => Some(Letter::F),
            'G' => Some(Letter::G),
            'A' => Some(Letter::A),
            'B' => Some(Letter::B),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Letter::C => 'C',
            Letter::D => 'D',
            Letter::E => 'E',
            Letter::F => 'F',
            Letter::G => 'G',
            Letter::A => 'A',
            Letter::B => 'B',
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Accidental attached to a letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Accidental {
    DoubleFlat,
    Flat,
    Natural,
    Sharp,
    DoubleSharp,
}

impl Accidental {
    /// Text suffix as written after the letter ("" for natural)
    pub fn suffix(self) -> &'static str {
        match self {
            Accidental::DoubleFlat => "bb",
            Accidental::Flat => "b",
            Accidental::Natural => "",
            Accidental::Sharp => "#",
            Accidental::DoubleSharp => "##",
        }
    }

    pub fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "bb" => Some(Accidental::DoubleFlat),
            "b" => Some(Accidental::Flat),
            "" => Some(Accidental::Natural),
            "#" => Some(Accidental::Sharp),
            "##" => Some(Accidental::DoubleSharp),
            _ => None,
        }
    }
}

/// Melodic step between consecutive scale tones
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Step {
    Half = 1,
    Whole = 2,
    AugmentedSecond = 3,
}

impl Step {
    pub fn from_value(value: u8) -> Option<Self> {
        match value {
            1 => Some(Step::Half),
            2 => Some(Step::Whole),
            3 => Some(Step::AugmentedSecond),
            _ => None,
        }
    }

    /// Size in half steps
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Column in the successor table
    fn column(self) -> usize {
        self.value() as usize - 1
    }

    pub fn short_name(self) -> &'static str {
        match self {
            Step::Half => "H",
            Step::Whole => "W",
            Step::AugmentedSecond => "A2",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

/// Render an interval pattern as "W - W - H - ..."
pub fn intervals_to_string(steps: &[Step]) -> String {
    steps
        .iter()
        .map(|s| s.short_name())
        .collect::<Vec<_>>()
        .join(" - ")
}

/// A letter plus accidental, e.g. `F#` or `Bbb`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pitch {
    pub letter: Letter,
    pub accidental: Accidental,
}

impl Pitch {
    pub const fn new(letter: Letter, accidental: Accidental) -> Self {
        Self { letter, accidental }
    }

    pub const fn natural(letter: Letter) -> Self {
        Self::new(letter, Accidental::Natural)
    }

    /// Same letter with another accidental
    pub fn with_accidental(self, accidental: Accidental) -> Self {
        Self::new(self.letter, accidental)
    }

    /// True when the spelling's second character is `b`
    pub fn is_flat_spelling(self) -> bool {
        matches!(self.accidental, Accidental::Flat | Accidental::DoubleFlat)
    }

    /// True when the spelling's second character is `#`
    pub fn is_sharp_spelling(self) -> bool {
        matches!(self.accidental, Accidental::Sharp | Accidental::DoubleSharp)
    }

    pub fn has_accidental(self) -> bool {
        self.accidental != Accidental::Natural
    }

    /// Display form with music glyphs: the first `b` becomes `♭` and the
    /// first `#` becomes `♯` (so `Bbb` reads `B♭b`).
    pub fn glyphs(self) -> String {
        self.to_string().replacen('b', "♭", 1).replacen('#', "♯", 1)
    }

    /// Next spelled pitch a `step` above this one
    pub fn successor(self, step: Step) -> Result<Pitch> {
        SUCCESSORS
            .iter()
            .find(|(pitch, _)| *pitch == self)
            .map(|(_, next)| next[step.column()])
            .ok_or(PracticeError::MissingTransition { pitch: self, step })
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.letter, self.accidental.suffix())
    }
}

impl FromStr for Pitch {
    type Err = PracticeError;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        let letter = chars
            .next()
            .and_then(Letter::from_char)
            .ok_or_else(|| PracticeError::InvalidPitch(s.to_string()))?;
        let accidental = Accidental::from_suffix(chars.as_str())
            .ok_or_else(|| PracticeError::InvalidPitch(s.to_string()))?;
        Ok(Pitch::new(letter, accidental))
    }
}

const fn bb(letter: Letter) -> Pitch {
    Pitch::new(letter, Accidental::DoubleFlat)
}

const fn b(letter: Letter) -> Pitch {
    Pitch::new(letter, Accidental::Flat)
}

const fn n(letter: Letter) -> Pitch {
    Pitch::natural(letter)
}

const fn s(letter: Letter) -> Pitch {
    Pitch::new(letter, Accidental::Sharp)
}

const fn ss(letter: Letter) -> Pitch {
    Pitch::new(letter, Accidental::DoubleSharp)
}

use Letter::{A, B, C, D, E, F, G};

/// Successors of each spelling: `[half step, whole step, augmented second]`.
///
/// Some entries use an enharmonic shortcut rather than the strict spelling
/// (`C##` + A2 is written `F`). `B##` has no entry.
static SUCCESSORS: [(Pitch, [Pitch; 3]); 34] = [
    (bb(C), [b(C), bb(D), b(D)]),
    (b(C), [bb(D), b(D), n(D)]),
    (n(C), [b(D), n(D), s(D)]),
    (s(C), [n(D), s(D), ss(D)]),
    (ss(C), [s(D), ss(D), n(F)]),
    (bb(D), [b(D), bb(E), b(E)]),
    (b(D), [bb(E), b(E), n(E)]),
    (n(D), [b(E), n(E), s(E)]),
    (s(D), [n(E), s(E), ss(E)]),
    (ss(D), [s(E), ss(E), s(F)]),
    (bb(E), [b(E), b(F), n(F)]),
    (b(E), [b(F), n(F), s(F)]),
    (n(E), [n(F), s(F), ss(F)]),
    (s(E), [s(F), ss(F), s(G)]),
    (ss(E), [ss(F), s(G), n(A)]),
    (bb(F), [b(F), n(F), b(G)]),
    (b(F), [bb(G), b(G), n(G)]),
    (n(F), [b(G), n(G), s(G)]),
    (s(F), [n(G), s(G), ss(G)]),
    (ss(F), [s(G), n(A), s(A)]),
    (bb(G), [b(G), bb(A), b(A)]),
    (b(G), [bb(A), b(A), n(A)]),
    (n(G), [b(A), n(A), s(A)]),
    (s(G), [n(A), s(A), ss(A)]),
    (ss(G), [s(A), n(B), n(C)]),
    (bb(A), [bb(B), b(B), n(B)]),
    (b(A), [bb(B), b(B), n(B)]),
    (n(A), [b(B), n(B), s(B)]),
    (s(A), [n(B), s(B), s(C)]),
    (ss(A), [n(C), s(C), n(D)]),
    (bb(B), [b(B), n(B), n(C)]),
    (b(B), [b(C), n(C), s(C)]),
    (n(B), [n(C), s(C), ss(C)]),
    (s(B), [s(C), ss(C), s(D)]),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn p(text: &str) -> Pitch {
        text.parse().unwrap()
    }

    #[test]
    fn test_parse_and_display() {
        for text in ["C", "F#", "Bb", "Bbb", "G##", "E#"] {
            assert_eq!(p(text).to_string(), text);
        }
        assert_eq!(p("Db"), Pitch::new(Letter::D, Accidental::Flat));
        assert!("H".parse::<Pitch>().is_err());
        assert!("C###".parse::<Pitch>().is_err());
        assert!("".parse::<Pitch>().is_err());
        assert!("c#".parse::<Pitch>().is_err());
    }

    #[test]
    fn test_spelling_polarity() {
        assert!(p("Bb").is_flat_spelling());
        assert!(p("Bbb").is_flat_spelling());
        assert!(!p("B").is_flat_spelling());
        assert!(p("F#").is_sharp_spelling());
        assert!(p("F##").is_sharp_spelling());
        assert!(!p("Fb").is_sharp_spelling());
    }

    #[test]
    fn test_glyphs() {
        assert_eq!(p("Eb").glyphs(), "E♭");
        assert_eq!(p("F#").glyphs(), "F♯");
        assert_eq!(p("Bbb").glyphs(), "B♭b");
        assert_eq!(p("C").glyphs(), "C");
    }

    #[test]
    fn test_successors() {
        assert_eq!(p("C").successor(Step::Half).unwrap(), p("Db"));
        assert_eq!(p("C").successor(Step::Whole).unwrap(), p("D"));
        assert_eq!(p("C").successor(Step::AugmentedSecond).unwrap(), p("D#"));
        assert_eq!(p("E").successor(Step::Half).unwrap(), p("F"));
        assert_eq!(p("D#").successor(Step::Whole).unwrap(), p("E#"));
        assert_eq!(p("C##").successor(Step::AugmentedSecond).unwrap(), p("F"));
        assert_eq!(p("G##").successor(Step::AugmentedSecond).unwrap(), p("C"));
    }

    #[test]
    fn test_missing_successor_is_an_error() {
        let err = p("B##").successor(Step::Whole).unwrap_err();
        assert!(matches!(
            err,
            PracticeError::MissingTransition { step: Step::Whole, .. }
        ));
    }

    #[test]
    fn test_table_has_unique_entries() {
        for (i, (pitch, _)) in SUCCESSORS.iter().enumerate() {
            assert!(
                SUCCESSORS[i + 1..].iter().all(|(other, _)| other != pitch),
                "duplicate entry for {}",
                pitch
            );
        }
    }

    #[test]
    fn test_letter_from_degree_wraps() {
        assert_eq!(Letter::from_degree(0), Letter::C);
        assert_eq!(Letter::from_degree(6), Letter::B);
        assert_eq!(Letter::from_degree(7), Letter::C);
        assert_eq!(Letter::from_degree(-1), Letter::B);
        assert_eq!(Letter::from_degree(-8), Letter::B);
    }

    #[test]
    fn test_steps() {
        assert_eq!(Step::from_value(3), Some(Step::AugmentedSecond));
        assert_eq!(Step::from_value(0), None);
        assert_eq!(
            intervals_to_string(&[Step::Whole, Step::Half, Step::AugmentedSecond]),
            "W - H - A2"
        );
    }
}
