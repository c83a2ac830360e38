// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! LilyPond output.
//!
//! Each sheet becomes one treble staff with absolute pitches. LilyPond's
//! unmarked `c` is C3, each `'` raises an octave and each `,` lowers one.

use std::io::Write;

use super::StaffRenderer;
use crate::error::{PracticeError, Result};
use crate::generators::Sheet;
use crate::music::{Accidental, GeneratedNote, Pitch};

const LILYPOND_VERSION: &str = "2.24.0";

/// Pitch name in LilyPond's Dutch naming (`fis`, `ees`, `bisis`)
pub fn ly_pitch(pitch: Pitch) -> String {
    let suffix = match pitch.accidental {
        Accidental::DoubleFlat => "eses",
        Accidental::Flat => "es",
        Accidental::Natural => "",
        Accidental::Sharp => "is",
        Accidental::DoubleSharp => "isis",
    };
    format!("{}{}", pitch.letter.as_char().to_ascii_lowercase(), suffix)
}

/// Absolute note name with octave marks
pub fn ly_note(note: &GeneratedNote) -> String {
    let mut name = ly_pitch(note.pitch);
    let marks = note.octave - 3;
    let mark = if marks > 0 { '\'' } else { ',' };
    for _ in 0..marks.unsigned_abs() {
        name.push(mark);
    }
    name
}

fn staff_body(sheet: &Sheet) -> String {
    let duration = sheet.note_value.division();
    let mut out = String::new();
    for (i, note) in sheet.notes.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(&ly_note(note));
        // "!" forces the accidental to print, covering natural cancellations
        if note.annotation.is_marked() {
            out.push('!');
        }
        out.push_str(&duration.to_string());
        if i == 0 {
            if let Some(text) = &sheet.annotation {
                out.push_str(&format!("^\"{}\"", text.replace('"', "'")));
            }
        }
        for beam in &sheet.beams {
            if beam.len() > 1 && beam.start == i {
                out.push('[');
            }
            if beam.len() > 1 && beam.end == i + 1 {
                out.push(']');
            }
        }
    }
    out
}

/// Writes a `.ly` document: a version header, then one staff per sheet
pub struct LilypondRenderer<W: Write> {
    out: W,
    header_written: bool,
}

impl<W: Write> LilypondRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            header_written: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> StaffRenderer for LilypondRenderer<W> {
    fn render(&mut self, title: &str, sheet: &Sheet) -> Result<()> {
        let mut text = String::new();
        if !self.header_written {
            text.push_str(&format!("\\version \"{}\"\n\n", LILYPOND_VERSION));
            self.header_written = true;
        }
        text.push_str(&format!("% {}\n", title));
        text.push_str("\\new Staff {\n");
        text.push_str("  \\clef treble\n");
        text.push_str(&format!("  \\key {} \\major\n", ly_pitch(sheet.key.tonic())));
        text.push_str(&format!("  {}\n", staff_body(sheet)));
        text.push_str("}\n\n");
        self.out
            .write_all(text.as_bytes())
            .map_err(PracticeError::Render)
    }
}
