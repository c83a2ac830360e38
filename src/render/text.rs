// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Plain-text staff output.

use std::io::Write;

use super::StaffRenderer;
use crate::error::{PracticeError, Result};
use crate::generators::Sheet;
use crate::music::{Accidental, GeneratedNote, Key};

/// Writes each sheet as a titled block of `pitch/octave` tokens.
///
/// Printed accidentals follow the note in parentheses (`F/4(n)`); beamed
/// runs are wrapped in brackets.
pub struct TextRenderer<W: Write> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

fn signature_text(key: Key) -> String {
    let (count, accidental) = key.signature_glyph();
    let kind = match accidental {
        Accidental::Sharp | Accidental::DoubleSharp => "sharp",
        Accidental::Flat | Accidental::DoubleFlat => "flat",
        Accidental::Natural => return "no sharps or flats".to_string(),
    };
    let plural = if count == 1 { "" } else { "s" };
    format!("{} {}{}", count, kind, plural)
}

fn note_token(note: &GeneratedNote) -> String {
    if note.annotation.is_marked() {
        format!("{}({})", note, note.annotation.symbol())
    } else {
        note.to_string()
    }
}

fn notes_line(sheet: &Sheet) -> String {
    let mut tokens: Vec<String> = sheet.notes.iter().map(note_token).collect();
    for beam in &sheet.beams {
        if beam.is_empty() || beam.end > tokens.len() {
            continue;
        }
        tokens[beam.start].insert(0, '[');
        tokens[beam.end - 1].push(']');
    }
    tokens.join(" ")
}

impl<W: Write> StaffRenderer for TextRenderer<W> {
    fn render(&mut self, title: &str, sheet: &Sheet) -> Result<()> {
        let block = format!(
            "== {} ==\n{}\nkey: {} ({})\n{}\n\n",
            title,
            sheet.annotation.as_deref().unwrap_or(""),
            sheet.key,
            signature_text(sheet.key),
            notes_line(sheet)
        );
        self.out
            .write_all(block.as_bytes())
            .map_err(PracticeError::Render)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::{ScaleSheet, SheetGenerator, SimpleButBeautiful};
    use crate::music::{Annotation, ScaleKind};

    fn render(title: &str, sheet: &Sheet) -> String {
        let mut renderer = TextRenderer::new(Vec::new());
        renderer.render(title, sheet).unwrap();
        String::from_utf8(renderer.into_inner()).unwrap()
    }

    #[test]
    fn test_scale_block() {
        let sheet = ScaleSheet::new(ScaleKind::Major).generate(2).unwrap();
        let text = render("Scale", &sheet);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "== Scale ==");
        assert_eq!(lines[1], "D Major");
        assert_eq!(lines[2], "key: D (2 sharps)");
        assert!(lines[3].starts_with("D/3 E/3 F#/3 G/3"));
    }

    #[test]
    fn test_beams_and_signature() {
        let sheet = SimpleButBeautiful::new().generate(5).unwrap();
        let text = render("Simple but Beautiful", &sheet);
        assert!(text.contains("key: F (1 flat)"));
        assert!(text.contains("[F/4 E/4"));
        assert!(text.contains("E/4 F/4]"));
    }

    #[test]
    fn test_signature_text() {
        assert_eq!(signature_text(Key::C), "no sharps or flats");
        assert_eq!(signature_text(Key::G), "1 sharp");
        assert_eq!(signature_text(Key::Db), "5 flats");
        assert_eq!(signature_text(Key::Fs), "6 sharps");
    }

    #[test]
    fn test_marked_notes() {
        let mut sheet = ScaleSheet::new(ScaleKind::Major).generate(0).unwrap();
        sheet.key = Key::G;
        sheet.notes[3].annotation = Annotation::Natural;
        let text = render("Scale", &sheet);
        assert!(text.contains("F/3(n)"));
        assert!(text.contains("key: G (1 sharp)"));
    }
}
