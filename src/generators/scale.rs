// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Two-octave scale exercise.

use tracing::debug;

use super::{caption, NoteValue, Sheet, SheetGenerator};
use crate::error::Result;
use crate::music::{build_scale, Key, ScaleKind};

/// Octave of the first scale note
pub const SCALE_START_OCTAVE: i32 = 3;

/// Scale sheet generator for one scale kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaleSheet {
    kind: ScaleKind,
}

impl ScaleSheet {
    pub fn new(kind: ScaleKind) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> ScaleKind {
        self.kind
    }
}

impl SheetGenerator for ScaleSheet {
    fn title(&self) -> &'static str {
        "Scale"
    }

    /// Signature key and tonic are both found by offsetting the reference
    /// pair of the scale kind by `key_index`.
    fn generate(&self, key_index: i64) -> Result<Sheet> {
        let descriptor = self.kind.descriptor();
        let key = Key::at(descriptor.start_key.int_val() as i64 + key_index);
        let tonic = Key::at(key_index + descriptor.start_note.int_val() as i64).tonic();
        let first = key.resolve_start(tonic);

        debug!(%key, %first, kind = %self.kind, "building scale");

        let notes = build_scale(first, &descriptor.steps, key.accidentals(), SCALE_START_OCTAVE)?;
        Ok(Sheet::new(key, notes, NoteValue::Whole)
            .with_annotation(caption(first, descriptor.name)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::music::{Annotation, SCALE_LENGTH};

    fn spelled(sheet: &Sheet) -> Vec<String> {
        sheet.notes.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_c_major_is_unmarked() {
        let sheet = ScaleSheet::new(ScaleKind::Major).generate(0).unwrap();
        assert_eq!(sheet.key, Key::C);
        assert_eq!(sheet.notes.len(), SCALE_LENGTH);
        assert_eq!(sheet.notes[0].to_string(), "C/3");
        assert_eq!(sheet.notes[14].to_string(), "C/5");
        assert!(sheet.notes.iter().all(|n| n.annotation == Annotation::None));
        assert_eq!(sheet.annotation.as_deref(), Some("C Major"));
        assert!(sheet.beams.is_empty());
    }

    #[test]
    fn test_f_sharp_major() {
        let sheet = ScaleSheet::new(ScaleKind::Major).generate(6).unwrap();
        assert_eq!(sheet.key, Key::Fs);
        assert_eq!(sheet.notes[6].to_string(), "E#/4");
        assert_eq!(sheet.notes[6].annotation, Annotation::None);
    }

    #[test]
    fn test_minor_uses_relative_major_signature() {
        let sheet = ScaleSheet::new(ScaleKind::Minor).generate(0).unwrap();
        assert_eq!(sheet.key, Key::Eb);
        assert_eq!(
            spelled(&sheet)[..8],
            ["C/3", "D/3", "Eb/3", "F/3", "G/3", "Ab/3", "Bb/3", "C/4"]
        );
        assert_eq!(sheet.annotation.as_deref(), Some("C Minor"));

        let a_minor = ScaleSheet::new(ScaleKind::Minor).generate(9).unwrap();
        assert_eq!(a_minor.key, Key::C);
        assert_eq!(a_minor.notes[0].to_string(), "A/3");
    }

    #[test]
    fn test_flat_tonic_respelled_in_sharp_key() {
        // Db minor is written as C# minor under the E major signature
        let sheet = ScaleSheet::new(ScaleKind::Minor).generate(1).unwrap();
        assert_eq!(sheet.key, Key::E);
        assert_eq!(sheet.notes[0].to_string(), "C#/3");
        assert_eq!(sheet.annotation.as_deref(), Some("C♯ Minor"));

        // Eb minor becomes D# minor under F# major
        let sheet = ScaleSheet::new(ScaleKind::Minor).generate(3).unwrap();
        assert_eq!(sheet.key, Key::Fs);
        assert_eq!(sheet.notes[1].to_string(), "E#/3");
    }

    #[test]
    fn test_flat_major_keeps_flats() {
        let sheet = ScaleSheet::new(ScaleKind::Major).generate(1).unwrap();
        assert_eq!(sheet.key, Key::Db);
        assert_eq!(
            spelled(&sheet)[..8],
            ["Db/3", "Eb/3", "F/3", "Gb/3", "Ab/3", "Bb/3", "C/4", "Db/4"]
        );
        assert_eq!(sheet.annotation.as_deref(), Some("D♭ Major"));
    }

    #[test]
    fn test_all_keys_and_kinds_build() {
        for kind in ScaleKind::ALL {
            for i in 0..12 {
                let sheet = ScaleSheet::new(kind).generate(i).unwrap();
                assert_eq!(sheet.notes.len(), SCALE_LENGTH);
                assert_eq!(sheet, ScaleSheet::new(kind).generate(i + 12).unwrap());
            }
        }
    }
}
