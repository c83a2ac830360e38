// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Staff renderers.
//!
//! The generators only describe notes; a renderer turns a titled [`Sheet`]
//! into something a player can read. Plain text is used by the command
//! line, LilyPond output can be engraved into real notation.

pub mod lilypond;
pub mod text;

pub use lilypond::LilypondRenderer;
pub use text::TextRenderer;

use crate::error::Result;
use crate::generators::Sheet;

/// Renders one staff per call, in session order
pub trait StaffRenderer {
    fn render(&mut self, title: &str, sheet: &Sheet) -> Result<()>;
}

/// Collects sheets in memory; useful for inspecting a session
#[derive(Debug, Default)]
pub struct SheetCollector {
    pub sheets: Vec<(String, Sheet)>,
}

impl StaffRenderer for SheetCollector {
    fn render(&mut self, title: &str, sheet: &Sheet) -> Result<()> {
        self.sheets.push((title.to_string(), sheet.clone()));
        Ok(())
    }
}
