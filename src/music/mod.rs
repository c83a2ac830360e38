// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Music theory for practice generation.
//!
//! This module provides spelled pitches, the twelve practice keys with
//! their signatures, and the scale builder.

pub mod key;
pub mod pitch;
pub mod scale;

pub use key::{Key, KeyInfo};
pub use pitch::{intervals_to_string, Accidental, Letter, Pitch, Step};
pub use scale::{build_scale, Annotation, GeneratedNote, ScaleDescriptor, ScaleKind, SCALE_LENGTH};
