// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Practice session orchestration.
//!
//! A session is a pure function of its day index. The generator is seeded
//! once and every choice is drawn from it in a fixed order:
//!
//! 1. melodic pattern key index, `next_range(0, 12)`
//! 2. scale key index, `next_range(0, 12)`
//! 3. scale mode, `next_float() > 0.2` means Major, otherwise Minor
//! 4. excerpt, `choice(EXCERPTS)`
//!
//! Reordering these draws changes every day's exercises.

pub mod day;

pub use day::{
    calendar_date, date_for_day, day_index, today, DAY_OFFSET, MAX_DAY, MIN_DAY, SECONDS_PER_DAY,
};

use serde::Serialize;
use tracing::{debug, info};

use crate::error::{PracticeError, Result};
use crate::generators::excerpt::ExcerptLoader;
use crate::generators::{
    Excerpt, ExcerptSlot, ScaleSheet, Sheet, SheetGenerator, SimpleButBeautiful, EXCERPTS,
};
use crate::music::{Key, ScaleKind};
use crate::random::{Lcg, LCG_MODULUS};
use crate::render::StaffRenderer;

/// Exercises generated per call to [`PracticeGenerator::generate`]
pub const EXERCISES_PER_SESSION: u32 = 3;

/// Highest usable slot (bit index of a 64-bit completion mask)
pub const MAX_SLOT: u32 = 63;

/// Mode rolls above this are Major
pub const MAJOR_THRESHOLD: f64 = 0.2;

/// Values drawn for one session, in draw order
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Draws {
    pub melody_key: i64,
    pub scale_key: i64,
    pub mode_roll: f64,
    pub excerpt_index: usize,
}

impl Draws {
    /// Take the four session draws from `rng`
    pub fn take(rng: &mut Lcg) -> Self {
        let key_count = Key::ALL.len() as i64;
        let melody_key = rng.next_range(0, key_count);
        debug!(melody_key, "draw 1: melodic pattern key");
        let scale_key = rng.next_range(0, key_count);
        debug!(scale_key, "draw 2: scale key");
        let mode_roll = rng.next_float();
        debug!(mode_roll, "draw 3: scale mode");
        let excerpt_index = rng.next_range(0, EXCERPTS.len() as i64) as usize;
        debug!(excerpt_index, "draw 4: excerpt");

        Self {
            melody_key,
            scale_key,
            mode_roll,
            excerpt_index,
        }
    }

    /// 80/20 weighted mode choice
    pub fn scale_kind(&self) -> ScaleKind {
        if self.mode_roll > MAJOR_THRESHOLD {
            ScaleKind::Major
        } else {
            ScaleKind::Minor
        }
    }

    pub fn excerpt(&self) -> &'static Excerpt {
        &EXCERPTS[self.excerpt_index % EXCERPTS.len()]
    }
}

/// What an exercise shows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ExerciseContent {
    Sheet(Sheet),
    Excerpt(&'static Excerpt),
}

/// One exercise of a session and its completion slot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Exercise {
    pub slot: u32,
    pub title: &'static str,
    pub content: ExerciseContent,
}

impl Exercise {
    pub fn sheet(&self) -> Option<&Sheet> {
        match &self.content {
            ExerciseContent::Sheet(sheet) => Some(sheet),
            ExerciseContent::Excerpt(_) => None,
        }
    }
}

/// A generated set of exercises
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Session {
    pub day: i64,
    pub draws: Draws,
    pub exercises: Vec<Exercise>,
}

impl Session {
    pub fn slots(&self) -> Vec<u32> {
        self.exercises.iter().map(|e| e.slot).collect()
    }

    /// The excerpt exercise, if any
    pub fn excerpt(&self) -> Option<(&Exercise, &'static Excerpt)> {
        self.exercises.iter().find_map(|exercise| match exercise.content {
            ExerciseContent::Excerpt(excerpt) => Some((exercise, excerpt)),
            ExerciseContent::Sheet(_) => None,
        })
    }

    /// Hand every sheet to `renderer`, in slot order
    pub fn render_sheets<R: StaffRenderer>(&self, renderer: &mut R) -> Result<()> {
        for exercise in &self.exercises {
            if let Some(sheet) = exercise.sheet() {
                renderer.render(exercise.title, sheet)?;
            }
        }
        Ok(())
    }

    /// The excerpt slot in its initial loading state
    pub fn excerpt_slot(&self) -> Option<ExcerptSlot> {
        self.excerpt().map(|(_, excerpt)| ExcerptSlot::new(excerpt))
    }

    /// Render the session's excerpt through `loader`
    pub async fn render_excerpt<L: ExcerptLoader>(&self, loader: &L) -> Option<ExcerptSlot> {
        let mut slot = self.excerpt_slot()?;
        slot.render(loader).await;
        Some(slot)
    }
}

/// Produces sessions for one day from a single generator
#[derive(Debug, Clone)]
pub struct PracticeGenerator {
    day: i64,
    rng: Lcg,
    next_slot: u32,
}

impl PracticeGenerator {
    /// Generator for a day; the same day always yields the same sessions
    pub fn for_day(day: i64) -> Self {
        let state = day.rem_euclid(LCG_MODULUS as i64) as u32;
        Self::with_rng(day, Lcg::from_state(state))
    }

    /// Generator for the current date
    pub fn today() -> Self {
        Self::for_day(today())
    }

    /// Use a caller-provided stream (e.g. a text seed) for `day`
    pub fn with_rng(day: i64, rng: Lcg) -> Self {
        Self {
            day,
            rng,
            next_slot: 0,
        }
    }

    pub fn day(&self) -> i64 {
        self.day
    }

    fn allocate_slot(&mut self) -> Result<u32> {
        let slot = self.next_slot;
        if slot > MAX_SLOT {
            return Err(PracticeError::SlotOutOfRange(slot));
        }
        self.next_slot += 1;
        Ok(slot)
    }

    /// Draw and build the next set of exercises.
    ///
    /// The first call gives the day's session on slots 0-2. Further calls
    /// continue the same stream and take the following slots, so a re-rolled
    /// set is tracked on its own.
    pub fn generate(&mut self) -> Result<Session> {
        if self.next_slot + EXERCISES_PER_SESSION > MAX_SLOT + 1 {
            let last = self.next_slot + EXERCISES_PER_SESSION - 1;
            return Err(PracticeError::SlotOutOfRange(last));
        }

        let draws = Draws::take(&mut self.rng);
        let kind = draws.scale_kind();
        info!(
            day = self.day,
            %kind,
            excerpt = draws.excerpt().title,
            "generating practice session"
        );

        let melody = SimpleButBeautiful::new();
        let scale = ScaleSheet::new(kind);

        let exercises = vec![
            Exercise {
                slot: self.allocate_slot()?,
                title: melody.title(),
                content: ExerciseContent::Sheet(melody.generate(draws.melody_key)?),
            },
            Exercise {
                slot: self.allocate_slot()?,
                title: scale.title(),
                content: ExerciseContent::Sheet(scale.generate(draws.scale_key)?),
            },
            Exercise {
                slot: self.allocate_slot()?,
                title: "Excerpt",
                content: ExerciseContent::Excerpt(draws.excerpt()),
            },
        ];

        Ok(Session {
            day: self.day,
            draws,
            exercises,
        })
    }
}
