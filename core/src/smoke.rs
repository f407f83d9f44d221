//! Smoke Particle System
//!
//! Puffs leave the funnel, rise and drift backwards while fading through
//! [`SMOKE_STAGES`] glyphs. Every eligible tick each puff erases its old
//! glyph, moves by the delta of its current stage, advances one stage and
//! redraws. The last stage is a blank, so a fully faded puff keeps erasing
//! harmlessly instead of being removed.
//!
//! Ticks only happen on frames where the emission column is a multiple of 4;
//! this ties smoke density to train speed.

use tracing::trace;

use crate::sprites::{SMOKE, SMOKE_DX, SMOKE_DY, SMOKE_ERASER, SMOKE_STAGES};
use crate::surface::Surface;

/// Columns between emissions
const EMIT_PERIOD: i32 = 4;

/// Density variant of a puff
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PuffKind {
    /// Outlined puff drawn with parentheses
    Light,
    /// Dense puff drawn with `@`
    Dense,
}

impl PuffKind {
    fn for_count(count: usize) -> Self {
        if count % 2 == 0 {
            Self::Light
        } else {
            Self::Dense
        }
    }

    fn glyphs(self) -> &'static [&'static str; SMOKE_STAGES] {
        match self {
            Self::Light => &SMOKE[0],
            Self::Dense => &SMOKE[1],
        }
    }
}

/// One tracked smoke puff
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Puff {
    /// Current row
    pub row: i32,
    /// Current column
    pub col: i32,
    /// Fade stage, `0..SMOKE_STAGES`
    pub stage: usize,
    /// Density variant
    pub kind: PuffKind,
}

impl Puff {
    /// Glyph for the current stage
    pub fn glyph(&self) -> &'static str {
        self.kind.glyphs()[self.stage]
    }

    /// True once the puff has faded to the blank stage
    pub fn is_faded(&self) -> bool {
        self.stage == SMOKE_STAGES - 1
    }

    fn advance(&mut self) {
        self.row -= SMOKE_DY[self.stage];
        self.col += SMOKE_DX[self.stage];
        if self.stage < SMOKE_STAGES - 1 {
            self.stage += 1;
        }
    }
}

/// All puffs emitted during a run
///
/// Faded puffs are never reclaimed. The store is sized up front for the
/// number of frames in the run, which bounds the number of emissions.
#[derive(Debug)]
pub struct SmokeSystem {
    puffs: Vec<Puff>,
    capacity: usize,
}

impl SmokeSystem {
    /// Create a store large enough for a run of `frames` frames
    pub fn for_frames(frames: usize) -> Self {
        let capacity = frames.div_ceil(4) + 1;
        Self {
            puffs: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Emit at (row, col) and advance existing puffs, if this is an
    /// emission frame
    ///
    /// Returns `true` when a puff was emitted.
    pub fn emit<S: Surface + ?Sized>(&mut self, surface: &mut S, row: i32, col: i32) -> bool {
        if col % EMIT_PERIOD != 0 {
            return false;
        }

        for puff in &mut self.puffs {
            surface.put_str(puff.row, puff.col, SMOKE_ERASER[puff.stage]);
            puff.advance();
            surface.put_str(puff.row, puff.col, puff.glyph());
        }

        let puff = Puff {
            row,
            col,
            stage: 0,
            kind: PuffKind::for_count(self.puffs.len()),
        };
        surface.put_str(row, col, puff.glyph());

        debug_assert!(
            self.puffs.len() < self.capacity,
            "smoke store exceeded its frame-derived capacity"
        );
        self.puffs.push(puff);
        trace!(row, col, total = self.puffs.len(), "smoke emitted");
        true
    }

    /// Puffs emitted so far, oldest first
    pub fn puffs(&self) -> &[Puff] {
        &self.puffs
    }

    /// Number of puffs emitted so far
    pub fn len(&self) -> usize {
        self.puffs.len()
    }

    /// True before the first emission
    pub fn is_empty(&self) -> bool {
        self.puffs.is_empty()
    }

    /// Maximum number of puffs this run can emit
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
