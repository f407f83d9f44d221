//! Train Compositor
//!
//! Turns the horizontal cursor into positioned writes: picks the wheel phase,
//! works out the engine row (straight across the middle of the screen, or a
//! diagonal climb in flight mode), draws the engine and every trailing part
//! line by line, then passengers, then hands the funnel position to the smoke
//! system.

use tracing::trace;

use crate::config::AnimationConfig;
use crate::smoke::SmokeSystem;
use crate::sprites::MAN;
use crate::surface::{Surface, Tint};
use crate::train::{frame_for, TrainSpec};

/// Column base used to phase the passenger animation
const MAN_PHASE_BASE: i32 = 84;

/// Columns per passenger animation phase
const MAN_PHASE_WIDTH: i32 = 12;

/// Result of composing one frame
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    /// The train was drawn with its left edge at `offset`
    Drawn {
        /// Engine column (may be negative)
        offset: i32,
        /// Engine top row
        row: i32,
    },
    /// The train has fully left the screen; nothing was written
    OffScreen,
}

/// Draws the configured train onto a surface
#[derive(Debug)]
pub struct Compositor<'a> {
    config: &'a AnimationConfig,
    spec: &'static TrainSpec,
    color: bool,
}

impl<'a> Compositor<'a> {
    /// Create a compositor for a run
    pub fn new(config: &'a AnimationConfig) -> Self {
        Self {
            config,
            spec: config.variant.spec(),
            color: true,
        }
    }

    /// Enable or disable the livery tint
    #[must_use]
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Draw the frame for cursor `x`
    pub fn draw<S: Surface + ?Sized>(
        &self,
        x: i32,
        surface: &mut S,
        smoke: &mut SmokeSystem,
    ) -> FrameOutcome {
        let spec = self.spec;
        let offset = x - spec.length;
        if offset < -spec.length {
            return FrameOutcome::OffScreen;
        }

        let row = self.engine_row(offset, surface.rows(), surface.cols());
        let engine = spec.engine_frame(frame_for(spec.variant, offset));

        if spec.livery && self.color {
            surface.set_tint(Tint::Livery);
        }
        for (i, line) in engine.iter().enumerate() {
            let line_row = row + i32::try_from(i).unwrap_or(i32::MAX);
            surface.put_str(line_row, offset, line);
            for part in spec.trailers {
                if let Some(part_line) = part.lines.get(i) {
                    let part_row = line_row + self.flight_drop(part.fly_drop);
                    surface.put_str(part_row, offset + part.col, part_line);
                }
            }
        }
        surface.set_tint(Tint::Default);

        if self.config.accident {
            for passenger in spec.passengers {
                add_man(
                    surface,
                    row + passenger.row + self.flight_drop(passenger.fly_drop),
                    offset + passenger.col,
                );
            }
        }

        if let Some(funnel) = spec.funnel {
            smoke.emit(surface, row - 1, offset + funnel);
        }

        trace!(x, offset, row, "frame composed");
        FrameOutcome::Drawn { offset, row }
    }

    /// Top row of the engine
    ///
    /// Straight runs sit just above the middle of the screen. Flying trains
    /// start near the bottom edge and climb one row every `flight_slope`
    /// columns.
    fn engine_row(&self, offset: i32, rows: i32, cols: i32) -> i32 {
        let spec = self.spec;
        if self.config.fly {
            offset / spec.flight_slope + rows - cols / spec.flight_slope - spec.height
        } else {
            rows / 2 - spec.lift
        }
    }

    fn flight_drop(&self, fly_drop: i32) -> i32 {
        if self.config.fly {
            fly_drop
        } else {
            0
        }
    }
}

/// Draw one passenger waving for help
fn add_man<S: Surface + ?Sized>(surface: &mut S, row: i32, col: i32) {
    let phase = ((MAN_PHASE_BASE + col) / MAN_PHASE_WIDTH).rem_euclid(2);
    let glyphs = MAN[usize::try_from(phase).unwrap_or(0)];
    for (i, line) in glyphs.iter().enumerate() {
        surface.put_str(row + i32::try_from(i).unwrap_or(0), col, line);
    }
}
