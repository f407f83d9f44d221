//! Animation Loop
//!
//! One state variable, the cursor `x`, walks from `frames - 1` down to 0
//! where `frames = train length + screen width`. Each step composes the frame,
//! polls for a quit key, presents, and lets the pacer hold the thread until
//! the next frame is due.

use tracing::{debug, info};

use crate::compositor::{Compositor, FrameOutcome};
use crate::config::AnimationConfig;
use crate::error::AnimationError;
use crate::pacer::FramePacer;
use crate::smoke::SmokeSystem;
use crate::surface::Screen;

/// How a run ended without error
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// The train crossed the whole screen
    Completed {
        /// Frames presented
        frames: u64,
    },
    /// The user asked to quit
    Interrupted {
        /// Frames presented, including the one on screen when quitting
        frames: u64,
    },
}

/// State of one animation run
#[derive(Debug)]
pub struct AnimationLoop<'a> {
    compositor: Compositor<'a>,
    smoke: SmokeSystem,
    pacer: FramePacer,
    frames: i32,
    x: i32,
}

impl<'a> AnimationLoop<'a> {
    /// Prepare a run sized for a screen `cols` wide
    pub fn new(config: &'a AnimationConfig, cols: i32, color: bool) -> Self {
        let frames = config.variant.length() + cols.max(0);
        let frame_count = u64::try_from(frames).unwrap_or(0);
        Self {
            compositor: Compositor::new(config).with_color(color),
            smoke: SmokeSystem::for_frames(usize::try_from(frames).unwrap_or(0)),
            pacer: FramePacer::start(config.duration, frame_count),
            frames,
            x: frames - 1,
        }
    }

    /// Replace the pacer, e.g. to schedule against another start time
    #[must_use]
    pub fn with_pacer(mut self, pacer: FramePacer) -> Self {
        self.pacer = pacer;
        self
    }

    /// Total frames in the run
    pub fn frames(&self) -> i32 {
        self.frames
    }

    /// Current cursor value
    pub fn cursor(&self) -> i32 {
        self.x
    }

    /// Smoke emitted so far
    pub fn smoke(&self) -> &SmokeSystem {
        &self.smoke
    }

    /// Drive the run to completion on `screen`
    ///
    /// # Errors
    ///
    /// Returns [`AnimationError::Overrun`] when pacing falls apart and
    /// [`AnimationError::Io`] when the screen fails.
    pub fn run<S: Screen + ?Sized>(
        &mut self,
        screen: &mut S,
    ) -> Result<RunOutcome, AnimationError> {
        while self.x >= 0 {
            let outcome = self.compositor.draw(self.x, screen, &mut self.smoke);
            if outcome == FrameOutcome::OffScreen {
                debug!(x = self.x, "train left the screen");
            }

            let quit = screen.poll_quit()?;
            screen.present()?;
            self.x -= 1;

            let rendered = self.rendered();
            if quit {
                info!(frames = rendered, "animation interrupted");
                return Ok(RunOutcome::Interrupted { frames: rendered });
            }
            self.pacer.pace(rendered)?;
        }

        let frames = self.rendered();
        info!(frames, puffs = self.smoke.len(), "animation finished");
        Ok(RunOutcome::Completed { frames })
    }

    fn rendered(&self) -> u64 {
        u64::try_from(self.frames - 1 - self.x).unwrap_or(0)
    }
}

/// Run a full animation for `config` on `screen`
///
/// # Errors
///
/// See [`AnimationLoop::run`].
pub fn run<S: Screen + ?Sized>(
    config: &AnimationConfig,
    screen: &mut S,
    color: bool,
) -> Result<RunOutcome, AnimationError> {
    info!(
        variant = %config.variant,
        accident = config.accident,
        fly = config.fly,
        duration_ms = config.duration_ms(),
        rows = screen.rows(),
        cols = screen.cols(),
        "animation starting"
    );
    AnimationLoop::new(config, screen.cols(), color).run(screen)
}
