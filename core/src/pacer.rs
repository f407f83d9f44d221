//! Frame Pacer
//!
//! Spreads a requested total duration over the frames of a run. Instead of
//! sleeping a fixed amount per frame (which lets rendering cost pile up), each
//! frame is scheduled against the absolute start time: after `n` frames the
//! run should be `n * base_delay` old, and the pacer sleeps only the
//! difference.
//!
//! A schedule more than one second away from the clock is treated as fatal.

use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::error::AnimationError;

/// Schedule drift (µs) beyond which the run is abandoned
pub const OVERRUN_THRESHOLD_US: i64 = 1_000_000;

/// What the pacer decided for one frame
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pace {
    /// Ahead of schedule; wait this long
    Sleep(Duration),
    /// On or behind schedule; go straight to the next frame
    Continue,
}

/// Wall-clock pacing for one run
#[derive(Debug)]
pub struct FramePacer {
    base_delay_us: i64,
    start: Instant,
}

impl FramePacer {
    /// Start pacing now for `frames` frames spread over `duration`
    pub fn start(duration: Duration, frames: u64) -> Self {
        Self::starting_at(duration, frames, Instant::now())
    }

    /// Start pacing from an explicit start time
    pub fn starting_at(duration: Duration, frames: u64, start: Instant) -> Self {
        let duration_ms = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        let base_delay_us = base_delay_us(duration_ms, frames);
        debug!(duration_ms, frames, base_delay_us, "frame pacer started");
        Self {
            base_delay_us: i64::try_from(base_delay_us).unwrap_or(i64::MAX),
            start,
        }
    }

    /// Per-frame delay in microseconds
    pub fn base_delay(&self) -> Duration {
        Duration::from_micros(self.base_delay_us.unsigned_abs())
    }

    /// Decide how long to wait after `rendered` frames, `elapsed` after start
    ///
    /// # Errors
    ///
    /// Returns [`AnimationError::Overrun`] when the schedule is off by more
    /// than [`OVERRUN_THRESHOLD_US`].
    pub fn schedule(&self, rendered: u64, elapsed: Duration) -> Result<Pace, AnimationError> {
        let expected = i64::try_from(rendered)
            .unwrap_or(i64::MAX)
            .saturating_mul(self.base_delay_us);
        let actual = i64::try_from(elapsed.as_micros()).unwrap_or(i64::MAX);
        let adjusted = expected.saturating_sub(actual);

        if adjusted > OVERRUN_THRESHOLD_US {
            warn!(frame = rendered, adjusted_us = adjusted, "frame pacing overrun");
            return Err(AnimationError::Overrun {
                frame: rendered,
                drift: Duration::from_micros(adjusted.unsigned_abs()),
            });
        }

        if adjusted > 0 {
            Ok(Pace::Sleep(Duration::from_micros(adjusted.unsigned_abs())))
        } else {
            Ok(Pace::Continue)
        }
    }

    /// Measure the clock and block the thread until the next frame is due
    ///
    /// # Errors
    ///
    /// Propagates [`FramePacer::schedule`] errors.
    pub fn pace(&self, rendered: u64) -> Result<Pace, AnimationError> {
        let pace = self.schedule(rendered, self.start.elapsed())?;
        if let Pace::Sleep(delay) = pace {
            thread::sleep(delay);
        }
        Ok(pace)
    }
}

/// Per-frame delay in microseconds: `1000 * duration_ms / frames`
///
/// Integer division; a zero frame count is treated as one frame.
pub fn base_delay_us(duration_ms: u64, frames: u64) -> u64 {
    1000 * duration_ms / frames.max(1)
}
