//! Animation Configuration
//!
//! The run-time settings of one animation run. They are decided once from the
//! command line and then handed to every render component by reference; nothing
//! mutates them while the train is on screen.

use std::fmt;
use std::time::Duration;

use rand::Rng;

use crate::error::AnimationError;

/// Default total animation duration in milliseconds
pub const DEFAULT_DURATION_MS: u64 = 4000;

/// Shortest accepted animation duration in milliseconds
pub const MIN_DURATION_MS: u64 = 1;

/// Longest accepted animation duration in milliseconds
pub const MAX_DURATION_MS: u64 = 60_000;

/// The train variants that can cross the screen
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TrainVariant {
    /// The small "SL" logo engine with a coal wagon and two cars
    Logo,
    /// C51 steam locomotive with tender
    C51,
    /// D51 steam locomotive with tender (the classic)
    D51,
    /// TGV high-speed train with two coaches (no funnel, no smoke)
    Tgv,
}

impl TrainVariant {
    /// All variants, in id order
    pub const ALL: [TrainVariant; 4] = [Self::Logo, Self::C51, Self::D51, Self::Tgv];

    /// Pick a variant at random
    ///
    /// # Errors
    ///
    /// Returns [`AnimationError::UnknownVariant`] if the drawn id does not map
    /// to a variant, which would be an internal bug.
    pub fn random() -> Result<Self, AnimationError> {
        let id: u8 = rand::thread_rng().gen_range(1..=4);
        Self::try_from(id)
    }

    /// Stable numeric id (1-based)
    pub fn id(self) -> u8 {
        match self {
            Self::Logo => 1,
            Self::C51 => 2,
            Self::D51 => 3,
            Self::Tgv => 4,
        }
    }
}

impl TryFrom<u8> for TrainVariant {
    type Error = AnimationError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|v| v.id() == id)
            .ok_or(AnimationError::UnknownVariant(id))
    }
}

impl fmt::Display for TrainVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Logo => write!(f, "SL logo"),
            Self::C51 => write!(f, "C51"),
            Self::D51 => write!(f, "D51"),
            Self::Tgv => write!(f, "TGV"),
        }
    }
}

/// Immutable configuration for a single run
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnimationConfig {
    /// Which train to draw
    pub variant: TrainVariant,
    /// Draw people calling for help on the train
    pub accident: bool,
    /// Let the train take off diagonally
    pub fly: bool,
    /// Requested total duration of the animation
    pub duration: Duration,
}

impl AnimationConfig {
    /// Create a configuration with default flags and duration
    pub fn new(variant: TrainVariant) -> Self {
        Self {
            variant,
            accident: false,
            fly: false,
            duration: Duration::from_millis(DEFAULT_DURATION_MS),
        }
    }

    /// Enable or disable accident mode
    #[must_use]
    pub fn with_accident(mut self, accident: bool) -> Self {
        self.accident = accident;
        self
    }

    /// Enable or disable flight mode
    #[must_use]
    pub fn with_fly(mut self, fly: bool) -> Self {
        self.fly = fly;
        self
    }

    /// Set the total duration, clamped to the accepted range
    #[must_use]
    pub fn with_duration_ms(mut self, millis: i64) -> Self {
        self.duration = Duration::from_millis(clamp_duration_ms(millis));
        self
    }

    /// Requested duration in whole milliseconds
    pub fn duration_ms(&self) -> u64 {
        u64::try_from(self.duration.as_millis()).unwrap_or(MAX_DURATION_MS)
    }
}

/// Clamp a requested duration into `[MIN_DURATION_MS, MAX_DURATION_MS]`
pub fn clamp_duration_ms(millis: i64) -> u64 {
    if millis < 1 {
        MIN_DURATION_MS
    } else {
        u64::try_from(millis)
            .unwrap_or(MAX_DURATION_MS)
            .min(MAX_DURATION_MS)
    }
}
