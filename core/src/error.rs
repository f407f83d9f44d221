//! Error Types
//!
//! Errors are coarse-grained: each one ends the process with its own exit
//! code and there is no retry.

use std::time::Duration;

use thiserror::Error;

/// Errors raised while setting up or running the animation
#[derive(Debug, Error)]
pub enum AnimationError {
    /// The pacer fell so far off schedule that the run was abandoned
    #[error("frame pacing overrun at frame {frame}: schedule off by {drift:?}")]
    Overrun {
        /// Number of frames rendered when the overrun was detected
        frame: u64,
        /// How far the schedule drifted past the threshold
        drift: Duration,
    },

    /// A variant id that does not name any train
    #[error("unknown train variant id {0}")]
    UnknownVariant(u8),

    /// The terminal surface failed
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

impl AnimationError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Overrun { .. } => 4,
            Self::UnknownVariant(_) => 201,
            Self::Io(_) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let overrun = AnimationError::Overrun {
            frame: 12,
            drift: Duration::from_millis(1500),
        };
        assert_eq!(overrun.exit_code(), 4);
        assert_eq!(AnimationError::UnknownVariant(0).exit_code(), 201);

        let io = AnimationError::from(std::io::Error::other("gone"));
        assert_eq!(io.exit_code(), 1);
    }

    #[test]
    fn test_overrun_message() {
        let err = AnimationError::Overrun {
            frame: 3,
            drift: Duration::from_secs(2),
        };
        assert!(err.to_string().contains("frame 3"));
    }
}
