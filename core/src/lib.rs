//! SL Core - Headless Train Animation Engine
//!
//! This crate holds everything that decides *what* appears on screen and
//! *when*, completely independent of any terminal library. The `sl` binary
//! plugs a ratatui/crossterm surface into it; tests plug in the in-memory
//! [`Canvas`].
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                    Animation Loop                         │
//! │   x = frames-1 ... 0                                      │
//! │  ┌──────────────┐  ┌──────────────┐  ┌────────────────┐  │
//! │  │  Compositor  │─▶│ Smoke System │  │  Frame Pacer   │  │
//! │  │ (train parts)│  │ (particles)  │  │ (drift-correct)│  │
//! │  └──────┬───────┘  └──────┬───────┘  └────────────────┘  │
//! │         └────────┬────────┘                               │
//! │                  ▼                                        │
//! │          Surface (positioned writes)                      │
//! └──────────────────┼────────────────────────────────────────┘
//!                    ▼
//!        TUI surface / in-memory Canvas
//! ```
//!
//! # No TUI Dependencies
//!
//! This crate has **zero** dependencies on ratatui, crossterm, or any other
//! terminal framework.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod animation;
pub mod compositor;
pub mod config;
pub mod error;
pub mod pacer;
pub mod smoke;
pub mod sprites;
pub mod surface;
pub mod train;

pub use animation::{run, AnimationLoop, RunOutcome};
pub use compositor::{Compositor, FrameOutcome};
pub use config::{AnimationConfig, TrainVariant};
pub use error::AnimationError;
pub use pacer::{FramePacer, Pace};
pub use smoke::{Puff, PuffKind, SmokeSystem};
pub use surface::{Canvas, Cell, Screen, Surface, Tint};
pub use train::{frame_for, FrameIndex, TrainSpec};
