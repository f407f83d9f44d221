//! SL - Terminal surface for the steam locomotive
//!
//! This crate puts the headless `sl-core` engine on a real terminal and owns
//! the `sl` binary.
//!
//! # Architecture
//!
//! - **CLI**: clap flags turned into an `AnimationConfig` before the terminal is touched
//! - **Terminal**: raw-mode ratatui/crossterm screen implementing the engine's `Screen`
//! - **Widgets**: the canvas view that copies engine cells into ratatui buffers
//! - **Theme**: the livery colors

pub mod cli;
pub mod terminal;
pub mod theme;
pub mod widgets;

pub use cli::{parse, ArgsError, Invocation};
pub use terminal::TerminalScreen;
