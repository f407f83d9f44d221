//! Widgets
//!
//! ratatui views over engine-side state.

mod canvas;

pub use canvas::CanvasView;
