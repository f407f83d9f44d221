//! Canvas Widget
//!
//! Copies the persistent [`Canvas`] grid into a ratatui buffer. The canvas
//! outlives the frame; ratatui's diff against the previous buffer means only
//! the cells the train touched are sent to the terminal.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;

use sl_core::Canvas;

use crate::theme;

/// Read-only view of a canvas, clipped to the render area
pub struct CanvasView<'a> {
    canvas: &'a Canvas,
    color: bool,
}

impl<'a> CanvasView<'a> {
    /// View `canvas` without color
    pub fn new(canvas: &'a Canvas) -> Self {
        Self {
            canvas,
            color: false,
        }
    }

    /// Render livery tints in color
    #[must_use]
    pub fn color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }
}

impl Widget for CanvasView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (cells, y) in self.canvas.lines().zip(area.top()..area.bottom()) {
            for (cell, x) in cells.iter().zip(area.left()..area.right()) {
                if let Some(target) = buf.cell_mut((x, y)) {
                    target
                        .set_char(cell.ch)
                        .set_style(theme::style_for(cell.tint, self.color));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use ratatui::style::Color;
    use sl_core::{Surface, Tint};

    #[test]
    fn test_renders_canvas_text() {
        let mut canvas = Canvas::new(3, 8);
        canvas.put_str(1, 2, "(@@)");

        let area = Rect::new(0, 0, 8, 3);
        let mut buf = Buffer::empty(area);
        CanvasView::new(&canvas).render(area, &mut buf);

        assert_eq!(buf, Buffer::with_lines(["        ", "  (@@)  ", "        "]));
    }

    #[test]
    fn test_clips_to_smaller_area() {
        let mut canvas = Canvas::new(4, 10);
        canvas.put_str(0, 0, "==========");
        canvas.put_str(3, 0, "##########");

        let area = Rect::new(0, 0, 4, 2);
        let mut buf = Buffer::empty(area);
        CanvasView::new(&canvas).render(area, &mut buf);

        assert_eq!(buf, Buffer::with_lines(["====", "    "]));
    }

    #[test]
    fn test_livery_cells_colored_when_enabled() {
        let mut canvas = Canvas::new(1, 4);
        canvas.set_tint(Tint::Livery);
        canvas.put_str(0, 0, "TG");
        canvas.set_tint(Tint::Default);
        canvas.put_str(0, 2, "V");

        let area = Rect::new(0, 0, 4, 1);
        let mut colored = Buffer::empty(area);
        CanvasView::new(&canvas).color(true).render(area, &mut colored);
        let mut plain = Buffer::empty(area);
        CanvasView::new(&canvas).render(area, &mut plain);

        assert_eq!(colored[(0, 0)].fg, Color::Yellow);
        assert_eq!(colored[(1, 0)].bg, Color::Black);
        assert_eq!(colored[(2, 0)].fg, Color::Reset);
        assert_eq!(plain[(0, 0)].fg, Color::Reset);
    }
}
