//! Drawing Surfaces
//!
//! The engine never talks to a terminal directly. It issues positioned
//! character writes against a [`Surface`] and, from the animation loop, asks a
//! [`Screen`] to poll input and present the frame.
//!
//! [`Canvas`] is the in-memory grid both the real terminal surface and the
//! tests draw into. Cells keep their contents between frames, so anything the
//! engine does not overwrite stays on screen; sprites carry trailing blanks
//! and smoke is erased explicitly.

use std::io;

/// Color hint for a written cell
///
/// Surfaces without color support render every tint the same way.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Tint {
    /// Terminal default colors
    #[default]
    Default,
    /// Accent livery used for the TGV body
    Livery,
}

/// A single character cell
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    /// Character shown in the cell
    pub ch: char,
    /// Color hint it was written with
    pub tint: Tint,
}

impl Cell {
    /// A blank cell in default colors
    pub const fn blank() -> Self {
        Self {
            ch: ' ',
            tint: Tint::Default,
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::blank()
    }
}

/// Grid of character cells addressed by (row, column)
pub trait Surface {
    /// Number of rows
    fn rows(&self) -> i32;

    /// Number of columns
    fn cols(&self) -> i32;

    /// Write one character; returns `false` when the position is off-grid
    fn put_char(&mut self, row: i32, col: i32, ch: char) -> bool;

    /// Select the tint used by subsequent writes
    fn set_tint(&mut self, tint: Tint);

    /// Write a string starting at (row, col), clipping at the edges
    ///
    /// Characters that would land left of column 0 are skipped; if the string
    /// runs out before reaching column 0 nothing is written and `false` is
    /// returned. Writing stops at the first character the grid rejects.
    fn put_str(&mut self, row: i32, col: i32, text: &str) -> bool {
        let mut chars = text.chars();
        let mut col = col;

        while col < 0 {
            if chars.next().is_none() {
                return false;
            }
            col += 1;
        }

        for ch in chars {
            if !self.put_char(row, col, ch) {
                return false;
            }
            col += 1;
        }
        true
    }
}

/// A surface that can also take input and show frames
pub trait Screen: Surface {
    /// Non-blocking check for a quit request
    ///
    /// # Errors
    ///
    /// Returns the underlying terminal error.
    fn poll_quit(&mut self) -> io::Result<bool>;

    /// Flush the drawn frame to the user
    ///
    /// # Errors
    ///
    /// Returns the underlying terminal error.
    fn present(&mut self) -> io::Result<()>;
}

/// In-memory display buffer
#[derive(Clone, Debug)]
pub struct Canvas {
    rows: u16,
    cols: u16,
    cells: Vec<Cell>,
    tint: Tint,
}

impl Canvas {
    /// Create a blank canvas
    pub fn new(rows: u16, cols: u16) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::blank(); usize::from(rows) * usize::from(cols)],
            tint: Tint::Default,
        }
    }

    /// Cell at a position, if it is on the grid
    pub fn cell(&self, row: u16, col: u16) -> Option<&Cell> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.cells
            .get(usize::from(row) * usize::from(self.cols) + usize::from(col))
    }

    /// One row as a string
    pub fn row_text(&self, row: u16) -> String {
        (0..self.cols)
            .filter_map(|col| self.cell(row, col))
            .map(|cell| cell.ch)
            .collect()
    }

    /// Every row joined with newlines
    pub fn text(&self) -> String {
        (0..self.rows)
            .map(|row| self.row_text(row))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// True when every cell is blank
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|cell| cell.ch == ' ')
    }

    /// Count cells holding a given character
    pub fn count(&self, ch: char) -> usize {
        self.cells.iter().filter(|cell| cell.ch == ch).count()
    }

    /// Iterate rows of cells
    pub fn lines(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(usize::from(self.cols.max(1)))
    }

    fn index_of(&self, row: i32, col: i32) -> Option<usize> {
        let row = u16::try_from(row).ok()?;
        let col = u16::try_from(col).ok()?;
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(usize::from(row) * usize::from(self.cols) + usize::from(col))
    }
}

impl Surface for Canvas {
    fn rows(&self) -> i32 {
        i32::from(self.rows)
    }

    fn cols(&self) -> i32 {
        i32::from(self.cols)
    }

    fn put_char(&mut self, row: i32, col: i32, ch: char) -> bool {
        match self.index_of(row, col) {
            Some(idx) => {
                self.cells[idx] = Cell {
                    ch,
                    tint: self.tint,
                };
                true
            }
            None => false,
        }
    }

    fn set_tint(&mut self, tint: Tint) {
        self.tint = tint;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_put_str_plain() {
        let mut canvas = Canvas::new(2, 8);
        assert!(canvas.put_str(0, 1, "abc"));
        assert_eq!(canvas.row_text(0), " abc    ");
    }

    #[test]
    fn test_put_str_negative_column_skips_prefix() {
        let mut canvas = Canvas::new(1, 6);
        assert!(canvas.put_str(0, -2, "abcdef"));
        assert_eq!(canvas.row_text(0), "cdef  ");
    }

    #[test]
    fn test_put_str_entirely_left_of_screen() {
        let mut canvas = Canvas::new(1, 6);
        assert!(!canvas.put_str(0, -4, "abc"));
        assert!(canvas.is_blank());
    }

    #[test]
    fn test_put_str_clips_right_edge() {
        let mut canvas = Canvas::new(1, 4);
        assert!(!canvas.put_str(0, 2, "xyz"));
        assert_eq!(canvas.row_text(0), "  xy");
    }

    #[test]
    fn test_put_str_rows_out_of_range() {
        let mut canvas = Canvas::new(2, 4);
        assert!(!canvas.put_str(-1, 0, "ab"));
        assert!(!canvas.put_str(2, 0, "ab"));
        assert!(canvas.is_blank());
    }

    #[test]
    fn test_tint_applies_to_following_writes() {
        let mut canvas = Canvas::new(1, 4);
        canvas.set_tint(Tint::Livery);
        canvas.put_char(0, 0, '#');
        canvas.set_tint(Tint::Default);
        canvas.put_char(0, 1, '#');

        assert_eq!(canvas.cell(0, 0).map(|c| c.tint), Some(Tint::Livery));
        assert_eq!(canvas.cell(0, 1).map(|c| c.tint), Some(Tint::Default));
    }

    #[test]
    fn test_count_and_blank() {
        let mut canvas = Canvas::new(2, 2);
        assert!(canvas.is_blank());
        canvas.put_str(1, 0, "ok");
        assert_eq!(canvas.count('o'), 1);
        assert!(!canvas.is_blank());
    }
}
