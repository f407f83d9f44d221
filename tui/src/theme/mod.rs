//! Theme and Colors
//!
//! The train is drawn in the terminal's own colors. Only the TGV carries a
//! livery, and only on terminals with at least eight colors.

use ratatui::style::{Color, Style};

use sl_core::Tint;

/// Colors a terminal needs before the livery is used
pub const MIN_COLORS: u16 = 8;

/// TGV body color
pub const LIVERY_FG: Color = Color::Yellow;

/// Background behind the livery
pub const LIVERY_BG: Color = Color::Black;

/// Style for a cell written with `tint`
///
/// With color disabled every tint renders in the default style.
pub fn style_for(tint: Tint, color: bool) -> Style {
    match tint {
        Tint::Livery if color => Style::default().fg(LIVERY_FG).bg(LIVERY_BG),
        _ => Style::default(),
    }
}

/// Whether a terminal reporting `colors` colors can show the livery
pub fn supports_livery(colors: u16) -> bool {
    colors >= MIN_COLORS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_livery_only_with_color() {
        assert_eq!(style_for(Tint::Livery, true).fg, Some(Color::Yellow));
        assert_eq!(style_for(Tint::Livery, false), Style::default());
        assert_eq!(style_for(Tint::Default, true), Style::default());
    }

    #[test]
    fn test_color_threshold() {
        assert!(!supports_livery(0));
        assert!(!supports_livery(2));
        assert!(supports_livery(8));
        assert!(supports_livery(256));
    }
}
