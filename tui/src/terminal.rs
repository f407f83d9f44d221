//! Terminal Screen
//!
//! The real [`Screen`]: raw mode, alternate screen, hidden cursor. Frames are
//! composed into a [`Canvas`] sized to the terminal at startup and pushed out
//! through ratatui on every present.

use std::io::{self, Stdout};
use std::panic;
use std::time::Duration;

use crossterm::cursor::{Hide, Show};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::{debug, error};

use sl_core::{AnimationError, Canvas, RunOutcome, Screen, Surface, Tint};

use crate::theme;
use crate::widgets::CanvasView;

/// Full-screen terminal the train runs across
pub struct TerminalScreen {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    canvas: Canvas,
    color: bool,
    active: bool,
}

impl TerminalScreen {
    /// Take over the terminal
    ///
    /// # Errors
    ///
    /// Fails if the terminal cannot be switched to raw mode or queried for
    /// its size. Whatever was already changed is undone first.
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        match Self::setup() {
            Ok(screen) => Ok(screen),
            Err(err) => {
                let _ = restore();
                Err(err)
            }
        }
    }

    fn setup() -> io::Result<Self> {
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, Hide)?;
        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.clear()?;

        let size = terminal.size()?;
        let colors = crossterm::style::available_color_count();
        debug!(
            width = size.width,
            height = size.height,
            colors,
            "terminal ready"
        );

        Ok(Self {
            terminal,
            canvas: Canvas::new(size.height, size.width),
            color: theme::supports_livery(colors),
            active: true,
        })
    }

    /// Whether the terminal can show the livery color
    pub fn supports_color(&self) -> bool {
        self.color
    }

    /// Hand the terminal back
    ///
    /// # Errors
    ///
    /// Propagates failures to leave raw mode or the alternate screen.
    pub fn leave(mut self) -> io::Result<()> {
        self.active = false;
        restore()
    }
}

impl Drop for TerminalScreen {
    fn drop(&mut self) {
        if self.active {
            let _ = restore();
        }
    }
}

impl Surface for TerminalScreen {
    fn rows(&self) -> i32 {
        self.canvas.rows()
    }

    fn cols(&self) -> i32 {
        self.canvas.cols()
    }

    fn put_char(&mut self, row: i32, col: i32, ch: char) -> bool {
        self.canvas.put_char(row, col, ch)
    }

    fn set_tint(&mut self, tint: Tint) {
        self.canvas.set_tint(tint);
    }
}

impl Screen for TerminalScreen {
    fn poll_quit(&mut self) -> io::Result<bool> {
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if is_quit_key(&key) {
                    debug!(?key.code, "quit key pressed");
                    return Ok(true);
                }
            }
        }
        Ok(false)
    }

    fn present(&mut self) -> io::Result<()> {
        let view = CanvasView::new(&self.canvas).color(self.color);
        self.terminal
            .draw(|frame| frame.render_widget(view, frame.area()))?;
        Ok(())
    }
}

/// q, Esc, or Ctrl-C (raw mode delivers it as a key)
pub fn is_quit_key(key: &KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Leave raw mode and the alternate screen, and show the cursor again
///
/// # Errors
///
/// Propagates terminal I/O failures.
pub fn restore() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, Show)
}

/// Combine a run result with the outcome of restoring the terminal
///
/// The run's own error wins, so an overrun keeps its exit code even when the
/// restore also failed. A failed restore after a good run is reported.
///
/// # Errors
///
/// Returns the run error, else the restore error.
pub fn settle(
    result: Result<RunOutcome, AnimationError>,
    restored: io::Result<()>,
) -> anyhow::Result<RunOutcome> {
    if let Err(err) = &restored {
        error!(%err, "failed to restore the terminal");
    }
    let outcome = result?;
    restored?;
    Ok(outcome)
}

/// Restore the terminal before the default panic message is printed
pub fn install_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore();
        original_hook(panic_info);
    }));
}

/// Ignore SIGINT for the rest of the process
#[cfg(unix)]
pub fn ignore_interrupts() {
    // SAFETY: SIG_IGN installs no handler code.
    unsafe {
        libc::signal(libc::SIGINT, libc::SIG_IGN);
    }
}

/// Ignore SIGINT for the rest of the process
#[cfg(not(unix))]
pub fn ignore_interrupts() {}
