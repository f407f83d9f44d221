//! SL Entry Point
//!
//! Runs a train across the terminal.
//!
//! Usage:
//!   sl [-a] [-F] [-l|-c|-d|-G] [-t MS | --time MS]
//!
//! Logging goes to stderr and is configured with `RUST_LOG`.

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sl_core::{AnimationConfig, AnimationError, RunOutcome};
use sl_tui::terminal::{self, TerminalScreen};
use sl_tui::Invocation;

fn main() -> ExitCode {
    // Set up logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = match sl_tui::parse(std::env::args_os()) {
        Ok(Invocation::Run(config)) => config,
        Ok(Invocation::Help(text)) => {
            print!("{text}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("sl: {err}");
            return ExitCode::from(err.exit_code());
        }
    };

    match run(&config) {
        Ok(outcome) => {
            info!(?outcome, "done");
            ExitCode::SUCCESS
        }
        Err(err) => {
            let code = err
                .downcast_ref::<AnimationError>()
                .map_or(1, AnimationError::exit_code);
            eprintln!("sl: {err:#}");
            ExitCode::from(code)
        }
    }
}

fn run(config: &AnimationConfig) -> anyhow::Result<RunOutcome> {
    if !io::stdout().is_terminal() {
        anyhow::bail!("sl requires a terminal (TTY) on stdout");
    }

    terminal::ignore_interrupts();
    terminal::install_panic_hook();

    let mut screen = TerminalScreen::enter()?;
    let color = screen.supports_color();
    let result = sl_core::run(config, &mut screen, color);

    // Restore before anything is reported
    let restored = screen.leave();
    terminal::settle(result, restored)
}
