//! Terminal setup and teardown for the game screen.
//!
//! The game switches the terminal to raw mode, the alternate screen and
//! mouse capture. Every exit path puts it back: setup unwinds its own
//! partial progress, [`restore`] tries every step even when one fails, and
//! [`install_panic_hook`] restores before the panic message is printed.

use anyhow::{Context, Result};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{cursor, execute};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;

pub type Term = Terminal<CrosstermBackend<Stdout>>;

/// Enter raw mode, the alternate screen and mouse capture.
pub fn setup() -> Result<Term> {
    enable_raw_mode().context("could not enable raw mode")?;
    enter().map_err(|e| {
        let _ = reset();
        e
    })
}

fn enter() -> Result<Term> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("could not switch to the alternate screen")?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    terminal.hide_cursor()?;
    Ok(terminal)
}

/// Undo every setup step on stdout, attempting all of them. Returns the
/// first failure.
fn reset() -> io::Result<()> {
    let mut stdout = io::stdout();
    let steps = [
        disable_raw_mode(),
        execute!(stdout, DisableMouseCapture),
        execute!(stdout, LeaveAlternateScreen),
        execute!(stdout, cursor::Show),
    ];
    steps.into_iter().collect()
}

/// Put the terminal back the way it was found.
pub fn restore(terminal: &mut Term) -> Result<()> {
    let shown = terminal.show_cursor();
    reset().context("could not restore the terminal")?;
    shown.context("could not show the cursor")
}

/// Restore the terminal before the default panic message is printed, so
/// the message lands on a usable screen.
pub fn install_panic_hook() {
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = reset();
        default_hook(info);
    }));
}

/// Outcome of a run followed by a restore. The run's error wins; a restore
/// error is only reported when the run itself succeeded.
pub fn finish(run: Result<()>, restore: Result<()>) -> Result<()> {
    match (run, restore) {
        (Err(e), Err(restore_err)) => {
            tracing::warn!("terminal restore also failed: {restore_err:#}");
            Err(e)
        }
        (run, restore) => run.and(restore),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn test_finish_ok_when_both_ok() {
        assert!(finish(Ok(()), Ok(())).is_ok());
    }

    #[test]
    fn test_finish_keeps_run_error_over_restore_error() {
        let err = finish(Err(anyhow!("tick failed")), Err(anyhow!("restore failed"))).unwrap_err();
        assert_eq!(err.to_string(), "tick failed");
    }

    #[test]
    fn test_finish_reports_restore_error_after_clean_run() {
        let err = finish(Ok(()), Err(anyhow!("restore failed"))).unwrap_err();
        assert_eq!(err.to_string(), "restore failed");
    }

    #[test]
    fn test_finish_reports_run_error_after_clean_restore() {
        let err = finish(Err(anyhow!("draw failed")), Ok(())).unwrap_err();
        assert_eq!(err.to_string(), "draw failed");
    }
}
