//! Raw-mode terminal setup and teardown.
//!
//! Leaving the terminal in raw mode makes the user's shell unusable, so
//! teardown never stops at the first failing step and also runs from the
//! panic hook.

use ratatui::crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::io::{self, Write};

/// Switches to raw mode on the alternate screen, capturing the mouse if asked
///
/// If a step fails, whatever was already set up is undone before the error
/// is returned.
///
/// # Errors
///
/// Returns the error of the first step that failed.
pub fn enter<W: Write>(out: &mut W, mouse: bool) -> io::Result<()> {
    enable_raw_mode()?;

    let entered = if mouse {
        execute!(out, EnterAlternateScreen, EnableMouseCapture)
    } else {
        execute!(out, EnterAlternateScreen)
    };
    if let Err(err) = entered {
        let _ = restore(out, mouse);
        return Err(err);
    }

    tracing::debug!(mouse, "Terminal ready");
    Ok(())
}

/// Undoes [`enter`]
///
/// Every step is attempted even when an earlier one fails.
///
/// # Errors
///
/// Returns the first error encountered.
pub fn restore<W: Write>(out: &mut W, mouse: bool) -> io::Result<()> {
    let mut steps = vec![disable_raw_mode(), execute!(out, LeaveAlternateScreen)];
    if mouse {
        steps.push(execute!(out, DisableMouseCapture));
    }
    steps.push(execute!(out, Show));

    for err in steps.iter().filter_map(|step| step.as_ref().err()) {
        tracing::warn!(error = %err, "Terminal restore step failed");
    }
    steps.into_iter().collect()
}

/// Chains a panic hook that restores the terminal before the panic message
/// is printed
pub fn install_panic_hook(mouse: bool) {
    let previous_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore(&mut io::stdout(), mouse);
        previous_hook(panic_info);
    }));
}
