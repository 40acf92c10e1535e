//! Ctrl-C handling for a console session.
//!
//! A player pressing Ctrl-C gets a short message and the process exits with
//! status 0. The message depends on whether the game had started or the
//! players were still typing their names. The handler runs on its own thread
//! while the main thread is blocked reading stdin, so it exits the process
//! itself instead of signalling the game loop.

use std::io::{self, Write};
use std::process;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::{Context, Result};
use tracing::info;

use crate::constants::RESET;
use crate::printer::ColorPrinter;

/// Printed when Ctrl-C arrives during a turn.
pub const INTERRUPTED_IN_GAME: &str = "\nGame interrupted by user.";

/// Printed when Ctrl-C arrives before the first turn.
pub const INTERRUPTED: &str = "\nGame interrupted.";

/// Installed Ctrl-C handler and the phase it reports on.
pub struct Interrupt {
    in_game: Arc<AtomicBool>,
}

impl Interrupt {
    /// Install the process-wide handler. `color` tells it whether an open
    /// colour sequence must be closed before the message.
    pub fn install(color: bool) -> Result<Self> {
        let in_game = Arc::new(AtomicBool::new(false));
        let flag = in_game.clone();
        ctrlc::set_handler(move || {
            let message = interrupt_message(flag.load(Ordering::SeqCst));
            info!("interrupted");
            let _ = write_interrupt(io::stdout().lock(), message, color);
            process::exit(0);
        })
        .context("failed to install Ctrl-C handler")?;
        Ok(Self { in_game })
    }

    /// Mark that turns have started.
    pub fn enter_game(&self) {
        self.in_game.store(true, Ordering::SeqCst);
    }
}

/// Message for an interrupt in the given phase.
pub fn interrupt_message(in_game: bool) -> &'static str {
    if in_game { INTERRUPTED_IN_GAME } else { INTERRUPTED }
}

/// Reset the terminal colour if needed, then print `message` uncoloured.
pub fn write_interrupt<W: Write>(mut out: W, message: &str, color: bool) -> io::Result<()> {
    if color {
        write!(out, "{RESET}")?;
    }
    ColorPrinter::plain(out).print_colored(message)
}
