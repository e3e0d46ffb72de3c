//! Console-backed user interface.

use console::{style, Term};
use dialoguer::Confirm;

use super::UserInterface;
use crate::error::{InstallError, Result};

/// Convert dialoguer errors to InstallError.
fn map_dialoguer_err(e: dialoguer::Error) -> InstallError {
    InstallError::Io(e.into())
}

/// Interactive UI writing to the terminal.
pub struct ConsoleUi {
    term: Term,
}

impl ConsoleUi {
    /// Create a UI attached to stdout.
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
        }
    }
}

impl Default for ConsoleUi {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInterface for ConsoleUi {
    fn message(&mut self, msg: &str) {
        println!("{}", msg);
    }

    fn success(&mut self, msg: &str) {
        println!("{} {}", style("✓").green(), msg);
    }

    fn warn(&mut self, msg: &str) {
        println!("{} {}", style("!").yellow(), msg);
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{} {}", style("✗").red(), msg);
    }

    fn confirm(&mut self, question: &str, default: bool) -> Result<bool> {
        Confirm::new()
            .with_prompt(question)
            .default(default)
            .interact_on(&self.term)
            .map_err(map_dialoguer_err)
    }
}
