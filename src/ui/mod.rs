//! Terminal output and interactive prompts.

mod console_ui;
mod mock;

pub use console_ui::ConsoleUi;
pub use mock::MockUi;

use crate::error::Result;

/// Abstraction over terminal interaction so step logic can be tested
/// without a live terminal.
pub trait UserInterface {
    /// Print an informational message.
    fn message(&mut self, msg: &str);

    /// Print a success message.
    fn success(&mut self, msg: &str);

    /// Print a warning.
    fn warn(&mut self, msg: &str);

    /// Print an error message.
    fn error(&mut self, msg: &str);

    /// Ask a yes/no question; `default` is used when the user just presses
    /// enter.
    fn confirm(&mut self, question: &str, default: bool) -> Result<bool>;
}
