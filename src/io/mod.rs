//! Output abstraction
//!
//! Presenters write through [`OutputWriter`] so reports can be captured in
//! tests instead of going to the terminal.

/// Trait for writing output to the user
pub trait OutputWriter {
    /// Write a message with a newline
    fn writeln(&mut self, message: &str);
}

/// Terminal output implementation using stdout
pub struct TerminalIO;

impl OutputWriter for TerminalIO {
    fn writeln(&mut self, message: &str) {
        println!("{}", message);
    }
}

/// Captures written lines in memory. Test support for this crate's unit
/// and integration tests; not part of the documented API.
#[doc(hidden)]
#[derive(Debug, Default)]
pub struct MockOutput {
    pub messages: Vec<String>,
}

impl MockOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// All captured lines joined with newlines.
    pub fn text(&self) -> String {
        self.messages.join("\n")
    }
}

impl OutputWriter for MockOutput {
    fn writeln(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}
