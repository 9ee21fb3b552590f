//! # Console Seam
//!
//! The only way core code talks to the user. The terminal adapter in
//! `crate::cli` implements it over stdin/stdout; tests implement it with a
//! scripted list of answers.

pub trait Console {
    /// Shows `message` and blocks for one line of input.
    /// Returns `None` once the input is closed.
    fn prompt(&mut self, message: &str) -> Option<String>;

    /// Prints a line of output.
    fn say(&mut self, message: &str);
}
