//! # Terminal Adapter
//!
//! Line-oriented stdin/stdout implementation of [`Console`], plus the
//! session driver: load the phone book, run the navigator, save on exit.
//!
//! This is the only module that touches the process's standard streams.

use std::io::{self, BufRead, Write};
use std::path::Path;

use log::{info, warn};

use crate::core::clock::SystemClock;
use crate::core::config::ResolvedConfig;
use crate::core::console::Console;
use crate::core::navigator::Navigator;
use crate::core::persist::{self, PersistError};

/// Console over any line reader and writer.
pub struct LineConsole<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LineConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Console for LineConsole<R, W> {
    fn prompt(&mut self, message: &str) -> Option<String> {
        self.say(message);
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
            Err(e) => {
                warn!("Failed to read input: {}", e);
                None
            }
        }
    }

    fn say(&mut self, message: &str) {
        if let Err(e) = writeln!(self.output, "{message}").and_then(|_| self.output.flush()) {
            warn!("Failed to write output: {}", e);
        }
    }
}

/// Runs one interactive session against the process's stdin/stdout.
///
/// Only a failure to load the phone book is returned as an error; a failed
/// save at exit is reported and logged.
pub fn run(config: &ResolvedConfig) -> Result<(), PersistError> {
    let stdin = io::stdin();
    let console = LineConsole::new(stdin.lock(), io::stdout());
    run_session(config.phone_book.as_deref(), console)
}

pub fn run_session<C: Console>(phone_book: Option<&Path>, console: C) -> Result<(), PersistError> {
    let book = persist::load(phone_book)?;
    info!("Session started with {} records", book.store.count());
    let target = if book.persist { phone_book } else { None };

    let navigator = Navigator::new(book.store, console, Box::new(SystemClock));
    let store = navigator.run();

    match persist::save(target, &store) {
        Ok(true) => info!("Saved {} records", store.count()),
        Ok(false) => info!("Session ended without saving"),
        Err(e) => {
            warn!("Failed to save phone book: {}", e);
            eprintln!("Failed to save phone book: {e}");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;

    #[test]
    fn test_line_console_strips_newlines_and_reports_eof() {
        let mut output = Vec::new();
        {
            let mut console = LineConsole::new(Cursor::new("add\r\nlist\n"), &mut output);
            assert_eq!(console.prompt("first?").as_deref(), Some("add"));
            assert_eq!(console.prompt("second?").as_deref(), Some("list"));
            assert_eq!(console.prompt("third?"), None);
        }
        let shown = String::from_utf8(output).unwrap();
        assert_eq!(shown, "first?\nsecond?\nthird?\n");
    }

    #[test]
    fn test_session_saves_to_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("phonebook.db");
        let script = "add\norganization\nAcme\nElm St\n12 34\nexit\n";
        let console = LineConsole::new(Cursor::new(script), Vec::new());
        run_session(Some(path.as_path()), console).unwrap();

        let saved = fs::read_to_string(&path).unwrap();
        assert!(saved.contains("\"type\": \"Organization\""));
        assert!(saved.contains("\"name\": \"Acme\""));

        // A second session sees the record.
        let script = "count\nexit\n";
        let mut output = Vec::new();
        run_session(Some(path.as_path()), LineConsole::new(Cursor::new(script), &mut output)).unwrap();
        let shown = String::from_utf8(output).unwrap();
        assert!(shown.contains("The Phone Book has 1 records."));
    }

    #[test]
    fn test_session_on_unreadable_path_runs_without_saving() {
        let dir = tempfile::tempdir().unwrap();
        let script = "add\norganization\nAcme\nElm St\n12 34\nexit\n";
        let console = LineConsole::new(Cursor::new(script), Vec::new());
        run_session(Some(dir.path()), console).unwrap();
        assert!(dir.path().is_dir());
        assert!(!dir.path().with_extension("tmp").exists());
    }

    #[test]
    fn test_session_fails_on_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("phonebook.db");
        fs::write(&path, "not json").unwrap();
        let console = LineConsole::new(Cursor::new("exit\n"), Vec::new());
        assert!(run_session(Some(path.as_path()), console).is_err());
    }
}
