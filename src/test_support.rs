//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::cell::Cell;
use std::collections::VecDeque;

use crate::core::clock::Clock;
use crate::core::console::Console;

/// Answers prompts from a fixed script and records everything shown.
/// Returns `None` once the script runs out, like a closed stdin.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    answers: VecDeque<String>,
    pub prompts: Vec<String>,
    pub output: Vec<String>,
}

impl ScriptedConsole {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }
}

impl Console for ScriptedConsole {
    fn prompt(&mut self, message: &str) -> Option<String> {
        self.prompts.push(message.to_string());
        self.answers.pop_front()
    }

    fn say(&mut self, message: &str) {
        self.output.push(message.to_string());
    }
}

/// Deterministic clock: every call is one second later than the last.
#[derive(Debug, Default)]
pub struct StepClock {
    ticks: Cell<u32>,
}

impl StepClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clock for StepClock {
    fn now(&self) -> String {
        let tick = self.ticks.get();
        self.ticks.set(tick + 1);
        format!("2024-01-01T{:02}:{:02}:{:02}.000", tick / 3600, tick / 60 % 60, tick % 60)
    }
}
