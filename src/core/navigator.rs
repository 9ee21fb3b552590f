//! # Navigator
//!
//! The menu state machine. It owns the store for the whole session and is
//! the only thing that mutates it.
//!
//! ```text
//!            add / count
//!            ┌──────┐
//!            ▼      │
//!   ┌──────────────────┐  list   ┌──────────┐
//!   │       Menu       │────────►│ Listing  │
//!   │                  │◄────────│          │
//!   └──────────────────┘  back   └────┬─────┘
//!     │   ▲       ▲    ▲              │ n
//!     │   │ back  │    │ menu/delete  ▼
//!     │   │       │    └─────────┌────────────┐
//!     │ ┌─┴───────┴─┐      n     │ RecordView │◄─┐ edit
//!     └►│ Searching │───────────►│  (index)   │──┘
//!search └───────────┘            └────────────┘
//!            ▲ again
//! ```
//!
//! `exit` (or closed input) from any prompt ends the session in `Exited`;
//! [`Navigator::run`] then hands the store back so it can be saved.

use log::{debug, warn};

use crate::core::action::{ListCommand, MenuCommand, RecordCommand, SearchCommand};
use crate::core::clock::Clock;
use crate::core::console::Console;
use crate::core::record::{Contact, ContactKind};
use crate::core::store::{ContactStore, SearchHit};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Level {
    Menu,
    Listing,
    /// Results of the last query, in display order.
    Searching { hits: Vec<SearchHit> },
    /// Bound to the record at `index` in the store.
    RecordView { index: usize },
    Exited,
}

impl Level {
    pub fn name(&self) -> &'static str {
        match self {
            Level::Menu => "menu",
            Level::Listing => "list",
            Level::Searching { .. } => "search",
            Level::RecordView { .. } => "record",
            Level::Exited => "exited",
        }
    }
}

pub struct Navigator<C: Console> {
    store: ContactStore,
    console: C,
    clock: Box<dyn Clock>,
    level: Level,
}

impl<C: Console> Navigator<C> {
    pub fn new(store: ContactStore, console: C, clock: Box<dyn Clock>) -> Self {
        Self {
            store,
            console,
            clock,
            level: Level::Menu,
        }
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn store(&self) -> &ContactStore {
        &self.store
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    /// Runs until the user exits and returns the store for saving.
    pub fn run(mut self) -> ContactStore {
        while self.step() {}
        self.store
    }

    pub fn into_parts(self) -> (ContactStore, C) {
        (self.store, self.console)
    }

    /// Handles one line of input at the current level.
    /// Returns `false` once the session has exited.
    pub fn step(&mut self) -> bool {
        let current = std::mem::replace(&mut self.level, Level::Exited);
        let from = current.name();
        let next = match current {
            Level::Menu => self.on_menu(),
            Level::Listing => self.on_listing(),
            Level::Searching { hits } => self.on_searching(hits),
            Level::RecordView { index } => self.on_record(index),
            Level::Exited => Level::Exited,
        };
        if next.name() != from {
            debug!("Level {} -> {}", from, next.name());
        }
        self.level = next;
        self.level != Level::Exited
    }

    fn on_menu(&mut self) -> Level {
        let Some(input) = self.console.prompt(MenuCommand::PROMPT) else {
            return Level::Exited;
        };
        match MenuCommand::parse(&input) {
            Some(MenuCommand::Add) => {
                self.add_record();
                Level::Menu
            }
            Some(MenuCommand::List) => {
                self.print_list();
                Level::Listing
            }
            Some(MenuCommand::Search) => self.run_search(),
            Some(MenuCommand::Count) => {
                let message = format!("The Phone Book has {} records.\n", self.store.count());
                self.console.say(&message);
                Level::Menu
            }
            Some(MenuCommand::Exit) => Level::Exited,
            None => Level::Menu,
        }
    }

    fn add_record(&mut self) {
        let Some(answer) = self.console.prompt("Enter the type (person, organization):") else {
            return;
        };
        match ContactKind::parse(&answer) {
            Some(kind) => {
                let record = Contact::create(kind, &mut self.console, self.clock.as_ref());
                debug!("Added {:?} at index {}", kind, self.store.count());
                self.store.add(record);
            }
            None => debug!("Unknown contact type {:?}", answer),
        }
    }

    fn print_list(&mut self) {
        let lines: Vec<String> = self
            .store
            .iter()
            .enumerate()
            .map(|(i, record)| format!("{}. {}", i + 1, record.summary_line()))
            .collect();
        for line in lines {
            self.console.say(&line);
        }
    }

    /// Prints the record's details and binds a record view to it.
    fn open_record(&mut self, index: usize) -> Option<Level> {
        match self.store.get(index) {
            Ok(record) => {
                let detail = record.detail_text();
                self.console.say(&detail);
                self.console.say("");
                Some(Level::RecordView { index })
            }
            Err(e) => {
                debug!("Ignoring selection: {}", e);
                None
            }
        }
    }

    fn on_listing(&mut self) -> Level {
        let Some(input) = self.console.prompt(ListCommand::PROMPT) else {
            return Level::Exited;
        };
        match ListCommand::parse(&input) {
            Some(ListCommand::Select(n)) => n
                .checked_sub(1)
                .and_then(|index| self.open_record(index))
                .unwrap_or(Level::Listing),
            Some(ListCommand::Back) => Level::Menu,
            None => Level::Listing,
        }
    }

    fn run_search(&mut self) -> Level {
        let Some(query) = self.console.prompt("Enter search query:") else {
            return Level::Exited;
        };
        let hits = self.store.search(&query);
        if hits.is_empty() {
            self.console.say("Nothing found!");
        } else {
            self.console.say(&format!("Found {} results:", hits.len()));
            for (i, hit) in hits.iter().enumerate() {
                self.console.say(&format!("{}. {}", i + 1, hit.summary));
            }
        }
        debug!("Search {:?} matched {} fields", query, hits.len());
        Level::Searching { hits }
    }

    fn on_searching(&mut self, hits: Vec<SearchHit>) -> Level {
        let Some(input) = self.console.prompt(SearchCommand::PROMPT) else {
            return Level::Exited;
        };
        match SearchCommand::parse(&input) {
            Some(SearchCommand::Again) => self.run_search(),
            Some(SearchCommand::Select(n)) => {
                let target = n.checked_sub(1).and_then(|i| hits.get(i)).map(|hit| hit.index);
                match target.and_then(|index| self.open_record(index)) {
                    Some(level) => level,
                    None => Level::Searching { hits },
                }
            }
            Some(SearchCommand::Back) => Level::Menu,
            None => Level::Searching { hits },
        }
    }

    fn on_record(&mut self, index: usize) -> Level {
        let Some(input) = self.console.prompt(RecordCommand::PROMPT) else {
            return Level::Exited;
        };
        match RecordCommand::parse(&input) {
            Some(RecordCommand::Edit) => self.edit_record(index),
            Some(RecordCommand::Delete) => {
                match self.store.remove_at(index) {
                    Ok(record) => {
                        debug!("Removed {:?} at index {}", record.kind(), index);
                        self.console.say("The record removed!\n");
                    }
                    Err(e) => {
                        warn!("Delete failed: {}", e);
                        self.console.say("No records to remove!\n");
                    }
                }
                Level::Menu
            }
            Some(RecordCommand::Menu) => {
                self.console.say("");
                Level::Menu
            }
            None => Level::RecordView { index },
        }
    }

    fn edit_record(&mut self, index: usize) -> Level {
        let field_prompt = match self.store.get(index) {
            Ok(record) => record.field_prompt(),
            Err(e) => {
                warn!("Record view lost its record: {}", e);
                return Level::Menu;
            }
        };
        let Some(selector) = self.console.prompt(field_prompt) else {
            return Level::Exited;
        };
        let Ok(record) = self.store.get_mut(index) else {
            return Level::Menu;
        };
        if record.edit(selector.trim(), &mut self.console, self.clock.as_ref()) {
            self.console.say("Saved\n");
        } else {
            debug!("Edit of {:?} changed nothing", selector);
        }
        Level::RecordView { index }
    }
}
