//! # Commands
//!
//! Every line the user types at a menu level becomes one of these commands.
//! Each level has its own vocabulary; anything outside it parses to `None`
//! and the navigator simply asks again.
//!
//! ```text
//! [menu]    add | list | search | count | exit
//! [list]    <number> | back
//! [search]  <number> | back | again
//! [record]  edit | delete | menu
//! ```

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    Add,
    List,
    Search,
    Count,
    Exit,
}

impl MenuCommand {
    pub const PROMPT: &'static str = "[menu] Enter action (add, list, search, count, exit):";

    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "add" => Some(MenuCommand::Add),
            "list" => Some(MenuCommand::List),
            "search" => Some(MenuCommand::Search),
            "count" => Some(MenuCommand::Count),
            "exit" => Some(MenuCommand::Exit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListCommand {
    /// 1-based position as typed.
    Select(usize),
    Back,
}

impl ListCommand {
    pub const PROMPT: &'static str = "[list] Enter action ([number], back):";

    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "back" => Some(ListCommand::Back),
            other => other.parse().ok().map(ListCommand::Select),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchCommand {
    /// 1-based position in the result list.
    Select(usize),
    Back,
    Again,
}

impl SearchCommand {
    pub const PROMPT: &'static str = "[search] Enter action ([number], back, again):";

    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "back" => Some(SearchCommand::Back),
            "again" => Some(SearchCommand::Again),
            other => other.parse().ok().map(SearchCommand::Select),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordCommand {
    Edit,
    Delete,
    Menu,
}

impl RecordCommand {
    pub const PROMPT: &'static str = "[record] Enter action (edit, delete, menu):";

    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "edit" => Some(RecordCommand::Edit),
            "delete" => Some(RecordCommand::Delete),
            "menu" => Some(RecordCommand::Menu),
            _ => None,
        }
    }
}
