//! # Core Application Logic
//!
//! This module contains the phone book's business logic.
//! It knows nothing about terminals; all user interaction goes through the
//! [`console::Console`] trait.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Contact (records)    │
//!                    │  • ContactStore         │
//!                    │  • Navigator (levels)   │
//!                    │                         │
//!                    │  No stdin. No stdout.   │
//!                    └───────────┬─────────────┘
//!                                │ Console
//!                                ▼
//!                         ┌────────────┐
//!                         │    CLI     │
//!                         │  Adapter   │
//!                         │ (stdin/out)│
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`record`]: The `Contact` enum — people and organizations
//! - [`validate`]: Field checks used when a contact is created
//! - [`store`]: `ContactStore` — ordered records and search
//! - [`navigator`]: The menu state machine
//! - [`action`]: Commands accepted at each menu level
//! - [`persist`]: Loading and saving the phone book file
//! - [`config`]: Settings hierarchy

pub mod action;
pub mod clock;
pub mod config;
pub mod console;
pub mod navigator;
pub mod persist;
pub mod record;
pub mod store;
pub mod validate;
