//! Core library surface for the library inventory tracker.
//!
//! The binary is a thin shell around these modules: it parses flags, installs
//! logging, builds an empty [`Inventory`] and hands it to a [`Session`] bound
//! to stdin/stdout. Tests drive the same session with in-memory buffers.
pub mod config;
pub mod error;
pub mod inventory;
pub mod logging;
pub mod models;
pub mod ui;

pub use config::{Cli, Settings};
pub use error::{InventoryError, PromptError};
pub use inventory::{Inventory, Outcome};
pub use models::BookRecord;
pub use ui::{MenuChoice, Prompter, Session};
