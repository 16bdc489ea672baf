//! Typed failures surfaced by the inventory and the prompt adapter. The
//! `Display` text of each variant is exactly what the session prints after
//! the `Error: ` prefix, so keep the wording stable.

use std::io;

use thiserror::Error;

/// Rejections produced by [`crate::Inventory`]. Neither variant mutates state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InventoryError {
    /// No record exists under the requested title (exact, case-sensitive).
    #[error("Book not found in library.")]
    NotFound { title: String },
    /// The borrow asked for more copies than the shelf currently holds.
    #[error("Not enough copies available to borrow.")]
    InsufficientStock {
        title: String,
        requested: u32,
        available: u32,
    },
}

/// Reasons a prompt could not produce a value.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("failed to read from input")]
    Read(#[source] io::Error),
    #[error("failed to write to output")]
    Write(#[source] io::Error),
    /// The input source reached end of stream.
    #[error("input closed")]
    Closed,
    /// The configured attempt bound was hit before a valid answer arrived.
    #[error("gave up after {0} invalid attempts")]
    TooManyAttempts(u32),
}
