//! The in-memory catalogue and its three mutating operations. Every call is a
//! single lookup-then-mutate step on the map; failures leave the map exactly
//! as it was.

use std::collections::HashMap;
use std::fmt;
use std::num::NonZeroU32;

use tracing::{debug, info, warn};

use crate::error::InventoryError;
use crate::models::BookRecord;

/// Successful result of an inventory operation, rendered by the session as a
/// single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Snapshot of the record after the add/restock was applied.
    Added(BookRecord),
    Borrowed { title: String, quantity: NonZeroU32 },
    Returned { title: String, quantity: NonZeroU32 },
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Added(book) => write!(f, "Successfully added/updated book: {book}"),
            Outcome::Borrowed { title, quantity } => {
                write!(f, "Successfully borrowed {quantity} copy(s) of \"{title}\".")
            }
            Outcome::Returned { title, quantity } => {
                write!(f, "Successfully returned {quantity} copy(s) of \"{title}\".")
            }
        }
    }
}

/// Title-keyed store owning every [`BookRecord`]. Constructed once by the
/// binary and handed to the session by mutable reference.
#[derive(Debug, Default)]
pub struct Inventory {
    books: HashMap<String, BookRecord>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new title or restock an existing one. When the title is
    /// already known the supplied author is ignored and the first one kept.
    pub fn add_or_update(&mut self, title: &str, author: &str, quantity: NonZeroU32) -> Outcome {
        let book = self
            .books
            .entry(title.to_string())
            .and_modify(|existing| existing.increase(quantity))
            .or_insert_with(|| BookRecord::new(title, author, quantity.get()));
        info!(title, added = quantity.get(), total = book.quantity(), "book stocked");
        Outcome::Added(book.clone())
    }

    /// Lend `quantity` copies of `title`.
    pub fn borrow(&mut self, title: &str, quantity: NonZeroU32) -> Result<Outcome, InventoryError> {
        let book = self.lookup(title)?;
        if let Err(err) = book.decrease(quantity) {
            warn!(
                title,
                requested = quantity.get(),
                available = book.quantity(),
                "borrow rejected"
            );
            return Err(err);
        }
        info!(title, borrowed = quantity.get(), remaining = book.quantity(), "book borrowed");
        Ok(Outcome::Borrowed {
            title: title.to_string(),
            quantity,
        })
    }

    /// Put `quantity` copies of `title` back on the shelf. Returns are not
    /// checked against earlier borrows.
    pub fn return_copies(
        &mut self,
        title: &str,
        quantity: NonZeroU32,
    ) -> Result<Outcome, InventoryError> {
        let book = self.lookup(title)?;
        book.increase(quantity);
        info!(title, returned = quantity.get(), total = book.quantity(), "book returned");
        Ok(Outcome::Returned {
            title: title.to_string(),
            quantity,
        })
    }

    pub fn get(&self, title: &str) -> Option<&BookRecord> {
        self.books.get(title)
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    fn lookup(&mut self, title: &str) -> Result<&mut BookRecord, InventoryError> {
        debug!(title, "looking up book");
        self.books.get_mut(title).ok_or_else(|| {
            warn!(title, "book not found");
            InventoryError::NotFound {
                title: title.to_string(),
            }
        })
    }
}
