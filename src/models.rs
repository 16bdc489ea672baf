//! Domain model for a single catalogue entry. The record stays a light-weight
//! data holder; the borrowing rules live in [`crate::inventory`].

use std::fmt;
use std::num::NonZeroU32;

use crate::error::InventoryError;

#[derive(Debug, Clone, PartialEq, Eq)]
/// One title on the shelf together with the number of copies currently held
/// (copies out on loan are not counted).
pub struct BookRecord {
    /// Identity key inside the inventory. Matching is exact and case-sensitive.
    title: String,
    /// Recorded on first insert and never overwritten.
    author: String,
    quantity: u32,
}

impl BookRecord {
    pub fn new(title: impl Into<String>, author: impl Into<String>, quantity: u32) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            quantity,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Add copies to the shelf. There is no upper bound, so the count
    /// saturates instead of wrapping.
    pub fn increase(&mut self, amount: NonZeroU32) {
        self.quantity = self.quantity.saturating_add(amount.get());
    }

    /// Remove copies from the shelf, refusing to go below zero. On refusal
    /// the quantity is left untouched.
    pub fn decrease(&mut self, amount: NonZeroU32) -> Result<(), InventoryError> {
        match self.quantity.checked_sub(amount.get()) {
            Some(remaining) => {
                self.quantity = remaining;
                Ok(())
            }
            None => Err(InventoryError::InsufficientStock {
                title: self.title.clone(),
                requested: amount.get(),
                available: self.quantity,
            }),
        }
    }

    /// Human readable one-liner, e.g. `"Dune" by Herbert (Quantity: 3)`.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for BookRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\"{}\" by {} (Quantity: {})",
            self.title, self.author, self.quantity
        )
    }
}
