//! Session wishlist

use serde::Serialize;

use crate::book::{Book, BookCard};

pub const ADD_LABEL: &str = "Add to Wishlist";
pub const REMOVE_LABEL: &str = "Remove from Wishlist";

/// Result of a toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WishlistChange {
    Added,
    Removed,
}

impl WishlistChange {
    /// Label the book's toggle control shows after this change
    pub fn label(self) -> &'static str {
        match self {
            WishlistChange::Added => REMOVE_LABEL,
            WishlistChange::Removed => ADD_LABEL,
        }
    }
}

/// Books the user marked, unique by id, in insertion order
#[derive(Debug, Clone, Default)]
pub struct Wishlist {
    books: Vec<Book>,
}

impl Wishlist {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: u64) -> bool {
        self.books.iter().any(|b| b.id == id)
    }

    pub fn toggle(&mut self, book: &Book) -> WishlistChange {
        match self.books.iter().position(|b| b.id == book.id) {
            Some(index) => {
                self.books.remove(index);
                WishlistChange::Removed
            }
            None => {
                self.books.push(book.clone());
                WishlistChange::Added
            }
        }
    }

    /// Toggle label for a book given current membership
    pub fn label_for(&self, id: u64) -> &'static str {
        if self.contains(id) {
            REMOVE_LABEL
        } else {
            ADD_LABEL
        }
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Wishlist entries; these carry no toggle control
    pub fn cards(&self) -> Vec<BookCard> {
        self.books
            .iter()
            .map(|book| BookCard::from_book(book, None))
            .collect()
    }
}
