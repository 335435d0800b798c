//! Book entity - an immutable library stock item
//!
//! Two books are distinct when their ids differ, even with identical title
//! and author. The library merges stock by full value equality but lends
//! by title, so equality here deliberately covers every field.

use serde::{Deserialize, Serialize};

use crate::ids::BookId;

/// An immutable book description
///
/// This is a data-carrying value with no invariants to protect; any
/// title/author combination is valid. Fields stay private so a book can
/// never be retitled after it enters a library's stock.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Book {
    id: BookId,
    title: String,
    author: String,
}

impl Book {
    /// Create a book with a fresh identifier.
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id: BookId::new(),
            title: title.into(),
            author: author.into(),
        }
    }

    #[inline]
    pub fn id(&self) -> BookId {
        self.id
    }

    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[inline]
    pub fn author(&self) -> &str {
        &self.author
    }
}

impl std::fmt::Display for Book {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}' by {}", self.title, self.author)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_title_different_id_is_distinct() {
        let a = Book::new("1984", "George Orwell");
        let b = Book::new("1984", "George Orwell");
        assert_ne!(a, b);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn clone_is_equal() {
        let a = Book::new("1984", "George Orwell");
        let b = a.clone();
        assert_eq!(a, b);
    }

    #[test]
    fn display_includes_title_and_author() {
        let book = Book::new("1984", "George Orwell");
        assert_eq!(book.to_string(), "'1984' by George Orwell");
    }
}
