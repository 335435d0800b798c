//! Library entity - canonical book stock and lending bookkeeping
//!
//! The library owns the stock counts; each student owns their held-book
//! list. The two stay consistent only through the operations here, which
//! always run the student-side membership check before touching stock.
//!
//! Lookup semantics are deliberately asymmetric: `add_book` merges by full
//! book equality (title + author + id), while lending and returns scan for
//! the first title-exact match.

use serde::{Deserialize, Serialize};

use crate::entities::{Book, Student};
use crate::error::DomainError;

/// One stock line: a book and how many copies remain lendable
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockEntry {
    book: Book,
    copies: u32,
}

impl StockEntry {
    #[inline]
    pub fn book(&self) -> &Book {
        &self.book
    }

    #[inline]
    pub fn copies(&self) -> u32 {
        self.copies
    }
}

/// The university library
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Library {
    stock: Vec<StockEntry>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    /// All stock lines, in the order the books entered the catalogue.
    #[inline]
    pub fn stock(&self) -> &[StockEntry] {
        &self.stock
    }

    /// Remaining copies of the first title-exact match, if the title is known.
    pub fn copies_of(&self, title: &str) -> Option<u32> {
        self.stock
            .iter()
            .find(|entry| entry.book.title() == title)
            .map(|entry| entry.copies)
    }

    /// First book whose title matches case-insensitively.
    ///
    /// Used by callers that merge new stock onto an existing catalogue line
    /// regardless of title casing.
    pub fn find_by_title_ignore_case(&self, title: &str) -> Option<&Book> {
        self.stock
            .iter()
            .map(|entry| &entry.book)
            .find(|book| book.title().eq_ignore_ascii_case(title))
    }

    /// Add copies of a book to the stock.
    ///
    /// Merges onto an existing line only on full book equality; a book with
    /// the same title but a different id gets its own line.
    pub fn add_book(&mut self, book: Book, quantity: u32) {
        match self.stock.iter_mut().find(|entry| entry.book == book) {
            Some(entry) => entry.copies += quantity,
            None => self.stock.push(StockEntry {
                book,
                copies: quantity,
            }),
        }
    }

    /// Lend the first title-exact match to a student.
    ///
    /// The student-side membership check runs before the stock decrement,
    /// so a rejected loan never loses a copy.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Resource` when the title is not in the
    /// catalogue, all copies are on loan, or the student already holds that
    /// exact book.
    pub fn lend_book(&mut self, student: &mut Student, title: &str) -> Result<(), DomainError> {
        let entry = self
            .stock
            .iter_mut()
            .find(|entry| entry.book.title() == title)
            .ok_or_else(|| {
                DomainError::resource(format!("Book '{}' is not in the catalogue", title))
            })?;

        if entry.copies == 0 {
            return Err(DomainError::resource(format!(
                "All copies of '{}' are on loan",
                title
            )));
        }

        student.borrow_book(entry.book.id())?;
        entry.copies -= 1;
        Ok(())
    }

    /// Take a book back from a student and restore its stock line.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Resource` when the title does not belong to
    /// this library or the student does not hold that exact book.
    pub fn accept_return(&mut self, student: &mut Student, title: &str) -> Result<(), DomainError> {
        let entry = self
            .stock
            .iter_mut()
            .find(|entry| entry.book.title() == title)
            .ok_or_else(|| {
                DomainError::resource(format!("Book '{}' does not belong to this library", title))
            })?;

        if !student.borrowed_books().contains(&entry.book.id()) {
            return Err(DomainError::resource(format!(
                "Student {} never borrowed '{}'",
                student.full_name(),
                title
            )));
        }

        student.return_book(entry.book.id())?;
        entry.copies += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::PersonName;

    fn student(name: &str) -> Student {
        Student::new(PersonName::new(name).unwrap(), 20)
    }

    fn library_with(book: &Book, copies: u32) -> Library {
        let mut library = Library::new();
        library.add_book(book.clone(), copies);
        library
    }

    mod stocking {
        use super::*;

        #[test]
        fn add_book_merges_on_full_equality() {
            let book = Book::new("1984", "George Orwell");
            let mut library = library_with(&book, 2);

            library.add_book(book.clone(), 3);
            assert_eq!(library.stock().len(), 1);
            assert_eq!(library.copies_of("1984"), Some(5));
        }

        #[test]
        fn same_title_different_id_gets_its_own_line() {
            let first = Book::new("1984", "George Orwell");
            let second = Book::new("1984", "George Orwell");
            let mut library = library_with(&first, 2);

            library.add_book(second, 1);
            assert_eq!(library.stock().len(), 2);
            // Title lookup still answers with the first line.
            assert_eq!(library.copies_of("1984"), Some(2));
        }

        #[test]
        fn find_by_title_ignore_case() {
            let book = Book::new("1984", "George Orwell");
            let library = library_with(&book, 1);

            assert_eq!(library.find_by_title_ignore_case("1984"), Some(&book));
            let master = Book::new("The Master and Margarita", "Mikhail Bulgakov");
            let mut library = library;
            library.add_book(master.clone(), 1);
            assert_eq!(
                library.find_by_title_ignore_case("the master AND margarita"),
                Some(&master)
            );
            assert_eq!(library.find_by_title_ignore_case("Unknown"), None);
        }
    }

    mod lending {
        use super::*;

        #[test]
        fn lend_decrements_stock_and_adds_to_borrower() {
            let book = Book::new("1984", "George Orwell");
            let mut library = library_with(&book, 2);
            let mut reader = student("Reader");

            library.lend_book(&mut reader, "1984").unwrap();
            assert_eq!(library.copies_of("1984"), Some(1));
            assert_eq!(reader.borrowed_books(), [book.id()]);
        }

        #[test]
        fn unknown_title_fails() {
            let mut library = Library::new();
            let mut reader = student("Reader");
            let err = library.lend_book(&mut reader, "Unknown").unwrap_err();
            assert!(matches!(err, DomainError::Resource(_)));
        }

        #[test]
        fn lending_the_last_copy_exhausts_stock() {
            let book = Book::new("1984", "George Orwell");
            let mut library = library_with(&book, 2);
            let mut first = student("First");
            let mut second = student("Second");
            let mut third = student("Third");

            library.lend_book(&mut first, "1984").unwrap();
            library.lend_book(&mut second, "1984").unwrap();

            let err = library.lend_book(&mut third, "1984").unwrap_err();
            assert!(matches!(err, DomainError::Resource(_)));
            assert!(third.borrowed_books().is_empty());
        }

        #[test]
        fn rejected_loan_leaves_stock_untouched() {
            // A second loan of the same book to the same student fails on
            // the student side; the copy count must not move.
            let book = Book::new("1984", "George Orwell");
            let mut library = library_with(&book, 3);
            let mut reader = student("Reader");

            library.lend_book(&mut reader, "1984").unwrap();
            let err = library.lend_book(&mut reader, "1984").unwrap_err();
            assert!(matches!(err, DomainError::Resource(_)));
            assert_eq!(library.copies_of("1984"), Some(2));
            assert_eq!(reader.borrowed_books().len(), 1);
        }

        #[test]
        fn title_match_is_case_sensitive() {
            let book = Book::new("1984", "George Orwell");
            let mut library = library_with(&book, 1);
            let mut reader = student("Reader");

            let master = Book::new("The Master and Margarita", "Mikhail Bulgakov");
            library.add_book(master, 1);
            let err = library
                .lend_book(&mut reader, "the master and margarita")
                .unwrap_err();
            assert!(matches!(err, DomainError::Resource(_)));
        }
    }

    mod returns {
        use super::*;

        #[test]
        fn return_restores_stock_and_clears_borrower() {
            let book = Book::new("1984", "George Orwell");
            let mut library = library_with(&book, 2);
            let mut reader = student("Reader");

            library.lend_book(&mut reader, "1984").unwrap();
            library.accept_return(&mut reader, "1984").unwrap();

            assert_eq!(library.copies_of("1984"), Some(2));
            assert!(reader.borrowed_books().is_empty());
        }

        #[test]
        fn returning_an_unknown_title_fails() {
            let mut library = Library::new();
            let mut reader = student("Reader");
            let err = library.accept_return(&mut reader, "Unknown").unwrap_err();
            assert!(matches!(err, DomainError::Resource(_)));
        }

        #[test]
        fn returning_a_book_the_student_never_held_fails() {
            let book = Book::new("1984", "George Orwell");
            let mut library = library_with(&book, 1);
            let mut reader = student("Reader");

            let err = library.accept_return(&mut reader, "1984").unwrap_err();
            assert!(matches!(err, DomainError::Resource(_)));
            assert_eq!(library.copies_of("1984"), Some(1));
        }
    }
}
