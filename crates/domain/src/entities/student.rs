//! Student entity - record book, borrowed books, and scholarship state
//!
//! Cross-references are handles, not shared pointers: the curriculum is an
//! id into the university's curricula and borrowed books are ids into the
//! library's stock. Removing a student from the university does not touch
//! these handles, and nothing cleans them up afterwards; that is observable
//! behavior this model preserves.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::entities::Curriculum;
use crate::error::DomainError;
use crate::ids::{BookId, CurriculumId, StudentId};
use crate::value_objects::{Grade, PersonName, SubjectName};

/// A student enrolled (or once enrolled) at the university
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    id: StudentId,
    full_name: PersonName,
    age: u8,
    curriculum: Option<CurriculumId>,
    scholarship_amount: f64,
    /// The record book: subject -> latest grade
    record_book: BTreeMap<SubjectName, Grade>,
    borrowed_books: Vec<BookId>,
}

impl Student {
    /// Create a student with no curriculum, grades, or borrowed books.
    pub fn new(full_name: PersonName, age: u8) -> Self {
        Self {
            id: StudentId::new(),
            full_name,
            age,
            curriculum: None,
            scholarship_amount: 0.0,
            record_book: BTreeMap::new(),
            borrowed_books: Vec::new(),
        }
    }

    /// Bind the student to a curriculum.
    pub fn with_curriculum(mut self, curriculum: CurriculumId) -> Self {
        self.curriculum = Some(curriculum);
        self
    }

    #[inline]
    pub fn id(&self) -> StudentId {
        self.id
    }

    #[inline]
    pub fn full_name(&self) -> &PersonName {
        &self.full_name
    }

    #[inline]
    pub fn age(&self) -> u8 {
        self.age
    }

    #[inline]
    pub fn curriculum(&self) -> Option<CurriculumId> {
        self.curriculum
    }

    #[inline]
    pub fn scholarship_amount(&self) -> f64 {
        self.scholarship_amount
    }

    #[inline]
    pub fn record_book(&self) -> &BTreeMap<SubjectName, Grade> {
        &self.record_book
    }

    #[inline]
    pub fn borrowed_books(&self) -> &[BookId] {
        &self.borrowed_books
    }

    /// Arithmetic mean of all recorded grades; 0.0 when none are recorded.
    pub fn average_score(&self) -> f64 {
        if self.record_book.is_empty() {
            return 0.0;
        }
        let sum: u32 = self.record_book.values().map(|g| u32::from(g.value())).sum();
        f64::from(sum) / self.record_book.len() as f64
    }

    /// Record a grade for a subject, overwriting any previous grade.
    ///
    /// The caller resolves the student's curriculum handle and passes the
    /// curriculum itself; students bound to a curriculum may only sit exams
    /// in its required subjects. Grade range validation happens when the
    /// [`Grade`] is constructed.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Enrollment` when the student has a curriculum
    /// and the subject is not among its required subjects.
    pub fn take_exam(
        &mut self,
        subject: &SubjectName,
        grade: Grade,
        curriculum: Option<&Curriculum>,
    ) -> Result<(), DomainError> {
        if let Some(curriculum) = curriculum {
            if !curriculum.requires(subject) {
                return Err(DomainError::enrollment(format!(
                    "Subject '{}' is not in the curriculum of student {}",
                    subject, self.full_name
                )));
            }
        }
        self.record_book.insert(subject.clone(), grade);
        Ok(())
    }

    /// Add a book to the student's held set.
    ///
    /// Pure membership operation; stock accounting is the library's job.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Resource` if the exact book is already held.
    pub fn borrow_book(&mut self, book: BookId) -> Result<(), DomainError> {
        if self.borrowed_books.contains(&book) {
            return Err(DomainError::resource(format!(
                "Student {} already holds that book",
                self.full_name
            )));
        }
        self.borrowed_books.push(book);
        Ok(())
    }

    /// Remove a book from the student's held set.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Resource` if the book is not held.
    pub fn return_book(&mut self, book: BookId) -> Result<(), DomainError> {
        match self.borrowed_books.iter().position(|held| *held == book) {
            Some(index) => {
                self.borrowed_books.remove(index);
                Ok(())
            }
            None => Err(DomainError::resource(format!(
                "Student {} never borrowed that book",
                self.full_name
            ))),
        }
    }

    /// Unconditional scholarship setter.
    ///
    /// The sign of `amount` is the caller's responsibility; the scholarship
    /// department only ever assigns zero or positive awards.
    pub fn assign_scholarship(&mut self, amount: f64) {
        self.scholarship_amount = amount;
    }
}
