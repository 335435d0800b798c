//! Campus domain - the university rule engine
//!
//! Pure in-memory model: entities, validated value objects, typed IDs, and
//! the [`University`] aggregate root that enforces every cross-entity
//! invariant. No I/O and no randomness live here; exam grades come through
//! the [`GradeSource`] seam and persistence is the engine's concern.

pub mod aggregates;
pub mod entities;
pub mod error;
pub mod ids;
pub mod value_objects;

pub use aggregates::University;
pub use entities::{
    Book, Classroom, Curriculum, Exam, GradeSource, Library, ScholarshipDepartment, StockEntry,
    Student, Teacher, TeacherDegree,
};
pub use error::DomainError;
pub use ids::{BookId, CurriculumId, ExamId, StudentId, TeacherId};
pub use value_objects::{Grade, PersonName, SpecialtyName, SubjectName, MAX_GRADE, PASS_THRESHOLD};
