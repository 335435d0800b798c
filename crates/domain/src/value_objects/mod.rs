//! Validated value objects shared across the domain

mod grade;
mod names;

pub use grade::{Grade, MAX_GRADE, PASS_THRESHOLD};
pub use names::{PersonName, SpecialtyName, SubjectName};
