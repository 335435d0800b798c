//! Domain entities

mod book;
mod classroom;
mod curriculum;
mod exam;
mod library;
mod scholarship;
mod student;
mod teacher;

pub use book::Book;
pub use classroom::Classroom;
pub use curriculum::Curriculum;
pub use exam::{Exam, GradeSource};
pub use library::{Library, StockEntry};
pub use scholarship::ScholarshipDepartment;
pub use student::Student;
pub use teacher::{Teacher, TeacherDegree};
