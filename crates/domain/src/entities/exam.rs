//! Exam entity and the grade randomness seam
//!
//! An exam ties a subject, a teacher, a classroom, and a student roster
//! together through handles into the university's collections; conducting
//! it is therefore a [`University`](crate::aggregates::University)
//! operation. The exam itself only carries the registration data and a
//! single-shot `conducted` flag.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{ExamId, StudentId, TeacherId};
use crate::value_objects::SubjectName;

/// Source of exam grades, substitutable for deterministic testing.
///
/// Implementations return a value in the inclusive range `[low, high]`.
/// Any `FnMut(u8, u8) -> u8` closure works as a source, so tests can
/// script outcomes without a dedicated type.
pub trait GradeSource {
    fn next_grade(&mut self, low: u8, high: u8) -> u8;
}

impl<F> GradeSource for F
where
    F: FnMut(u8, u8) -> u8,
{
    fn next_grade(&mut self, low: u8, high: u8) -> u8 {
        self(low, high)
    }
}

/// A scheduled (or already held) exam
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exam {
    id: ExamId,
    subject: SubjectName,
    date: DateTime<Utc>,
    teacher: TeacherId,
    classroom: u32,
    roster: Vec<StudentId>,
    conducted: bool,
}

impl Exam {
    /// Register an exam stamped with the current time.
    pub fn new(
        subject: SubjectName,
        teacher: TeacherId,
        classroom: u32,
        roster: Vec<StudentId>,
    ) -> Self {
        Self {
            id: ExamId::new(),
            subject,
            date: Utc::now(),
            teacher,
            classroom,
            roster,
            conducted: false,
        }
    }

    #[inline]
    pub fn id(&self) -> ExamId {
        self.id
    }

    #[inline]
    pub fn subject(&self) -> &SubjectName {
        &self.subject
    }

    #[inline]
    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    #[inline]
    pub fn teacher(&self) -> TeacherId {
        self.teacher
    }

    /// Number of the classroom the exam is held in.
    #[inline]
    pub fn classroom(&self) -> u32 {
        self.classroom
    }

    #[inline]
    pub fn roster(&self) -> &[StudentId] {
        &self.roster
    }

    /// True once the exam has been held. Re-conducting is rejected.
    #[inline]
    pub fn is_conducted(&self) -> bool {
        self.conducted
    }

    pub(crate) fn mark_conducted(&mut self) {
        self.conducted = true;
    }
}
