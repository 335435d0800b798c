//! Teacher entity and academic degrees

use serde::{Deserialize, Serialize};

use crate::entities::{Curriculum, Student};
use crate::error::DomainError;
use crate::ids::TeacherId;
use crate::value_objects::{Grade, PersonName, SubjectName};

/// Academic degree held by a teacher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TeacherDegree {
    DoctorOfSciences,
    CandidateOfSciences,
    AssociateProfessor,
    Professor,
    SeniorLecturer,
    Lecturer,
}

impl TeacherDegree {
    /// All degrees, in seniority order, for selection menus.
    pub fn all() -> [TeacherDegree; 6] {
        [
            Self::DoctorOfSciences,
            Self::CandidateOfSciences,
            Self::AssociateProfessor,
            Self::Professor,
            Self::SeniorLecturer,
            Self::Lecturer,
        ]
    }
}

impl std::fmt::Display for TeacherDegree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::DoctorOfSciences => "Doctor of Sciences",
            Self::CandidateOfSciences => "Candidate of Sciences",
            Self::AssociateProfessor => "Associate Professor",
            Self::Professor => "Professor",
            Self::SeniorLecturer => "Senior Lecturer",
            Self::Lecturer => "Lecturer",
        };
        write!(f, "{}", label)
    }
}

/// A member of the teaching staff
///
/// # Invariants
///
/// - `subjects` is non-empty, enforced at construction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Teacher {
    id: TeacherId,
    full_name: PersonName,
    age: u8,
    degree: Option<TeacherDegree>,
    subjects: Vec<SubjectName>,
}

impl Teacher {
    /// Create a teacher with at least one taught subject.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Enrollment` when `subjects` is empty.
    pub fn new(
        full_name: PersonName,
        age: u8,
        subjects: Vec<SubjectName>,
    ) -> Result<Self, DomainError> {
        if subjects.is_empty() {
            return Err(DomainError::enrollment(format!(
                "Teacher {} must teach at least one subject",
                full_name
            )));
        }
        Ok(Self {
            id: TeacherId::new(),
            full_name,
            age,
            degree: None,
            subjects,
        })
    }

    /// Set the teacher's degree.
    pub fn with_degree(mut self, degree: TeacherDegree) -> Self {
        self.degree = Some(degree);
        self
    }

    #[inline]
    pub fn id(&self) -> TeacherId {
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
    pub fn degree(&self) -> Option<TeacherDegree> {
        self.degree
    }

    #[inline]
    pub fn subjects(&self) -> &[SubjectName] {
        &self.subjects
    }

    /// True when the teacher teaches the subject (exact match).
    pub fn teaches(&self, subject: &SubjectName) -> bool {
        self.subjects.contains(subject)
    }

    /// Record a grade in the student's record book.
    ///
    /// Deliberately does not check that the teacher teaches the subject;
    /// that rule belongs to exam creation at the aggregate level.
    pub fn evaluate_student(
        &self,
        student: &mut Student,
        subject: &SubjectName,
        grade: Grade,
        curriculum: Option<&Curriculum>,
    ) -> Result<(), DomainError> {
        student.take_exam(subject, grade, curriculum)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subject(name: &str) -> SubjectName {
        SubjectName::new(name).unwrap()
    }

    fn name(value: &str) -> PersonName {
        PersonName::new(value).unwrap()
    }

    #[test]
    fn requires_at_least_one_subject() {
        let err = Teacher::new(name("Dr. House"), 50, Vec::new()).unwrap_err();
        assert!(matches!(err, DomainError::Enrollment(_)));
    }

    #[test]
    fn teaches_is_exact_match() {
        let teacher = Teacher::new(name("Dr. House"), 50, vec![subject("Anatomy")]).unwrap();
        assert!(teacher.teaches(&subject("Anatomy")));
        assert!(!teacher.teaches(&subject("anatomy")));
    }

    #[test]
    fn with_degree_sets_degree() {
        let teacher = Teacher::new(name("Dr. House"), 50, vec![subject("Anatomy")])
            .unwrap()
            .with_degree(TeacherDegree::Professor);
        assert_eq!(teacher.degree(), Some(TeacherDegree::Professor));
    }

    #[test]
    fn evaluate_student_delegates_to_record_book() {
        let teacher = Teacher::new(name("Dr. House"), 50, vec![subject("Anatomy")]).unwrap();
        let mut student = Student::new(name("Reader"), 20);

        teacher
            .evaluate_student(&mut student, &subject("Anatomy"), Grade::new(7).unwrap(), None)
            .unwrap();
        assert_eq!(student.record_book()[&subject("Anatomy")].value(), 7);
    }

    #[test]
    fn evaluate_student_does_not_check_taught_subjects() {
        // The teaches-check is exam creation's job, not the teacher's.
        let teacher = Teacher::new(name("Dr. House"), 50, vec![subject("Anatomy")]).unwrap();
        let mut student = Student::new(name("Reader"), 20);

        teacher
            .evaluate_student(&mut student, &subject("History"), Grade::new(5).unwrap(), None)
            .unwrap();
        assert!(student.record_book().contains_key(&subject("History")));
    }

    #[test]
    fn degree_display_labels() {
        assert_eq!(TeacherDegree::DoctorOfSciences.to_string(), "Doctor of Sciences");
        assert_eq!(TeacherDegree::Lecturer.to_string(), "Lecturer");
        assert_eq!(TeacherDegree::all().len(), 6);
    }
}
