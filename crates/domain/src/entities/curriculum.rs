//! Curriculum entity - a named, ordered set of required subjects

use serde::{Deserialize, Serialize};

use crate::ids::CurriculumId;
use crate::value_objects::{SpecialtyName, SubjectName};

/// A degree program: specialty name plus the subjects it requires
///
/// # Invariants
///
/// - `required_subjects` preserves insertion order and holds no duplicates
/// - The specialty name is unique (case-insensitively) within a University;
///   the aggregate enforces that on registration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Curriculum {
    id: CurriculumId,
    specialty_name: SpecialtyName,
    required_subjects: Vec<SubjectName>,
}

impl Curriculum {
    /// Create an empty curriculum for the given specialty.
    pub fn new(specialty_name: SpecialtyName) -> Self {
        Self {
            id: CurriculumId::new(),
            specialty_name,
            required_subjects: Vec::new(),
        }
    }

    #[inline]
    pub fn id(&self) -> CurriculumId {
        self.id
    }

    #[inline]
    pub fn specialty_name(&self) -> &SpecialtyName {
        &self.specialty_name
    }

    #[inline]
    pub fn required_subjects(&self) -> &[SubjectName] {
        &self.required_subjects
    }

    /// True when the subject is required by this curriculum.
    pub fn requires(&self, subject: &SubjectName) -> bool {
        self.required_subjects.contains(subject)
    }

    /// Append a required subject, preserving insertion order.
    ///
    /// Adding an already-present subject is a successful no-op. Returns
    /// whether the subject was actually inserted. Blank subject names are
    /// rejected when the [`SubjectName`] is constructed.
    pub fn add_subject(&mut self, subject: SubjectName) -> bool {
        if self.required_subjects.contains(&subject) {
            return false;
        }
        self.required_subjects.push(subject);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subject(name: &str) -> SubjectName {
        SubjectName::new(name).unwrap()
    }

    fn curriculum() -> Curriculum {
        Curriculum::new(SpecialtyName::new("Software Engineering").unwrap())
    }

    #[test]
    fn add_subject_preserves_insertion_order() {
        let mut curr = curriculum();
        assert!(curr.add_subject(subject("Databases")));
        assert!(curr.add_subject(subject("OOP")));
        assert!(curr.add_subject(subject("Algorithms")));

        let names: Vec<&str> = curr
            .required_subjects()
            .iter()
            .map(|s| s.as_str())
            .collect();
        assert_eq!(names, ["Databases", "OOP", "Algorithms"]);
    }

    #[test]
    fn duplicate_subject_is_a_noop() {
        let mut curr = curriculum();
        assert!(curr.add_subject(subject("OOP")));
        assert!(!curr.add_subject(subject("OOP")));
        assert_eq!(curr.required_subjects().len(), 1);
    }

    #[test]
    fn blank_subject_is_rejected_at_construction() {
        assert!(SubjectName::new("   ").is_err());
    }

    #[test]
    fn requires_is_exact_match() {
        let mut curr = curriculum();
        curr.add_subject(subject("OOP"));
        assert!(curr.requires(&subject("OOP")));
        assert!(!curr.requires(&subject("oop")));
        assert!(!curr.requires(&subject("History")));
    }
}
