//! University aggregate - sole owner and coordinator of all collections
//!
//! Every other entity is reached through the university: students,
//! teachers, classrooms, curricula, and exams live in its collections, and
//! cross-references between them are handles resolved here. Creation goes
//! through factory operations that validate preconditions before insertion;
//! removal only detaches the entity from its collection and never cascades
//! into handles stored elsewhere.

use serde::{Deserialize, Serialize};

use crate::entities::{
    Book, Classroom, Curriculum, Exam, GradeSource, Library, ScholarshipDepartment, Student,
    Teacher, TeacherDegree,
};
use crate::error::DomainError;
use crate::ids::{CurriculumId, ExamId, StudentId, TeacherId};
use crate::value_objects::{Grade, PersonName, SpecialtyName, SubjectName};

/// Grades drawn during an exam fall in this inclusive range.
const EXAM_GRADE_LOW: u8 = 1;
const EXAM_GRADE_HIGH: u8 = 10;

/// The aggregate root of the whole model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct University {
    name: String,
    library: Library,
    scholarship_department: ScholarshipDepartment,
    students: Vec<Student>,
    teachers: Vec<Teacher>,
    classrooms: Vec<Classroom>,
    curricula: Vec<Curriculum>,
    exams: Vec<Exam>,
}

impl University {
    /// Create an empty university.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            library: Library::new(),
            scholarship_department: ScholarshipDepartment::default(),
            students: Vec::new(),
            teachers: Vec::new(),
            classrooms: Vec::new(),
            curricula: Vec::new(),
            exams: Vec::new(),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn library(&self) -> &Library {
        &self.library
    }

    #[inline]
    pub fn scholarship_department(&self) -> &ScholarshipDepartment {
        &self.scholarship_department
    }

    #[inline]
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    #[inline]
    pub fn teachers(&self) -> &[Teacher] {
        &self.teachers
    }

    #[inline]
    pub fn classrooms(&self) -> &[Classroom] {
        &self.classrooms
    }

    #[inline]
    pub fn curricula(&self) -> &[Curriculum] {
        &self.curricula
    }

    #[inline]
    pub fn exams(&self) -> &[Exam] {
        &self.exams
    }

    // =========================================================================
    // Lookups
    // =========================================================================

    pub fn student(&self, id: StudentId) -> Option<&Student> {
        self.students.iter().find(|s| s.id() == id)
    }

    pub fn teacher(&self, id: TeacherId) -> Option<&Teacher> {
        self.teachers.iter().find(|t| t.id() == id)
    }

    pub fn classroom(&self, number: u32) -> Option<&Classroom> {
        self.classrooms.iter().find(|c| c.number() == number)
    }

    pub fn curriculum(&self, id: CurriculumId) -> Option<&Curriculum> {
        self.curricula.iter().find(|c| c.id() == id)
    }

    pub fn exam(&self, id: ExamId) -> Option<&Exam> {
        self.exams.iter().find(|e| e.id() == id)
    }

    /// Case-insensitive exact match on specialty name.
    pub fn curriculum_by_name(&self, name: &str) -> Option<&Curriculum> {
        self.curricula
            .iter()
            .find(|c| c.specialty_name().matches_ignore_case(name))
    }

    /// First teacher whose roster includes the subject.
    pub fn teacher_for_subject(&self, subject: &SubjectName) -> Option<&Teacher> {
        self.teachers.iter().find(|t| t.teaches(subject))
    }

    /// First classroom that is currently free.
    pub fn free_classroom(&self) -> Option<&Classroom> {
        self.classrooms.iter().find(|c| !c.is_occupied())
    }

    /// Students whose curriculum requires the subject, in roster order.
    pub fn students_requiring(&self, subject: &SubjectName) -> Vec<&Student> {
        self.students
            .iter()
            .filter(|s| {
                s.curriculum()
                    .and_then(|id| self.curriculum(id))
                    .is_some_and(|c| c.requires(subject))
            })
            .collect()
    }

    // =========================================================================
    // Enrollment and removal
    // =========================================================================

    /// Enroll a student under the named curriculum.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` for a blank name and
    /// `DomainError::Enrollment` when no curriculum matches the name
    /// (case-insensitively).
    pub fn enroll_student(
        &mut self,
        full_name: &str,
        age: u8,
        curriculum_name: &str,
    ) -> Result<StudentId, DomainError> {
        let full_name = PersonName::new(full_name)?;
        let curriculum = self.curriculum_by_name(curriculum_name).ok_or_else(|| {
            DomainError::enrollment(format!("Curriculum '{}' does not exist", curriculum_name))
        })?;

        let student = Student::new(full_name, age).with_curriculum(curriculum.id());
        let id = student.id();
        self.students.push(student);
        Ok(id)
    }

    /// Remove a student from the roster.
    ///
    /// Returns whether anyone was removed; expelling an unknown student is
    /// a reported non-fatal outcome, not an error. Handles pointing at the
    /// student (an exam roster, a library loan) are left as-is.
    pub fn expel_student(&mut self, id: StudentId) -> bool {
        match self.students.iter().position(|s| s.id() == id) {
            Some(index) => {
                self.students.remove(index);
                true
            }
            None => false,
        }
    }

    /// Hire a teacher for the given subjects.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` for a blank name and
    /// `DomainError::Enrollment` when `subjects` is empty.
    pub fn enroll_teacher(
        &mut self,
        full_name: &str,
        age: u8,
        degree: Option<TeacherDegree>,
        subjects: Vec<SubjectName>,
    ) -> Result<TeacherId, DomainError> {
        let full_name = PersonName::new(full_name)?;
        let mut teacher = Teacher::new(full_name, age, subjects)?;
        if let Some(degree) = degree {
            teacher = teacher.with_degree(degree);
        }
        let id = teacher.id();
        self.teachers.push(teacher);
        Ok(id)
    }

    /// Remove a teacher from the staff list. Same semantics as
    /// [`expel_student`](Self::expel_student).
    pub fn fire_teacher(&mut self, id: TeacherId) -> bool {
        match self.teachers.iter().position(|t| t.id() == id) {
            Some(index) => {
                self.teachers.remove(index);
                true
            }
            None => false,
        }
    }

    // =========================================================================
    // Curricula and classrooms
    // =========================================================================

    /// Register a new curriculum.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` for a blank name and
    /// `DomainError::Resource` when a curriculum with that name already
    /// exists (case-insensitively).
    pub fn add_curriculum(&mut self, specialty_name: &str) -> Result<CurriculumId, DomainError> {
        let specialty_name = SpecialtyName::new(specialty_name)?;
        if self.curriculum_by_name(specialty_name.as_str()).is_some() {
            return Err(DomainError::resource(format!(
                "Curriculum '{}' already exists",
                specialty_name
            )));
        }

        let curriculum = Curriculum::new(specialty_name);
        let id = curriculum.id();
        self.curricula.push(curriculum);
        Ok(id)
    }

    /// Append a required subject to the named curriculum.
    ///
    /// Returns whether the subject was inserted; an already-present subject
    /// is a successful no-op.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NotFound` for an unknown curriculum and
    /// `DomainError::Validation` for a blank subject.
    pub fn add_subject_to_curriculum(
        &mut self,
        curriculum_name: &str,
        subject: &str,
    ) -> Result<bool, DomainError> {
        let subject = SubjectName::new(subject)?;
        let curriculum = self
            .curricula
            .iter_mut()
            .find(|c| c.specialty_name().matches_ignore_case(curriculum_name))
            .ok_or_else(|| DomainError::not_found("Curriculum", curriculum_name))?;
        Ok(curriculum.add_subject(subject))
    }

    /// Register a new classroom.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Resource` when the room number is taken.
    pub fn add_classroom(&mut self, number: u32, capacity: u32) -> Result<(), DomainError> {
        if self.classroom(number).is_some() {
            return Err(DomainError::resource(format!(
                "Classroom {} already exists",
                number
            )));
        }
        self.classrooms.push(Classroom::new(number, capacity));
        Ok(())
    }

    // =========================================================================
    // Exams
    // =========================================================================

    /// Register an exam, stamped with the current time.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Enrollment` when the teacher does not teach
    /// the subject and `DomainError::NotFound` for unknown teacher or
    /// classroom handles. No exam is registered on failure.
    pub fn create_exam(
        &mut self,
        subject: SubjectName,
        teacher: TeacherId,
        classroom: u32,
        roster: Vec<StudentId>,
    ) -> Result<ExamId, DomainError> {
        let examiner = self
            .teacher(teacher)
            .ok_or_else(|| DomainError::not_found("Teacher", teacher.to_string()))?;
        if !examiner.teaches(&subject) {
            return Err(DomainError::enrollment(format!(
                "Teacher {} does not teach {}",
                examiner.full_name(),
                subject
            )));
        }
        if self.classroom(classroom).is_none() {
            return Err(DomainError::not_found("Classroom", classroom.to_string()));
        }

        let exam = Exam::new(subject, teacher, classroom, roster);
        let id = exam.id();
        self.exams.push(exam);
        Ok(id)
    }

    /// Hold an exam: occupy the room, grade the roster in order, vacate.
    ///
    /// Grades come from the injected [`GradeSource`] in the inclusive range
    /// `[1, 10]`; students scoring below the pass threshold are returned.
    /// The returned students are **not** removed from the roster here -
    /// expulsion is the caller's decision.
    ///
    /// The classroom is vacated on every exit path, including grading
    /// failures. Occupying a busy room aborts before any grading occurs.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::State` for an already-conducted exam or an
    /// occupied classroom, and propagates any grading failure.
    pub fn conduct_exam(
        &mut self,
        exam: ExamId,
        grades: &mut dyn GradeSource,
    ) -> Result<Vec<StudentId>, DomainError> {
        let registered = self
            .exam(exam)
            .ok_or_else(|| DomainError::not_found("Exam", exam.to_string()))?;
        if registered.is_conducted() {
            return Err(DomainError::state(format!(
                "Exam in {} has already been conducted",
                registered.subject()
            )));
        }
        let subject = registered.subject().clone();
        let teacher = registered.teacher();
        let room = registered.classroom();
        let roster = registered.roster().to_vec();

        self.classroom_mut(room)
            .ok_or_else(|| DomainError::not_found("Classroom", room.to_string()))?
            .occupy()?;

        let graded = self.grade_roster(&subject, teacher, &roster, grades);

        // Vacate on every exit path; the room cannot already be free after
        // the occupy above succeeded.
        if let Some(room) = self.classroom_mut(room) {
            let _ = room.vacate();
        }

        let failed = graded?;
        if let Some(registered) = self.exams.iter_mut().find(|e| e.id() == exam) {
            registered.mark_conducted();
        }
        Ok(failed)
    }

    fn grade_roster(
        &mut self,
        subject: &SubjectName,
        teacher: TeacherId,
        roster: &[StudentId],
        grades: &mut dyn GradeSource,
    ) -> Result<Vec<StudentId>, DomainError> {
        let examiner = self
            .teachers
            .iter()
            .find(|t| t.id() == teacher)
            .ok_or_else(|| DomainError::not_found("Teacher", teacher.to_string()))?;

        let mut failed = Vec::new();
        for &student_id in roster {
            let grade = Grade::new(grades.next_grade(EXAM_GRADE_LOW, EXAM_GRADE_HIGH))?;
            let student = self
                .students
                .iter_mut()
                .find(|s| s.id() == student_id)
                .ok_or_else(|| DomainError::not_found("Student", student_id.to_string()))?;
            let curriculum = student
                .curriculum()
                .and_then(|id| self.curricula.iter().find(|c| c.id() == id));

            examiner.evaluate_student(student, subject, grade, curriculum)?;
            if grade.is_failing() {
                failed.push(student_id);
            }
        }
        Ok(failed)
    }

    fn classroom_mut(&mut self, number: u32) -> Option<&mut Classroom> {
        self.classrooms.iter_mut().find(|c| c.number() == number)
    }

    // =========================================================================
    // Library delegation
    // =========================================================================

    /// Add copies of a book to the library stock.
    pub fn add_book(&mut self, book: Book, quantity: u32) {
        self.library.add_book(book, quantity);
    }

    /// Lend the first title-exact match to the student.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NotFound` for an unknown student and the
    /// library's resource errors otherwise.
    pub fn lend_book(&mut self, student: StudentId, title: &str) -> Result<(), DomainError> {
        let student = self
            .students
            .iter_mut()
            .find(|s| s.id() == student)
            .ok_or_else(|| DomainError::not_found("Student", student.to_string()))?;
        self.library.lend_book(student, title)
    }

    /// Take a book back from the student.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NotFound` for an unknown student and the
    /// library's resource errors otherwise.
    pub fn accept_return(&mut self, student: StudentId, title: &str) -> Result<(), DomainError> {
        let student = self
            .students
            .iter_mut()
            .find(|s| s.id() == student)
            .ok_or_else(|| DomainError::not_found("Student", student.to_string()))?;
        self.library.accept_return(student, title)
    }

    // =========================================================================
    // Semester end
    // =========================================================================

    /// Run scholarship assignment over the full roster.
    ///
    /// Returns `None` (a notified no-op) when there are no students,
    /// otherwise the number of students who qualified for an award.
    pub fn process_semester_end(&mut self) -> Option<usize> {
        if self.students.is_empty() {
            return None;
        }
        Some(
            self.scholarship_department
                .calculate_and_assign(&mut self.students),
        )
    }
}
