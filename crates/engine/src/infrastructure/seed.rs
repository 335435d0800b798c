//! Seed data for a first run or a corrupt snapshot.
//!
//! Built entirely through the aggregate's public operations so the seed
//! passes the same validation as interactive input.

use campus_domain::{Book, DomainError, SubjectName, TeacherDegree, University};

/// The default university used when no snapshot can be loaded.
pub fn default_university() -> University {
    build().expect("seed data is valid")
}

fn build() -> Result<University, DomainError> {
    let mut uni = University::new("BSU");

    let curricula = [
        (
            "Software Engineering",
            ["Databases", "Circuit Theory", "OOP", "Algorithms"],
        ),
        (
            "Artificial Intelligence",
            ["Machine Learning", "Intelligent Systems", "Logic", "Algorithms"],
        ),
        (
            "Applied Mathematics",
            ["Discrete Math", "Computer Graphics", "OOP Design", "Algorithms"],
        ),
    ];
    for (name, subjects) in curricula {
        uni.add_curriculum(name)?;
        for subject in subjects {
            uni.add_subject_to_curriculum(name, subject)?;
        }
    }

    for (number, capacity) in [(114, 30), (312, 55), (503, 25), (408, 20), (721, 50)] {
        uni.add_classroom(number, capacity)?;
    }

    let books = [
        ("War and Peace", "Leo Tolstoy", 5),
        ("Crime and Punishment", "Fyodor Dostoevsky", 3),
        ("The Master and Margarita", "Mikhail Bulgakov", 2),
        ("1984", "George Orwell", 4),
    ];
    for (title, author, copies) in books {
        uni.add_book(Book::new(title, author), copies);
    }

    let students = [
        ("Ivan Petrov", 20, "Software Engineering"),
        ("Petr Sidorov", 22, "Artificial Intelligence"),
        ("Sidor Ivanov", 19, "Applied Mathematics"),
        ("Andrei Andreev", 18, "Artificial Intelligence"),
        ("Denis Denisov", 27, "Software Engineering"),
        ("Maksim Maksimov", 20, "Artificial Intelligence"),
        ("Sergei Sergeev", 18, "Applied Mathematics"),
        ("Anton Antonov", 21, "Artificial Intelligence"),
        ("Pavel Pavlov", 22, "Applied Mathematics"),
        ("Zakhar Zakharov", 18, "Software Engineering"),
        ("Aleksei Alekseev", 19, "Software Engineering"),
        ("Vasily Vasiliev", 21, "Artificial Intelligence"),
    ];
    for (name, age, curriculum) in students {
        uni.enroll_student(name, age, curriculum)?;
    }

    let teachers = [
        (
            "Elena Gukova",
            56,
            TeacherDegree::AssociateProfessor,
            vec!["Databases", "Machine Learning", "Logic"],
        ),
        (
            "Sergei Petrov",
            43,
            TeacherDegree::SeniorLecturer,
            vec!["Machine Learning", "Logic"],
        ),
        (
            "Anna Ronina",
            45,
            TeacherDegree::DoctorOfSciences,
            vec!["OOP", "OOP Design", "Intelligent Systems", "Algorithms"],
        ),
        (
            "Elena Andreeva",
            39,
            TeacherDegree::CandidateOfSciences,
            vec!["Intelligent Systems", "Algorithms", "Databases", "Discrete Math"],
        ),
        (
            "Olga Nord",
            25,
            TeacherDegree::Lecturer,
            vec!["Circuit Theory", "Computer Graphics"],
        ),
        (
            "Konstantin Asmanov",
            41,
            TeacherDegree::SeniorLecturer,
            vec!["Circuit Theory", "OOP Design", "OOP"],
        ),
        (
            "Mikhail Kondratyev",
            72,
            TeacherDegree::Professor,
            vec!["Computer Graphics", "Discrete Math", "Algorithms"],
        ),
    ];
    for (name, age, degree, subjects) in teachers {
        let subjects = subjects
            .into_iter()
            .map(SubjectName::new)
            .collect::<Result<Vec<_>, _>>()?;
        uni.enroll_teacher(name, age, Some(degree), subjects)?;
    }

    tracing::debug!(
        students = uni.students().len(),
        teachers = uni.teachers().len(),
        "seed university built"
    );
    Ok(uni)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_builds_a_populated_university() {
        let uni = default_university();
        assert_eq!(uni.name(), "BSU");
        assert_eq!(uni.curricula().len(), 3);
        assert_eq!(uni.classrooms().len(), 5);
        assert_eq!(uni.students().len(), 12);
        assert_eq!(uni.teachers().len(), 7);
        assert_eq!(uni.library().stock().len(), 4);
    }

    #[test]
    fn every_seeded_subject_has_a_teacher() {
        let uni = default_university();
        for curriculum in uni.curricula() {
            for subject in curriculum.required_subjects() {
                assert!(
                    uni.teacher_for_subject(subject).is_some(),
                    "no teacher for {}",
                    subject
                );
            }
        }
    }

    #[test]
    fn every_seeded_student_has_a_resolvable_curriculum() {
        let uni = default_university();
        for student in uni.students() {
            let id = student.curriculum().expect("seeded students are enrolled");
            assert!(uni.curriculum(id).is_some());
        }
    }
}
