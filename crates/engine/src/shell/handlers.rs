//! One handler per menu item.
//!
//! Handlers collect input, call the aggregate, and report the outcome.
//! Domain errors bubble up to the menu loop, which reports them by kind
//! and carries on.

use campus_domain::{Book, DomainError, StudentId, SubjectName, TeacherDegree, University};
use colored::Colorize;

use crate::infrastructure::random::SystemRandom;
use crate::shell::input::{prompt, prompt_u32, select_student, select_teacher};
use crate::shell::ShellError;

pub fn add_student(uni: &mut University) -> Result<(), ShellError> {
    println!("\n[Enroll a student]");
    let name = prompt("Full name: ")?;
    let age = prompt_u32("Age: ", 16, 100)?;

    let available: Vec<&str> = uni
        .curricula()
        .iter()
        .map(|c| c.specialty_name().as_str())
        .collect();
    println!("Available curricula: {}", available.join(", "));
    let curriculum = prompt("Curriculum name: ")?;

    let id = uni.enroll_student(&name, age as u8, &curriculum)?;
    let student = uni.student(id).ok_or_else(|| DomainError::not_found("Student", id.to_string()))?;
    println!("{}", format!("Student {} enrolled.", student.full_name()).green());
    Ok(())
}

pub fn remove_student(uni: &mut University) -> Result<(), ShellError> {
    println!("\n[Expel a student]");
    if let Some(id) = select_student(uni)? {
        let name = uni
            .student(id)
            .map(|s| s.full_name().to_string())
            .unwrap_or_default();
        if uni.expel_student(id) {
            println!("{}", format!("Student {} expelled.", name).yellow());
        } else {
            println!("Student {} is not on the roster.", name);
        }
    }
    Ok(())
}

pub fn add_teacher(uni: &mut University) -> Result<(), ShellError> {
    println!("\n[Hire a teacher]");
    let name = prompt("Full name: ")?;
    let age = prompt_u32("Age: ", 20, 100)?;

    println!("Degrees:");
    let degrees = TeacherDegree::all();
    for (i, degree) in degrees.iter().enumerate() {
        println!("{}. {}", i + 1, degree);
    }
    let pick = prompt_u32("Degree number: ", 1, degrees.len() as u32)?;
    let degree = degrees[pick as usize - 1];

    let raw = prompt("Subjects (comma separated): ")?;
    let subjects = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(SubjectName::new)
        .collect::<Result<Vec<_>, _>>()?;

    let id = uni.enroll_teacher(&name, age as u8, Some(degree), subjects)?;
    let teacher = uni.teacher(id).ok_or_else(|| DomainError::not_found("Teacher", id.to_string()))?;
    println!(
        "{}",
        format!("{} {} joined the faculty.", degree, teacher.full_name()).green()
    );
    Ok(())
}

pub fn remove_teacher(uni: &mut University) -> Result<(), ShellError> {
    println!("\n[Dismiss a teacher]");
    if let Some(id) = select_teacher(uni)? {
        let name = uni
            .teacher(id)
            .map(|t| t.full_name().to_string())
            .unwrap_or_default();
        if uni.fire_teacher(id) {
            println!("{}", format!("Teacher {} dismissed.", name).yellow());
        } else {
            println!("Teacher {} is not on the staff list.", name);
        }
    }
    Ok(())
}

pub fn add_curriculum(uni: &mut University) -> Result<(), ShellError> {
    println!("\n[Create a curriculum]");
    let name = prompt("Specialty name: ")?;
    uni.add_curriculum(&name)?;
    println!("{}", format!("Curriculum '{}' created.", name.trim()).green());
    Ok(())
}

pub fn add_subject_to_curriculum(uni: &mut University) -> Result<(), ShellError> {
    println!("\n[Add a subject to a curriculum]");
    let curriculum = prompt("Curriculum name: ")?;
    let subject = prompt("New subject name: ")?;
    if uni.add_subject_to_curriculum(&curriculum, &subject)? {
        println!(
            "{}",
            format!("Subject '{}' added to '{}'.", subject.trim(), curriculum.trim()).green()
        );
    } else {
        println!("Subject '{}' is already required.", subject.trim());
    }
    Ok(())
}

pub fn add_classroom(uni: &mut University) -> Result<(), ShellError> {
    println!("\n[Register a classroom]");
    let number = prompt_u32("Room number: ", 1, 9999)?;
    let capacity = prompt_u32("Capacity: ", 1, 500)?;
    uni.add_classroom(number, capacity)?;
    println!(
        "{}",
        format!("Classroom {} (capacity {}) registered.", number, capacity).green()
    );
    Ok(())
}

pub fn conduct_exam(uni: &mut University) -> Result<(), ShellError> {
    println!("\n[Conduct an exam]");
    let subject = SubjectName::new(prompt("Subject: ")?)?;

    let (teacher_id, teacher_name) = uni
        .teacher_for_subject(&subject)
        .map(|t| (t.id(), t.full_name().to_string()))
        .ok_or_else(|| DomainError::enrollment(format!("No teacher for subject '{}'", subject)))?;
    let room = uni
        .free_classroom()
        .map(|c| c.number())
        .ok_or_else(|| DomainError::state("All classrooms are occupied"))?;
    let roster: Vec<StudentId> = uni
        .students_requiring(&subject)
        .into_iter()
        .map(|s| s.id())
        .collect();
    if roster.is_empty() {
        return Err(DomainError::enrollment(format!(
            "No students have '{}' in their curriculum",
            subject
        ))
        .into());
    }

    println!(
        "{} will examine {} students in room {}.",
        teacher_name,
        roster.len(),
        room
    );
    let exam = uni.create_exam(subject.clone(), teacher_id, room, roster.clone())?;
    if let Some(scheduled) = uni.exam(exam) {
        println!(
            "\nThe {} exam begins ({})\n",
            subject,
            scheduled.date().format("%Y-%m-%d")
        );
    }

    prompt("Press Enter to start the exam")?;
    let failed = uni.conduct_exam(exam, &mut SystemRandom::new())?;

    for id in &roster {
        if let Some(student) = uni.student(*id) {
            if let Some(grade) = student.record_book().get(&subject) {
                let line = format!("{} - grade {}", student.full_name(), grade);
                if failed.contains(id) {
                    println!("{}", line.red());
                } else {
                    println!("{}", line);
                }
            }
        }
    }

    if failed.is_empty() {
        println!("{}", "Everyone passed the exam.".green());
    } else {
        println!("\nExpelling {} failing students:", failed.len());
        for id in failed {
            let name = uni
                .student(id)
                .map(|s| s.full_name().to_string())
                .unwrap_or_default();
            if uni.expel_student(id) {
                println!("{}", format!("Student {} expelled for poor performance.", name).yellow());
            }
        }
    }
    Ok(())
}

pub fn lend_book(uni: &mut University) -> Result<(), ShellError> {
    println!("\n[Lend a book]");
    let Some(student) = select_student(uni)? else {
        return Ok(());
    };
    let title = prompt("Book title: ")?;

    // An unknown title gets stocked on the fly, three copies.
    if uni.library().copies_of(&title).is_none() {
        println!("New title, adding 3 copies to the stock...");
        uni.add_book(Book::new(title.clone(), "Unknown author"), 3);
    }

    uni.lend_book(student, &title)?;
    let name = uni
        .student(student)
        .map(|s| s.full_name().to_string())
        .unwrap_or_default();
    println!("{}", format!("Book '{}' lent to {}.", title, name).green());
    Ok(())
}

pub fn return_book(uni: &mut University) -> Result<(), ShellError> {
    println!("\n[Return a book]");
    let Some(student) = select_student(uni)? else {
        return Ok(());
    };
    let title = prompt("Book title: ")?;
    uni.accept_return(student, &title)?;
    let name = uni
        .student(student)
        .map(|s| s.full_name().to_string())
        .unwrap_or_default();
    println!("{}", format!("{} returned '{}'.", name, title).green());
    Ok(())
}

pub fn add_book(uni: &mut University) -> Result<(), ShellError> {
    println!("\n[Add a book to the stock]");
    let title = prompt("Title: ")?;
    let author = prompt("Author: ")?;
    let quantity = prompt_u32("Number of copies: ", 1, 1000)?;

    // Merge onto an existing line regardless of title casing.
    if let Some(existing) = uni.library().find_by_title_ignore_case(&title).cloned() {
        let existing_title = existing.title().to_string();
        uni.add_book(existing, quantity);
        println!(
            "{}",
            format!("Added {} copies to existing '{}'.", quantity, existing_title).green()
        );
    } else {
        uni.add_book(Book::new(title.clone(), author), quantity);
        println!(
            "{}",
            format!("New book '{}' added, {} copies.", title, quantity).green()
        );
    }
    Ok(())
}

pub fn process_semester_end(uni: &mut University) -> Result<(), ShellError> {
    println!("\n[Close the semester (scholarship run)]");
    match uni.process_semester_end() {
        None => println!("No students to assign scholarships to."),
        Some(qualified) => {
            for student in uni.students() {
                println!(
                    "{} - scholarship {:.2}",
                    student.full_name(),
                    student.scholarship_amount()
                );
            }
            println!(
                "{}",
                format!("Scholarships assigned; {} students qualified.", qualified).green()
            );
        }
    }
    Ok(())
}
