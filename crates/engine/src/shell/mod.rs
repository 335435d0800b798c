//! Interactive menu shell.
//!
//! A thin collaborator around the domain core: it collects input, invokes
//! aggregate operations, and reports outcomes. Domain errors are caught
//! per iteration and reported by kind; they never abort the loop.

mod handlers;
mod input;

use campus_domain::{DomainError, University};
use colored::Colorize;
use thiserror::Error;

use crate::infrastructure::storage::SnapshotStore;

/// Failures a menu handler can produce.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Input error: {0}")]
    Io(#[from] std::io::Error),
}

const MENU: &str = "\nMenu:
1. Enroll a student
2. Expel a student
3. Hire a teacher
4. Dismiss a teacher
5. Create a curriculum
6. Add a subject to a curriculum
7. Register a classroom
8. Conduct an exam
9. Library: lend a book
10. Library: return a book
11. Library: add a book to the stock
12. Close the semester (scholarship run)
0. Save and exit";

/// Run the menu loop until the user saves and exits.
///
/// Domain errors are reported and swallowed; I/O and storage failures
/// propagate to the caller.
pub fn run(uni: &mut University, store: &SnapshotStore) -> anyhow::Result<()> {
    loop {
        println!(
            "\n{} | Students: {}, Teachers: {}, Curricula: {}",
            uni.name().bold(),
            uni.students().len(),
            uni.teachers().len(),
            uni.curricula().len()
        );
        println!("{}", MENU);

        let choice = input::prompt("Your choice: ")?;
        let result = match choice.as_str() {
            "1" => handlers::add_student(uni),
            "2" => handlers::remove_student(uni),
            "3" => handlers::add_teacher(uni),
            "4" => handlers::remove_teacher(uni),
            "5" => handlers::add_curriculum(uni),
            "6" => handlers::add_subject_to_curriculum(uni),
            "7" => handlers::add_classroom(uni),
            "8" => {
                if uni.students().is_empty() {
                    println!("No students to examine.");
                    Ok(())
                } else {
                    handlers::conduct_exam(uni)
                }
            }
            "9" => handlers::lend_book(uni),
            "10" => handlers::return_book(uni),
            "11" => handlers::add_book(uni),
            "12" => handlers::process_semester_end(uni),
            "0" => {
                println!("\n[Save and exit]");
                store.save(uni)?;
                println!("Snapshot saved to '{}'.", store.path().display());
                return Ok(());
            }
            _ => {
                println!("Invalid choice, try again.");
                Ok(())
            }
        };

        match result {
            Ok(()) => {}
            Err(ShellError::Domain(err)) => report(&err),
            Err(ShellError::Io(err)) => return Err(err.into()),
        }
    }
}

fn report(err: &DomainError) {
    let kind = match err {
        DomainError::Validation(_) => "Input error",
        DomainError::Enrollment(_) => "Enrollment error",
        DomainError::Resource(_) => "Resource error",
        DomainError::State(_) => "State error",
        DomainError::NotFound { .. } => "Lookup error",
    };
    println!("{} {}", format!("[{}]", kind).red().bold(), err);
}
