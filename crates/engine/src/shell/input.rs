//! Prompt helpers and person pickers for the menu shell.

use std::io::{self, Write};

use campus_domain::{StudentId, TeacherId, University};

/// Print a prompt and read one trimmed line from stdin.
pub fn prompt(label: &str) -> io::Result<String> {
    print!("{}", label);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Keep asking until the user enters an integer within `min..=max`.
pub fn prompt_u32(label: &str, min: u32, max: u32) -> io::Result<u32> {
    loop {
        let raw = prompt(label)?;
        match raw.parse::<u32>() {
            Ok(value) if (min..=max).contains(&value) => return Ok(value),
            Ok(_) => println!("The number must be between {} and {}.", min, max),
            Err(_) => println!("Please enter a number."),
        }
    }
}

/// Pick a student by name substring, disambiguating with a numbered list.
pub fn select_student(uni: &University) -> io::Result<Option<StudentId>> {
    let query = prompt("Student name (partial match allowed): ")?;
    if query.is_empty() {
        println!("Empty input.");
        return Ok(None);
    }

    let query = query.to_lowercase();
    let found: Vec<_> = uni
        .students()
        .iter()
        .filter(|s| s.full_name().as_str().to_lowercase().contains(&query))
        .collect();

    match found.len() {
        0 => {
            println!("Student not found.");
            Ok(None)
        }
        1 => Ok(Some(found[0].id())),
        count => {
            println!("Found {} matches:", count);
            for (i, student) in found.iter().enumerate() {
                let specialty = student
                    .curriculum()
                    .and_then(|id| uni.curriculum(id))
                    .map(|c| c.specialty_name().to_string())
                    .unwrap_or_else(|| "no specialty".to_string());
                println!("{}. {} ({})", i + 1, student.full_name(), specialty);
            }
            let choice = prompt_u32("Pick a number: ", 1, count as u32)?;
            Ok(Some(found[choice as usize - 1].id()))
        }
    }
}

/// Pick a teacher by name substring, disambiguating with a numbered list.
pub fn select_teacher(uni: &University) -> io::Result<Option<TeacherId>> {
    let query = prompt("Teacher name (partial match allowed): ")?;
    if query.is_empty() {
        println!("Empty input.");
        return Ok(None);
    }

    let query = query.to_lowercase();
    let found: Vec<_> = uni
        .teachers()
        .iter()
        .filter(|t| t.full_name().as_str().to_lowercase().contains(&query))
        .collect();

    match found.len() {
        0 => {
            println!("Teacher not found.");
            Ok(None)
        }
        1 => Ok(Some(found[0].id())),
        count => {
            println!("Found {} matches:", count);
            for (i, teacher) in found.iter().enumerate() {
                let degree = teacher
                    .degree()
                    .map(|d| d.to_string())
                    .unwrap_or_else(|| "no degree".to_string());
                println!("{}. {} ({})", i + 1, teacher.full_name(), degree);
            }
            let choice = prompt_u32("Pick a number: ", 1, count as u32)?;
            Ok(Some(found[choice as usize - 1].id()))
        }
    }
}
