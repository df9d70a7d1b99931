//! Console rendering of query results

use crate::core::{
    command::Command,
    store::{Row, RowSet, format_value},
};

fn cell(row: &Row, index: usize) -> String {
    row.get(index).map(format_value).unwrap_or_default()
}

/// Lines printed for a non-empty result of `command`
pub fn render(command: &Command, rows: &RowSet) -> Vec<String> {
    let mut lines = Vec::with_capacity(rows.len() + 1);

    if let Command::ListCourses { teacher_id } = command {
        lines.push(format!("Courses taught by teacher ID {teacher_id}:"));
    }

    for row in rows {
        match command {
            Command::Demo => lines.push(format!("{} {}", cell(row, 0), cell(row, 1))),
            Command::ViewSubjects { .. } => lines.push(format!("Subject: {}", cell(row, 0))),
            Command::LookupAddress { .. } => {
                lines.push(format!("Address: {}, {}", cell(row, 0), cell(row, 1)))
            }
            Command::ListReviews { .. } => {
                lines.push(format!(
                    "Completeness: {}, Efficiency: {}, Style: {}, Documentation: {}",
                    cell(row, 0),
                    cell(row, 1),
                    cell(row, 2),
                    cell(row, 3)
                ));
                lines.push(format!("Review: {}", cell(row, 4)));
                lines.push(String::new());
            }
            Command::ListCourses { .. } => lines.push(format!("Course: {}", cell(row, 0))),
            Command::ListIncomplete => lines.push(format!(
                "Student ID: {}, Name: {} {}, Email: {}, Course: {}",
                cell(row, 0),
                cell(row, 1),
                cell(row, 2),
                cell(row, 3),
                cell(row, 4)
            )),
            Command::ListFailing => lines.push(format!(
                "Student ID: {}, Name: {} {}, Email: {}, Course: {}, Mark: {}",
                cell(row, 0),
                cell(row, 1),
                cell(row, 2),
                cell(row, 3),
                cell(row, 4),
                cell(row, 5)
            )),
            Command::Exit => {}
        }
    }

    lines
}

/// Message printed when `command` found nothing
pub fn empty_message(command: &Command) -> String {
    match command {
        Command::Demo => "No students were found.".to_string(),
        Command::ViewSubjects { .. } => "No subjects were found for this student ID.".to_string(),
        Command::LookupAddress { .. } => "No address found for this name.".to_string(),
        Command::ListReviews { .. } => "No reviews were found for this student ID.".to_string(),
        Command::ListCourses { teacher_id } => {
            format!("No courses found for teacher ID {teacher_id}.")
        }
        Command::ListIncomplete => "No students with incomplete courses were found.".to_string(),
        Command::ListFailing => {
            "No students with completed courses and low scores found.".to_string()
        }
        Command::Exit => String::new(),
    }
}
