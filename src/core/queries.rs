//! Fixed SQL behind each console command
//!
//! Every user-supplied value is bound as a parameter; nothing typed at the
//! prompt is ever spliced into the statement text.

use crate::core::command::Command;

pub const ALL_STUDENTS: &str = "
    SELECT first_name, last_name
    FROM Student
";

pub const SUBJECTS_FOR_STUDENT: &str = "
    SELECT DISTINCT c.course_name
    FROM Student s
    JOIN StudentCourse sc ON s.student_id = sc.student_id
    JOIN Course c ON sc.course_code = c.course_code
    WHERE s.student_id = ?1
";

pub const ADDRESS_FOR_NAME: &str = "
    SELECT a.street, a.city
    FROM Student s
    JOIN Address a ON s.address_id = a.address_id
    WHERE s.first_name = ?1 AND s.last_name = ?2
";

pub const REVIEWS_FOR_STUDENT: &str = "
    SELECT completeness, efficiency, style, documentation, review_text
    FROM Review
    WHERE student_id = ?1
";

pub const COURSES_FOR_TEACHER: &str = "
    SELECT DISTINCT c.course_name
    FROM Teacher t
    JOIN Course c ON t.teacher_id = c.teacher_id
    WHERE t.teacher_id = ?1
";

pub const INCOMPLETE_ENROLLMENTS: &str = "
    SELECT s.student_id, s.first_name, s.last_name, s.email, c.course_name
    FROM Student s
    JOIN StudentCourse sc ON s.student_id = sc.student_id
    JOIN Course c ON sc.course_code = c.course_code
    WHERE sc.is_complete = 0
";

pub const LOW_MARKS: &str = "
    SELECT s.student_id, s.first_name, s.last_name, s.email, c.course_name, sc.mark
    FROM Student s
    JOIN StudentCourse sc ON s.student_id = sc.student_id
    JOIN Course c ON sc.course_code = c.course_code
    WHERE sc.is_complete = 1 AND sc.mark <= 30
";

/// A statement and the values bound to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuerySpec<'a> {
    pub sql: &'static str,
    pub params: Vec<&'a str>,
}

impl Command {
    /// The single query this command runs, or `None` for `Exit`
    pub fn query(&self) -> Option<QuerySpec<'_>> {
        let (sql, params) = match self {
            Command::Demo => (ALL_STUDENTS, vec![]),
            Command::ViewSubjects { student_id } => {
                (SUBJECTS_FOR_STUDENT, vec![student_id.as_str()])
            }
            Command::LookupAddress {
                first_name,
                last_name,
            } => (
                ADDRESS_FOR_NAME,
                vec![first_name.as_str(), last_name.as_str()],
            ),
            Command::ListReviews { student_id } => {
                (REVIEWS_FOR_STUDENT, vec![student_id.as_str()])
            }
            Command::ListCourses { teacher_id } => {
                (COURSES_FOR_TEACHER, vec![teacher_id.as_str()])
            }
            Command::ListIncomplete => (INCOMPLETE_ENROLLMENTS, vec![]),
            Command::ListFailing => (LOW_MARKS, vec![]),
            Command::Exit => return None,
        };
        Some(QuerySpec { sql, params })
    }
}
