use rusqlite::Connection;
use std::path::{Path, PathBuf};

const SCHEMA: &str = "
    CREATE TABLE Address (address_id INTEGER PRIMARY KEY, street TEXT, city TEXT);
    CREATE TABLE Student (
        student_id TEXT PRIMARY KEY,
        first_name TEXT,
        last_name TEXT,
        email TEXT,
        address_id INTEGER
    );
    CREATE TABLE Teacher (teacher_id TEXT PRIMARY KEY, first_name TEXT, last_name TEXT);
    CREATE TABLE Course (course_code TEXT PRIMARY KEY, course_name TEXT, teacher_id TEXT);
    CREATE TABLE StudentCourse (student_id TEXT, course_code TEXT, is_complete INTEGER, mark INTEGER);
    CREATE TABLE Review (
        student_id TEXT,
        completeness INTEGER,
        efficiency INTEGER,
        style INTEGER,
        documentation INTEGER,
        review_text TEXT
    );

    INSERT INTO Address VALUES (1, '3 Harbour Lane', 'Cape Town');
    INSERT INTO Student VALUES ('ST0001', 'Thandi', 'Mokoena', 'thandi@example.com', 1);
    INSERT INTO Teacher VALUES ('TC0001', 'Grace', 'Hopper');
    INSERT INTO Course VALUES ('PY101', 'Python', 'TC0001');
    INSERT INTO Course VALUES ('SQL101', 'SQL', 'TC0001');
    INSERT INTO StudentCourse VALUES ('ST0001', 'PY101', 1, 72);
    INSERT INTO StudentCourse VALUES ('ST0001', 'SQL101', 1, 18);
    INSERT INTO Review VALUES ('ST0001', 5, 4, 4, 3, 'Solid work.');
";

/// Write the sample school database into `dir`
pub fn sample_database(dir: &Path) -> PathBuf {
    let path = dir.join("HyperionDev.db");
    let conn = Connection::open(&path).unwrap();
    conn.execute_batch(SCHEMA).unwrap();
    conn.close().unwrap();
    path
}
