//! Repository layer for database operations.
//!
//! This module provides the `Repository` struct for all database operations.
//! Methods are organized across submodules by entity:
//! - `students.rs` - Student CRUD operations
//! - `contacts.rs` - Contact reads and the joined student view

mod contacts;
mod students;

use crate::domain::{Gender, Student};
use sqlx::sqlite::{SqlitePool, SqliteRow};
use sqlx::Row;

/// Repository for database operations.
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Repository { pool }
    }

    pub(crate) fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// Decode a student row. Gender is constrained by the schema, so a value
/// outside the set is a decode failure, not a domain error.
pub(crate) fn student_from_row(row: &SqliteRow) -> Result<Student, sqlx::Error> {
    let gender: String = row.try_get("gender")?;
    let gender: Gender = gender
        .parse()
        .map_err(|e: String| sqlx::Error::Decode(e.into()))?;

    Ok(Student {
        studentid: row.try_get("studentid")?,
        firstname: row.try_get("firstname")?,
        lastname: row.try_get("lastname")?,
        dateofbirth: row.try_get("dateofbirth")?,
        grade: row.try_get("grade")?,
        gender,
    })
}
