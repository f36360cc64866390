//! Student CRUD operations.

use super::{student_from_row, Repository};
use crate::domain::{Student, StudentUpdate};

impl Repository {
    /// List every student. `studentid` is client-assigned and doubles as
    /// the rowid, so id order is the insertion order we can offer.
    pub async fn list_students(&self) -> Result<Vec<Student>, sqlx::Error> {
        let rows = sqlx::query(
            r#"
            SELECT studentid, firstname, lastname, dateofbirth, grade, gender
            FROM student
            ORDER BY studentid ASC
            "#,
        )
        .fetch_all(self.pool())
        .await?;

        rows.iter().map(student_from_row).collect()
    }

    /// Fetch a single student by id, if present.
    pub async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>, sqlx::Error> {
        let row = sqlx::query(
            r#"
            SELECT studentid, firstname, lastname, dateofbirth, grade, gender
            FROM student
            WHERE studentid = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool())
        .await?;

        row.as_ref().map(student_from_row).transpose()
    }

    /// Exact, case-sensitive match on both name fields.
    pub async fn find_students_by_name(
        &self,
        firstname: &str,
        lastname: &str,
    ) -> Result<Vec<Student>, sqlx::Error> {
        let rows = sqlx::query(
            r#"
            SELECT studentid, firstname, lastname, dateofbirth, grade, gender
            FROM student
            WHERE firstname = ? AND lastname = ?
            ORDER BY studentid ASC
            "#,
        )
        .bind(firstname)
        .bind(lastname)
        .fetch_all(self.pool())
        .await?;

        rows.iter().map(student_from_row).collect()
    }

    /// Insert a new student. A duplicate id or a failed domain check
    /// surfaces as a database constraint error.
    pub async fn create_student(&self, student: &Student) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO student (studentid, firstname, lastname, dateofbirth, grade, gender)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(student.studentid)
        .bind(&student.firstname)
        .bind(&student.lastname)
        .bind(student.dateofbirth)
        .bind(student.grade)
        .bind(student.gender.as_str())
        .execute(self.pool())
        .await?;

        Ok(())
    }

    /// Update an existing student. The primary key is never part of the
    /// update. Returns the updated row, or None if the id does not exist.
    pub async fn update_student(
        &self,
        id: i64,
        update: &StudentUpdate,
    ) -> Result<Option<Student>, sqlx::Error> {
        let result = sqlx::query(
            r#"
            UPDATE student
            SET firstname = ?, lastname = ?, dateofbirth = ?, grade = ?, gender = ?
            WHERE studentid = ?
            "#,
        )
        .bind(&update.firstname)
        .bind(&update.lastname)
        .bind(update.dateofbirth)
        .bind(update.grade)
        .bind(update.gender.as_str())
        .bind(id)
        .execute(self.pool())
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.get_student_by_id(id).await
    }

    /// Delete a student by id. Returns false if no row matched.
    pub async fn delete_student(&self, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM student WHERE studentid = ?")
            .bind(id)
            .execute(self.pool())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
