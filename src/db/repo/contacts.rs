//! Contact reads and the joined student view.
//!
//! Contacts have no HTTP mutation surface; `insert_contact` exists for
//! seeding-adjacent setup in tests.

use super::{student_from_row, Repository};
use crate::domain::{ContactDetails, StudentContact, StudentWithContact};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

fn contact_from_row(row: &SqliteRow) -> Result<StudentContact, sqlx::Error> {
    Ok(StudentContact {
        studentid: row.try_get("studentid")?,
        email: row.try_get("email")?,
        mblnumber: row.try_get("mblnumber")?,
        address: row.try_get("address")?,
        guardianname: row.try_get("guardianname")?,
    })
}

impl Repository {
    /// List every contact, in owning-student id order.
    pub async fn list_contacts(&self) -> Result<Vec<StudentContact>, sqlx::Error> {
        let rows = sqlx::query(
            r#"
            SELECT studentid, email, mblnumber, address, guardianname
            FROM student_contact
            ORDER BY studentid ASC
            "#,
        )
        .fetch_all(self.pool())
        .await?;

        rows.iter().map(contact_from_row).collect()
    }

    /// Fetch the contact belonging to a student, if present.
    pub async fn get_contact_by_student_id(
        &self,
        id: i64,
    ) -> Result<Option<StudentContact>, sqlx::Error> {
        let row = sqlx::query(
            r#"
            SELECT studentid, email, mblnumber, address, guardianname
            FROM student_contact
            WHERE studentid = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool())
        .await?;

        row.as_ref().map(contact_from_row).transpose()
    }

    /// Exact match on the mobile number.
    pub async fn find_contacts_by_mobile(
        &self,
        number: &str,
    ) -> Result<Vec<StudentContact>, sqlx::Error> {
        let rows = sqlx::query(
            r#"
            SELECT studentid, email, mblnumber, address, guardianname
            FROM student_contact
            WHERE mblnumber = ?
            ORDER BY studentid ASC
            "#,
        )
        .bind(number)
        .fetch_all(self.pool())
        .await?;

        rows.iter().map(contact_from_row).collect()
    }

    /// Insert a contact row. The schema enforces one contact per student
    /// and that the referenced student exists.
    pub async fn insert_contact(&self, contact: &StudentContact) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO student_contact (studentid, email, mblnumber, address, guardianname)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(contact.studentid)
        .bind(&contact.email)
        .bind(&contact.mblnumber)
        .bind(&contact.address)
        .bind(&contact.guardianname)
        .execute(self.pool())
        .await?;

        Ok(())
    }

    /// The student joined with their contact details, or None if the
    /// student itself does not exist. A student without a contact comes
    /// back with an empty contact field.
    pub async fn get_student_with_contact(
        &self,
        id: i64,
    ) -> Result<Option<StudentWithContact>, sqlx::Error> {
        let row = sqlx::query(
            r#"
            SELECT s.studentid, s.firstname, s.lastname, s.dateofbirth, s.grade, s.gender,
                   c.studentid AS contact_studentid,
                   c.email, c.mblnumber, c.address, c.guardianname
            FROM student s
            LEFT JOIN student_contact c ON c.studentid = s.studentid
            WHERE s.studentid = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool())
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let student = student_from_row(&row)?;
        let has_contact: Option<i64> = row.try_get("contact_studentid")?;
        let contact = match has_contact {
            Some(_) => Some(ContactDetails {
                email: row.try_get("email")?,
                mblnumber: row.try_get("mblnumber")?,
                address: row.try_get("address")?,
                guardianname: row.try_get("guardianname")?,
            }),
            None => None,
        };

        Ok(Some(StudentWithContact { student, contact }))
    }
}
