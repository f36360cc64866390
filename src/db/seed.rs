//! Fixed sample rows inserted at store initialization.

use sqlx::sqlite::SqlitePool;
use tracing::info;

const SAMPLE_STUDENTS: [(i64, &str, &str, &str, i64, &str); 5] = [
    (1, "John", "Doe", "2000-01-01", 5, "Male"),
    (2, "Jane", "Smith", "2001-02-02", 7, "Female"),
    (3, "Alex", "Johnson", "1999-03-03", 8, "Male"),
    (4, "Eva", "Williams", "2002-04-04", 6, "Female"),
    (5, "Michael", "Brown", "2003-05-05", 4, "Male"),
];

const SAMPLE_CONTACTS: [(i64, &str, &str, &str, &str); 5] = [
    (1, "john@example.com", "1111111111", "123 Main St", "Guardian Doe"),
    (2, "jane@example.com", "2222222222", "456 Elm St", "Guardian Smith"),
    (3, "alex@example.com", "3333333333", "789 Oak St", "Guardian Johnson"),
    (4, "eva@example.com", "4444444444", "101 Pine St", "Guardian Williams"),
    (5, "michael@example.com", "5555555555", "202 Maple St", "Guardian Brown"),
];

/// Insert the sample students and their contacts in a single transaction.
pub async fn seed_sample_data(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;

    for (studentid, firstname, lastname, dateofbirth, grade, gender) in SAMPLE_STUDENTS {
        sqlx::query(
            r#"
            INSERT INTO student (studentid, firstname, lastname, dateofbirth, grade, gender)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(studentid)
        .bind(firstname)
        .bind(lastname)
        .bind(dateofbirth)
        .bind(grade)
        .bind(gender)
        .execute(&mut *tx)
        .await?;
    }

    for (studentid, email, mblnumber, address, guardianname) in SAMPLE_CONTACTS {
        sqlx::query(
            r#"
            INSERT INTO student_contact (studentid, email, mblnumber, address, guardianname)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(studentid)
        .bind(email)
        .bind(mblnumber)
        .bind(address)
        .bind(guardianname)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    info!("Seeded {} sample students", SAMPLE_STUDENTS.len());
    Ok(())
}
