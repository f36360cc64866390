//! Domain types shared by the repositories and the HTTP layer.

pub mod contact;
pub mod student;

pub use contact::{ContactDetails, StudentContact, StudentWithContact};
pub use student::{grade_in_range, Gender, Student, StudentUpdate, GRADE_MAX, GRADE_MIN};
