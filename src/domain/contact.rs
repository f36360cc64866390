//! Contact record tied one-to-one to a student.

use super::Student;
use serde::{Deserialize, Serialize};

/// A contact row. All fields except the owning student id are optional;
/// the mobile number is capped at 10 characters by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentContact {
    pub studentid: i64,
    pub email: Option<String>,
    pub mblnumber: Option<String>,
    pub address: Option<String>,
    pub guardianname: Option<String>,
}

/// The contact fields exposed on the joined student view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetails {
    pub email: Option<String>,
    pub mblnumber: Option<String>,
    pub address: Option<String>,
    pub guardianname: Option<String>,
}

/// A student together with their contact details, if any exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentWithContact {
    #[serde(flatten)]
    pub student: Student,
    pub contact: Option<ContactDetails>,
}
