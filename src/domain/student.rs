//! Student record and its field-level domain checks.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Lowest grade accepted by the school.
pub const GRADE_MIN: i64 = 1;
/// Highest grade accepted by the school.
pub const GRADE_MAX: i64 = 8;

/// Whether a grade value falls inside the accepted range.
pub fn grade_in_range(grade: i64) -> bool {
    (GRADE_MIN..=GRADE_MAX).contains(&grade)
}

/// Gender as stored in the student table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl std::str::FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Male" => Ok(Gender::Male),
            "Female" => Ok(Gender::Female),
            other => Err(format!("gender must be Male or Female, got {}", other)),
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A full student row. `studentid` is client-assigned and immutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub studentid: i64,
    pub firstname: String,
    pub lastname: String,
    pub dateofbirth: NaiveDate,
    pub grade: i64,
    pub gender: Gender,
}

/// Update payload for an existing student. The primary key is not part
/// of the update and is never modified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentUpdate {
    pub firstname: String,
    pub lastname: String,
    pub dateofbirth: NaiveDate,
    pub grade: i64,
    pub gender: Gender,
}
