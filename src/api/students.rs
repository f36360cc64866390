use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;

use super::AppState;
use crate::domain::{grade_in_range, Gender, Student, StudentUpdate, GRADE_MAX, GRADE_MIN};
use crate::error::AppError;

#[derive(Debug, Deserialize)]
pub struct NameQuery {
    pub firstname: Option<String>,
    pub lastname: Option<String>,
}

/// Create payload. All six fields are required; presence is validated
/// here rather than by serde so a missing field yields the documented
/// 400 body instead of a deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct CreateStudentPayload {
    pub studentid: Option<i64>,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub dateofbirth: Option<NaiveDate>,
    pub grade: Option<i64>,
    pub gender: Option<String>,
}

/// Update payload. There is no `studentid` field: the primary key is
/// immutable, and any id supplied in the body is ignored.
#[derive(Debug, Deserialize)]
pub struct UpdateStudentPayload {
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub dateofbirth: Option<NaiveDate>,
    pub grade: Option<i64>,
    pub gender: Option<String>,
}

pub async fn list_students(State(state): State<AppState>) -> Result<Json<Vec<Student>>, AppError> {
    let students = state.repo.list_students().await?;
    Ok(Json(students))
}

pub async fn get_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Student>, AppError> {
    let id = parse_student_id(&id)?;
    let student = state
        .repo
        .get_student_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Student not found".to_string()))?;
    Ok(Json(student))
}

pub async fn find_students_by_name(
    State(state): State<AppState>,
    Query(params): Query<NameQuery>,
) -> Result<Json<Vec<Student>>, AppError> {
    let (firstname, lastname) = match (
        params.firstname.as_deref().filter(|s| !s.is_empty()),
        params.lastname.as_deref().filter(|s| !s.is_empty()),
    ) {
        (Some(f), Some(l)) => (f, l),
        _ => {
            return Err(AppError::BadRequest(
                "Both firstname and lastname are required".to_string(),
            ))
        }
    };

    let students = state.repo.find_students_by_name(firstname, lastname).await?;
    if students.is_empty() {
        return Err(AppError::NotFound(
            "Student not found with given firstname and lastname".to_string(),
        ));
    }
    Ok(Json(students))
}

pub async fn create_student(
    State(state): State<AppState>,
    Json(payload): Json<CreateStudentPayload>,
) -> Result<(StatusCode, Json<Student>), AppError> {
    let student = validate_create(payload)?;
    state.repo.create_student(&student).await?;
    Ok((StatusCode::CREATED, Json(student)))
}

pub async fn update_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateStudentPayload>,
) -> Result<Json<Student>, AppError> {
    let id = parse_student_id(&id)?;
    let update = validate_update(payload)?;
    let student = state
        .repo
        .update_student(id, &update)
        .await?
        .ok_or_else(|| AppError::NotFound("Student not found".to_string()))?;
    Ok(Json(student))
}

pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let id = parse_student_id(&id)?;
    if !state.repo.delete_student(id).await? {
        return Err(AppError::NotFound("Student not found".to_string()));
    }
    Ok(Json(json!({"message": "Student deleted successfully"})))
}

pub(crate) fn parse_student_id(id: &str) -> Result<i64, AppError> {
    id.parse::<i64>()
        .map_err(|_| AppError::BadRequest("Invalid ID format".to_string()))
}

fn validate_create(payload: CreateStudentPayload) -> Result<Student, AppError> {
    let missing = || AppError::BadRequest("All fields are required".to_string());

    let studentid = payload.studentid.ok_or_else(missing)?;
    let firstname = payload.firstname.filter(|s| !s.is_empty()).ok_or_else(missing)?;
    let lastname = payload.lastname.filter(|s| !s.is_empty()).ok_or_else(missing)?;
    let dateofbirth = payload.dateofbirth.ok_or_else(missing)?;
    let grade = payload.grade.ok_or_else(missing)?;
    let gender = payload.gender.filter(|s| !s.is_empty()).ok_or_else(missing)?;

    let (grade, gender) = check_domain(grade, &gender)?;

    Ok(Student {
        studentid,
        firstname,
        lastname,
        dateofbirth,
        grade,
        gender,
    })
}

fn validate_update(payload: UpdateStudentPayload) -> Result<StudentUpdate, AppError> {
    let missing = || AppError::BadRequest("All fields are required".to_string());

    let firstname = payload.firstname.filter(|s| !s.is_empty()).ok_or_else(missing)?;
    let lastname = payload.lastname.filter(|s| !s.is_empty()).ok_or_else(missing)?;
    let dateofbirth = payload.dateofbirth.ok_or_else(missing)?;
    let grade = payload.grade.ok_or_else(missing)?;
    let gender = payload.gender.filter(|s| !s.is_empty()).ok_or_else(missing)?;

    let (grade, gender) = check_domain(grade, &gender)?;

    Ok(StudentUpdate {
        firstname,
        lastname,
        dateofbirth,
        grade,
        gender,
    })
}

/// Application-level domain checks, mirroring the store constraints.
fn check_domain(grade: i64, gender: &str) -> Result<(i64, Gender), AppError> {
    if !grade_in_range(grade) {
        return Err(AppError::Conflict(format!(
            "grade must be between {} and {}",
            GRADE_MIN, GRADE_MAX
        )));
    }
    let gender: Gender = gender.parse().map_err(AppError::Conflict)?;
    Ok((grade, gender))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_payload() -> CreateStudentPayload {
        CreateStudentPayload {
            studentid: Some(6),
            firstname: Some("New".to_string()),
            lastname: Some("Student".to_string()),
            dateofbirth: NaiveDate::from_ymd_opt(2004, 6, 6),
            grade: Some(3),
            gender: Some("Male".to_string()),
        }
    }

    #[test]
    fn test_parse_student_id() {
        assert_eq!(parse_student_id("42").unwrap(), 42);
        assert!(parse_student_id("abc").is_err());
        assert!(parse_student_id("4.2").is_err());
        assert!(parse_student_id("").is_err());
    }

    #[test]
    fn test_validate_create_accepts_full_payload() {
        let student = validate_create(full_payload()).unwrap();
        assert_eq!(student.studentid, 6);
        assert_eq!(student.gender, Gender::Male);
    }

    #[test]
    fn test_validate_create_rejects_missing_field() {
        let mut payload = full_payload();
        payload.lastname = None;
        assert!(matches!(
            validate_create(payload),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn test_validate_create_treats_empty_string_as_missing() {
        let mut payload = full_payload();
        payload.firstname = Some(String::new());
        assert!(matches!(
            validate_create(payload),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn test_validate_create_rejects_out_of_range_grade() {
        let mut payload = full_payload();
        payload.grade = Some(9);
        assert!(matches!(
            validate_create(payload),
            Err(AppError::Conflict(_))
        ));
    }

    #[test]
    fn test_validate_create_rejects_unknown_gender() {
        let mut payload = full_payload();
        payload.gender = Some("Unknown".to_string());
        assert!(matches!(
            validate_create(payload),
            Err(AppError::Conflict(_))
        ));
    }
}
