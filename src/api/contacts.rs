use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;

use super::students::parse_student_id;
use super::AppState;
use crate::domain::{StudentContact, StudentWithContact};
use crate::error::AppError;

#[derive(Debug, Deserialize)]
pub struct MobileQuery {
    pub mobile: Option<String>,
}

pub async fn list_contacts(
    State(state): State<AppState>,
) -> Result<Json<Vec<StudentContact>>, AppError> {
    let contacts = state.repo.list_contacts().await?;
    Ok(Json(contacts))
}

pub async fn get_contact(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<StudentContact>, AppError> {
    let id = parse_student_id(&id)?;
    let contact = state
        .repo
        .get_contact_by_student_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Student contact not found".to_string()))?;
    Ok(Json(contact))
}

pub async fn find_by_mobile(
    State(state): State<AppState>,
    Query(params): Query<MobileQuery>,
) -> Result<Json<Vec<StudentContact>>, AppError> {
    let mobile = params
        .mobile
        .as_deref()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::BadRequest("Mobile number is required".to_string()))?;

    let contacts = state.repo.find_contacts_by_mobile(mobile).await?;
    if contacts.is_empty() {
        return Err(AppError::NotFound(
            "No student contact found with the provided mobile number".to_string(),
        ));
    }
    Ok(Json(contacts))
}

pub async fn get_student_with_contact(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<StudentWithContact>, AppError> {
    let id = parse_student_id(&id)?;
    let joined = state
        .repo
        .get_student_with_contact(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Student not found".to_string()))?;
    Ok(Json(joined))
}
