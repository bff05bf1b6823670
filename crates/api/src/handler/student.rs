use crate::{
    abstract_trait::student::service::{DynStudentCommandService, DynStudentQueryService},
    domain::StudentUploadForm,
    middleware::{multipart::StudentMultipart, path::RecordId},
    state::AppState,
};
use axum::{Json, extract::Extension, response::IntoResponse, routing::get};
use shared::{
    domain::responses::{MessageResponse, StudentResponse},
    errors::{ErrorResponse, HttpError},
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/student",
    tag = "Student",
    responses(
        (status = 200, description = "Every student row", body = Vec<StudentResponse>),
        (status = 500, description = "Database error", body = ErrorResponse)
    )
)]
pub async fn get_students(
    Extension(service): Extension<DynStudentQueryService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all().await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/student/{id}",
    tag = "Student",
    params(("id" = i32, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Student details", body = StudentResponse),
        (status = 404, description = "Student not found", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    )
)]
pub async fn get_student(
    Extension(service): Extension<DynStudentQueryService>,
    RecordId(id): RecordId,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_id(id).await?;
    Ok(Json(response))
}

#[utoipa::path(
    post,
    path = "/student",
    tag = "Student",
    request_body(content = StudentUploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Student created", body = StudentResponse),
        (status = 400, description = "Malformed body or validation failure", body = ErrorResponse),
        (status = 413, description = "Upload too large", body = ErrorResponse),
        (status = 500, description = "Database or storage error", body = ErrorResponse)
    )
)]
pub async fn create_student(
    Extension(service): Extension<DynStudentCommandService>,
    StudentMultipart(form): StudentMultipart,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create_student(form).await?;
    Ok(Json(response))
}

#[utoipa::path(
    put,
    path = "/student/{id}",
    tag = "Student",
    params(("id" = i32, Path, description = "Student ID")),
    request_body(content = StudentUploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Student updated", body = MessageResponse),
        (status = 400, description = "Malformed body or validation failure", body = ErrorResponse),
        (status = 404, description = "Student not found", body = ErrorResponse),
        (status = 413, description = "Upload too large", body = ErrorResponse),
        (status = 500, description = "Database or storage error", body = ErrorResponse)
    )
)]
pub async fn update_student(
    Extension(service): Extension<DynStudentCommandService>,
    RecordId(id): RecordId,
    StudentMultipart(form): StudentMultipart,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.update_student(id, form).await?;
    Ok(Json(response))
}

#[utoipa::path(
    delete,
    path = "/student/{id}",
    tag = "Student",
    params(("id" = i32, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Student deleted", body = MessageResponse),
        (status = 404, description = "Student not found", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    )
)]
pub async fn delete_student(
    Extension(service): Extension<DynStudentCommandService>,
    RecordId(id): RecordId,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.delete_student(id).await?;
    Ok(Json(response))
}

pub fn student_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/student", get(get_students).post(create_student))
        .route(
            "/student/{id}",
            get(get_student).put(update_student).delete(delete_student),
        )
        .layer(Extension(app_state.di_container.student_query.clone()))
        .layer(Extension(app_state.di_container.student_command.clone()))
}
