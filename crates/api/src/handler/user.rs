use crate::{
    abstract_trait::user::service::{DynUserCommandService, DynUserQueryService},
    middleware::{path::RecordId, validate::SimpleValidatedJson},
    state::AppState,
};
use axum::{
    Json,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use shared::{
    domain::{
        requests::user::{CreateUserRequest, UpdateUserRequest},
        responses::{ApiResponse, MessageResponse, UserResponse},
    },
    errors::{ErrorResponse, HttpError},
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    post,
    path = "/users",
    tag = "User",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = ApiResponse<UserResponse>),
        (status = 400, description = "Malformed body or validation failure", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    )
)]
pub async fn create_user(
    Extension(service): Extension<DynUserCommandService>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateUserRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create_user(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    get,
    path = "/users",
    tag = "User",
    responses(
        (status = 200, description = "Every user row", body = Vec<UserResponse>),
        (status = 500, description = "Database error", body = ErrorResponse)
    )
)]
pub async fn get_users(
    Extension(service): Extension<DynUserQueryService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all().await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/users/{userid}",
    tag = "User",
    params(("userid" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User details", body = UserResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    )
)]
pub async fn get_user(
    Extension(service): Extension<DynUserQueryService>,
    RecordId(userid): RecordId,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_id(userid).await?;
    Ok(Json(response))
}

#[utoipa::path(
    put,
    path = "/users/{userid}",
    tag = "User",
    params(("userid" = i32, Path, description = "User ID")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "Request echoed with userid", body = UpdateUserRequest),
        (status = 400, description = "Malformed body or validation failure", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    )
)]
pub async fn update_user(
    Extension(service): Extension<DynUserCommandService>,
    RecordId(userid): RecordId,
    SimpleValidatedJson(mut body): SimpleValidatedJson<UpdateUserRequest>,
) -> Result<impl IntoResponse, HttpError> {
    body.userid = Some(userid);
    let response = service.update_user(&body).await?;
    Ok(Json(response))
}

#[utoipa::path(
    delete,
    path = "/users/{userid}",
    tag = "User",
    params(("userid" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User deleted", body = MessageResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    )
)]
pub async fn delete_user(
    Extension(service): Extension<DynUserCommandService>,
    RecordId(userid): RecordId,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.delete_user(userid).await?;
    Ok(Json(response))
}

pub fn user_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/users", get(get_users).post(create_user))
        .route(
            "/users/{userid}",
            get(get_user).put(update_user).delete(delete_user),
        )
        .layer(Extension(app_state.di_container.user_query.clone()))
        .layer(Extension(app_state.di_container.user_command.clone()))
}
