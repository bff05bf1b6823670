use super::{EditTarget, FieldView, field_views, mount, render};
use crate::{
    errors::UiError,
    middleware::multipart::StudentFormData,
    state::AppState,
    view::{self, ListFormView, Students},
};
use askama::Template;
use axum::{
    Router,
    extract::{Path, Query, State},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
};
use shared::validation::{FieldSource, STUDENT_SCHEMA};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

const PAGE: &str = "/";

pub struct StudentRow {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub image_url: String,
}

#[derive(Template)]
#[template(path = "students.html")]
pub struct StudentsPage {
    pub rows: Vec<StudentRow>,
    pub loaded: bool,
    pub fields: Vec<FieldView>,
    pub editing: bool,
    pub edit_query: String,
    pub pending: bool,
}

fn render_students(
    view: &ListFormView<Students>,
    api_public_url: &str,
) -> Result<Html<String>, UiError> {
    let form = view.form();
    let target = EditTarget {
        edit: view.editing(),
    };

    let rows = view
        .items()
        .iter()
        .map(|student| StudentRow {
            id: student.id,
            name: student.name.clone(),
            email: student.email.clone(),
            image_url: student
                .profile_image
                .as_deref()
                .map(|path| format!("{api_public_url}{path}"))
                .unwrap_or_default(),
        })
        .collect();

    let page = StudentsPage {
        rows,
        loaded: view.is_loaded(),
        fields: field_views(&STUDENT_SCHEMA, &[], |name| form.field(name), view.errors()),
        editing: target.edit.is_some(),
        edit_query: target.query(),
        pending: view.is_pending(),
    };

    render(&page)
}

pub async fn students_page(
    State(state): State<Arc<AppState>>,
    Query(target): Query<EditTarget>,
) -> Result<Html<String>, UiError> {
    let mut view = mount(&state.student_client).await;

    if let Some(id) = target.edit {
        if !view.edit(id) {
            info!("🎓 Student {id} is not in the list, showing an empty form");
        }
    }

    render_students(&view, &state.api_public_url)
}

pub async fn submit_student(
    State(state): State<Arc<AppState>>,
    Query(target): Query<EditTarget>,
    StudentFormData(form): StudentFormData,
) -> Result<Response, UiError> {
    let view = Mutex::new(ListFormView::<Students>::new());
    view.lock().await.set_editing(target.edit);

    match view::submit(&view, &state.student_client, form).await {
        Ok(true) => return Ok(Redirect::to(PAGE).into_response()),
        Ok(false) => info!("⚠️ Student was not saved, keeping the form"),
        Err(refusal) => info!("⚠️ Student submission refused: {refusal}"),
    }

    view::refresh(&view, &state.student_client).await;

    Ok(render_students(&view.into_inner(), &state.api_public_url)?.into_response())
}

pub async fn delete_student(State(state): State<Arc<AppState>>, Path(id): Path<i32>) -> Redirect {
    let view = Mutex::new(ListFormView::<Students>::new());

    if let Err(refusal) = view::delete(&view, &state.student_client, id).await {
        info!("⏳ Student delete ignored: {refusal}");
    }

    Redirect::to(PAGE)
}

pub fn student_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(PAGE, get(students_page))
        .route("/students/submit", post(submit_student))
        .route("/students/delete/{id}", post(delete_student))
}
