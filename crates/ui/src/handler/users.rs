use super::{EditTarget, FieldView, field_views, mount, render};
use crate::{
    domain::UserForm,
    errors::UiError,
    state::AppState,
    view::{self, ListFormView, Users},
};
use askama::Template;
use axum::{
    Form, Router,
    extract::{Path, Query, State},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
};
use shared::{
    domain::responses::UserResponse,
    validation::{FieldSource, ROLES, USER_SCHEMA},
};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

const PAGE: &str = "/user-master";

pub struct RoleOption {
    pub value: &'static str,
    pub selected: bool,
}

#[derive(Template)]
#[template(path = "users.html")]
pub struct UsersPage {
    pub rows: Vec<UserResponse>,
    pub loaded: bool,
    pub fields: Vec<FieldView>,
    pub roles: Vec<RoleOption>,
    pub role_error: String,
    pub isactive: bool,
    pub isdeleted: bool,
    pub editing: bool,
    pub edit_query: String,
    pub pending: bool,
}

fn render_users(view: &ListFormView<Users>) -> Result<Html<String>, UiError> {
    let form = view.form();
    let errors = view.errors();
    let target = EditTarget {
        edit: view.editing(),
    };

    let page = UsersPage {
        rows: view.items().to_vec(),
        loaded: view.is_loaded(),
        fields: field_views(&USER_SCHEMA, &["role"], |name| form.field(name), errors),
        roles: ROLES
            .iter()
            .map(|role| RoleOption {
                value: *role,
                selected: form.role == *role,
            })
            .collect(),
        role_error: errors.get("role").cloned().unwrap_or_default(),
        isactive: form.isactive,
        isdeleted: form.isdeleted,
        editing: target.edit.is_some(),
        edit_query: target.query(),
        pending: view.is_pending(),
    };

    render(&page)
}

pub async fn users_page(
    State(state): State<Arc<AppState>>,
    Query(target): Query<EditTarget>,
) -> Result<Html<String>, UiError> {
    let mut view = mount(&state.user_client).await;

    if let Some(id) = target.edit {
        if !view.edit(id) {
            info!("👤 User {id} is not in the list, showing an empty form");
        }
    }

    render_users(&view)
}

/// Redirects back on success; otherwise re-renders the page with the posted
/// values and their errors.
pub async fn submit_user(
    State(state): State<Arc<AppState>>,
    Query(target): Query<EditTarget>,
    Form(form): Form<UserForm>,
) -> Result<Response, UiError> {
    let view = Mutex::new(ListFormView::<Users>::new());
    view.lock().await.set_editing(target.edit);

    match view::submit(&view, &state.user_client, form).await {
        Ok(true) => return Ok(Redirect::to(PAGE).into_response()),
        Ok(false) => info!("⚠️ User was not saved, keeping the form"),
        Err(refusal) => info!("⚠️ User submission refused: {refusal}"),
    }

    view::refresh(&view, &state.user_client).await;

    Ok(render_users(&view.into_inner())?.into_response())
}

pub async fn delete_user(State(state): State<Arc<AppState>>, Path(id): Path<i32>) -> Redirect {
    let view = Mutex::new(ListFormView::<Users>::new());

    if let Err(refusal) = view::delete(&view, &state.user_client, id).await {
        info!("⏳ User delete ignored: {refusal}");
    }

    Redirect::to(PAGE)
}

pub fn user_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(PAGE, get(users_page))
        .route("/user-master/submit", post(submit_user))
        .route("/user-master/delete/{id}", post(delete_user))
}
