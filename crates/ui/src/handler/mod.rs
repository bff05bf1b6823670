mod students;
mod users;

use crate::{
    abstract_trait::DynResourceClient,
    errors::UiError,
    state::AppState,
    view::{self, ListFormView, Resource},
};
use anyhow::{Context, Result};
use askama::Template;
use axum::{Router, extract::DefaultBodyLimit, response::Html};
use serde::Deserialize;
use shared::{
    utils::shutdown_signal,
    validation::{FieldSchema, Schema},
};
use std::{collections::BTreeMap, sync::Arc};
use tokio::{net::TcpListener, sync::Mutex};
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing::info;

pub use self::students::student_routes;
pub use self::users::user_routes;

pub const MAX_FORM_SIZE: usize = 10 * 1024 * 1024;

/// One text input of a form, with its current value and first error.
#[derive(Debug, Clone)]
pub struct FieldView {
    pub name: &'static str,
    pub label: &'static str,
    pub input_type: &'static str,
    pub value: String,
    pub error: String,
    pub required: bool,
}

impl FieldView {
    fn new(field: &FieldSchema, value: &str, errors: &BTreeMap<String, String>) -> Self {
        let input_type = if field.is_email() {
            "email"
        } else if field.name.contains("password") {
            "password"
        } else {
            "text"
        };

        Self {
            name: field.name,
            label: field.label,
            input_type,
            value: value.to_string(),
            error: errors.get(field.name).cloned().unwrap_or_default(),
            required: field.is_required(),
        }
    }
}

/// Text inputs for every schema field except those in `skip`.
fn field_views<'a>(
    schema: &Schema,
    skip: &[&str],
    value: impl Fn(&str) -> Option<&'a str>,
    errors: &BTreeMap<String, String>,
) -> Vec<FieldView> {
    schema
        .fields
        .iter()
        .filter(|field| !skip.contains(&field.name))
        .map(|field| FieldView::new(field, value(field.name).unwrap_or_default(), errors))
        .collect()
}

fn render<T: Template>(page: &T) -> Result<Html<String>, UiError> {
    Ok(Html(page.render()?))
}

/// `?edit=<id>` on a page or a submit action; the editing pointer travels
/// with the browser instead of living on the server.
#[derive(Debug, Default, Deserialize)]
pub struct EditTarget {
    pub edit: Option<i32>,
}

impl EditTarget {
    fn query(&self) -> String {
        self.edit.map(|id| format!("?edit={id}")).unwrap_or_default()
    }
}

/// A fresh view for one request, with the collection fetched.
async fn mount<R: Resource>(client: &DynResourceClient<R>) -> ListFormView<R> {
    let view = Mutex::new(ListFormView::new());
    view::refresh(&view, client).await;
    view.into_inner()
}

pub struct AppRouter;

impl AppRouter {
    pub fn build(state: AppState) -> Router {
        let shared_state = Arc::new(state);

        Router::new()
            .merge(student_routes())
            .merge(user_routes())
            .with_state(shared_state)
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(MAX_FORM_SIZE))
            .layer(TraceLayer::new_for_http())
    }

    pub async fn serve(port: u16, state: AppState) -> Result<()> {
        let app = Self::build(state);

        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Failed to bind {addr}"))?;

        info!("🚀 Admin UI running on http://{}", listener.local_addr()?);
        info!("🎓 Students: http://localhost:{port}/");
        info!("👤 Users: http://localhost:{port}/user-master");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("Server terminated unexpectedly")?;

        Ok(())
    }
}
