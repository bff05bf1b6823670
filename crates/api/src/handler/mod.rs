mod student;
mod user;

use crate::state::AppState;
use anyhow::{Context, Result};
use axum::{
    Router,
    extract::{DefaultBodyLimit, State},
    http::{StatusCode, header::CONTENT_TYPE},
    response::IntoResponse,
    routing::get,
};
use prometheus_client::encoding::text::encode;
use shared::utils::shutdown_signal;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{
    cors::CorsLayer, limit::RequestBodyLimitLayer, services::ServeDir, trace::TraceLayer,
};
use tracing::info;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

pub use self::student::student_routes;
pub use self::user::user_routes;

#[derive(OpenApi)]
#[openapi(
    paths(
        user::create_user,
        user::get_users,
        user::get_user,
        user::update_user,
        user::delete_user,

        student::get_students,
        student::get_student,
        student::create_student,
        student::update_student,
        student::delete_student,
    ),
    tags(
        (name = "User", description = "User master endpoints"),
        (name = "Student", description = "Student endpoints with profile image upload"),
    )
)]
struct ApiDoc;

pub async fn metrics_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let mut buffer = String::new();

    let registry = state.registry.lock().await;

    if let Err(e) = encode(&mut buffer, &registry) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to encode metrics: {e}"),
        )
            .into_response();
    }

    (
        [(
            CONTENT_TYPE,
            "application/openmetrics-text; version=1.0.0; charset=utf-8",
        )],
        buffer,
    )
        .into_response()
}

pub struct AppRouter;

impl AppRouter {
    pub fn build(app_state: AppState) -> Router {
        let shared_state = Arc::new(app_state);
        let upload_dir = shared_state.upload_dir.clone();
        let max_upload_size = shared_state.max_upload_size;

        let api_router = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .route("/metrics", get(metrics_handler))
            .with_state(shared_state.clone())
            .merge(user_routes(shared_state.clone()))
            .merge(student_routes(shared_state.clone()));

        let (app_router, api) = api_router.split_for_parts();

        app_router
            .nest_service("/uploads", ServeDir::new(upload_dir))
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(max_upload_size))
            .layer(CorsLayer::permissive())
            .layer(TraceLayer::new_for_http())
    }

    pub async fn serve(port: u16, app_state: AppState) -> Result<()> {
        let app = Self::build(app_state);

        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Failed to bind {addr}"))?;

        info!("🚀 Server running on http://{}", listener.local_addr()?);
        info!("📖 Swagger UI: http://localhost:{port}/swagger-ui");
        info!("📊 Metrics: http://localhost:{port}/metrics");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("Server terminated unexpectedly")?;

        Ok(())
    }
}
