use std::sync::Arc;

use axum::{
    http::header,
    response::{Html, IntoResponse, Json},
    routing::get,
    Router,
};
use serde_json::{json, Value};
use utoipa::OpenApi as _;

pub async fn hello() -> Json<Value> {
    Json(json!({
        "message": "Hello fruit"
    }))
}

pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

pub async fn serve_docs() -> Html<&'static str> {
    // Load Stoplight Elements from CDN @latest
    Html(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8"/>
  <title>API Docs</title>
  <script src="https://unpkg.com/@stoplight/elements@latest/web-components.min.js"></script>
  <link rel="stylesheet" href="https://unpkg.com/@stoplight/elements@latest/styles.min.css">
</head>
<body>
  <elements-api apiDescriptionUrl="/openapi.json" router="hash" layout="sidebar"></elements-api>
</body>
</html>"#,
    )
}

/// Routes owned by the host app: landing, health and API docs.
pub fn routes() -> anyhow::Result<Router> {
    // Build once, serve as static JSON (no per-request parsing)
    let openapi_value = Arc::new(serde_json::to_value(fruit_catalog::ApiDoc::openapi())?);

    Ok(Router::new()
        .route("/", get(hello))
        .route("/health", get(health_check))
        .route(
            "/openapi.json",
            get({
                let v = openapi_value.clone();
                move || async move {
                    let json = Json((*v).clone());
                    ([(header::CACHE_CONTROL, "no-store")], json).into_response()
                }
            }),
        )
        .route("/docs", get(serve_docs)))
}
