use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use studbud_backend::api::{create_router, AppState};
use studbud_backend::config::Config;
use studbud_backend::storage::{MemoryBackend, Store};

pub fn test_app() -> Router {
    let store = Store::new(Box::new(MemoryBackend::new()));
    let config = Arc::new(Config {
        port: 0,
        data_dir: "unused".into(),
        frontend_dir: "unused".into(),
        cors_origin: "http://localhost:5173".into(),
    });
    let state = AppState::new(store, Arc::clone(&config));
    create_router(state, &config)
}

pub async fn make_request(
    app: Router,
    method: &str,
    uri: &str,
    body: Option<String>,
) -> (StatusCode, String) {
    let mut request = Request::builder().uri(uri).method(method);

    if body.is_some() {
        request = request.header("content-type", "application/json");
    }

    let request = request.body(Body::from(body.unwrap_or_default())).unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body_str = String::from_utf8(body.to_vec()).unwrap();

    (status, body_str)
}
