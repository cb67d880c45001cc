use axum::http::HeaderValue;
use axum::routing::{get, patch, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::api::handlers;
use crate::api::state::AppState;
use crate::config::Config;

pub fn create_router(state: AppState, config: &Config) -> Router {
    let origins: Vec<HeaderValue> = config
        .cors_origin
        .split(',')
        .filter_map(|s| s.trim().parse::<HeaderValue>().ok())
        .collect();
    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(tower_http::cors::Any)
        .allow_headers(tower_http::cors::Any);

    let task_routes = Router::new()
        .route("/", post(handlers::tasks::create_task))
        .route(
            "/{id}",
            patch(handlers::tasks::update_task).delete(handlers::tasks::delete_task),
        )
        .route("/{id}/move", patch(handlers::tasks::move_task));

    let column_routes = Router::new()
        .route("/", post(handlers::columns::create_column))
        .route(
            "/{id}",
            patch(handlers::columns::update_column).delete(handlers::columns::delete_column),
        );

    let link_routes = Router::new()
        .route("/", post(handlers::links::create_link))
        .route(
            "/{id}",
            patch(handlers::links::update_link).delete(handlers::links::delete_link),
        )
        .route("/{id}/move", patch(handlers::links::move_link));

    let group_routes = Router::new()
        .route("/", post(handlers::groups::create_group))
        .route("/{id}", axum::routing::delete(handlers::groups::delete_group));

    let api_routes = Router::new()
        .route("/health", get(handlers::health_check))
        .route("/health/live", get(handlers::liveness))
        .route("/api/board", get(handlers::tasks::get_board))
        .route("/api/reading-list", get(handlers::links::get_reading_list))
        .nest("/api/tasks", task_routes)
        .nest("/api/columns", column_routes)
        .nest("/api/links", link_routes)
        .nest("/api/groups", group_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let serve_dir = ServeDir::new(&config.frontend_dir).not_found_service(
        ServeDir::new(&config.frontend_dir).append_index_html_on_directories(true),
    );

    api_routes.fallback_service(serve_dir)
}
