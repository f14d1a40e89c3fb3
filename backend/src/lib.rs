//! # Example Template Backend
//!
//! A minimal REST backend over an in-memory list of example records.
//!
//! ```text
//! IO Layer (REST API, handlers)
//!     ↓
//! Domain Layer (ExampleService)
//!     ↓
//! Storage Layer (in-memory store)
//! ```

pub mod config;
pub mod domain;
pub mod io;
pub mod logging;
pub mod storage;
pub mod utils;

use axum::{
    extract::DefaultBodyLimit,
    http::{header, Method},
    Router,
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Settings;
use crate::domain::ExampleService;

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub example_service: ExampleService,
}

impl AppState {
    pub fn new(example_service: ExampleService) -> Self {
        Self { example_service }
    }
}

/// Initialize the backend with all required services
pub fn initialize_backend() -> AppState {
    info!("Setting up domain model");
    let example_service = ExampleService::with_fixtures();
    AppState::new(example_service)
}

/// CORS policy: any origin, no credentials
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods([
            Method::GET,
            Method::HEAD,
            Method::PUT,
            Method::PATCH,
            Method::POST,
            Method::DELETE,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .allow_credentials(false)
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, settings: &Settings) -> Router {
    let mut app = Router::new()
        .nest("/examples", io::rest::example_apis::router())
        .layer(DefaultBodyLimit::max(settings.body_limit_bytes()))
        .with_state(app_state);

    if settings.features.enable_cors {
        app = app.layer(cors_layer());
    }
    if settings.features.enable_logging {
        app = app.layer(TraceLayer::new_for_http());
    }

    app
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::util::ServiceExt;

    fn preflight() -> Request<Body> {
        Request::builder()
            .method(Method::OPTIONS)
            .uri("/examples")
            .header(header::ORIGIN, "http://localhost:3000")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn test_cors_preflight_allows_any_origin() {
        let app = create_router(initialize_backend(), &Settings::default());

        let response = app.oneshot(preflight()).await.unwrap();

        assert!(response.status().is_success());
        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "http://localhost:3000"
        );
    }

    #[tokio::test]
    async fn test_cors_can_be_disabled() {
        let mut settings = Settings::default();
        settings.features.enable_cors = false;
        let app = create_router(initialize_backend(), &settings);

        let response = app.oneshot(preflight()).await.unwrap();

        assert!(response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
    }

    #[tokio::test]
    async fn test_body_limit_is_enforced() {
        let mut settings = Settings::default();
        settings.server.body_limit_mb = 0;
        let app = create_router(initialize_backend(), &settings);

        let request = Request::builder()
            .method(Method::POST)
            .uri("/examples")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"name":"a","description":"b"}"#))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let app = create_router(initialize_backend(), &Settings::default());

        let request = Request::builder()
            .uri("/nothing-here")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
