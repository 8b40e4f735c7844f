//! Route definitions for the HTTP API.

pub mod health;
pub mod notes;

use axum::{handler::HandlerWithoutStateExt, Router};
use tower_http::services::ServeDir;

use crate::error::ApiError;
use crate::state::AppState;

/// Build the complete router with all routes.
///
/// Note routes live under `/api`. Everything else is looked up in the static
/// directory, and whatever is not there ends in the JSON 404.
pub fn build_router(state: AppState) -> Router {
    let assets = ServeDir::new(&state.config().static_dir)
        .call_fallback_on_method_not_allowed(true)
        .not_found_service(not_found.into_service());

    Router::new()
        .merge(health::routes())
        .nest("/api", notes::routes().fallback(not_found))
        .fallback_service(assets)
        .with_state(state)
}

/// Terminal handler for requests nothing else answered.
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}

/// Handler for a known path hit with a method it does not serve.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServerConfig;
    use axum::{body::Body, http::{Request, StatusCode}};
    use noteful_store::Store;
    use tower::ServiceExt;

    fn app_with_static(dir: &std::path::Path) -> Router {
        let config = ServerConfig {
            static_dir: dir.to_path_buf(),
            ..ServerConfig::default()
        };
        build_router(AppState::new(Store::new(), config))
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_serves_static_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<h1>Noteful</h1>").unwrap();
        let app = app_with_static(dir.path());

        let response = app
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], b"<h1>Noteful</h1>");
    }

    #[tokio::test]
    async fn test_unknown_path_is_json_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let app = app_with_static(dir.path());

        let response = app
            .clone()
            .oneshot(Request::get("/nowhere").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["message"], "Not found");

        let response = app
            .oneshot(Request::post("/nowhere").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unsupported_method_is_json_error() {
        let dir = tempfile::tempdir().unwrap();
        let app = app_with_static(dir.path());

        let response = app
            .clone()
            .oneshot(Request::patch("/api/notes/1").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        let body = body_json(response).await;
        assert_eq!(body["message"], "Method not allowed");
        assert_eq!(body["error"]["status"], 405);

        let response = app
            .oneshot(Request::post("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body_json(response).await["error"]["code"], "METHOD_NOT_ALLOWED");
    }

    #[tokio::test]
    async fn test_unknown_api_path_is_json_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let app = app_with_static(dir.path());

        let response = app
            .oneshot(Request::get("/api/widgets").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["error"]["code"], "NOT_FOUND");
    }
}
