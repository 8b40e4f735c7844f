//! Request logging middleware.
//!
//! Writes one line per request with the method, the URL and the local time it
//! arrived, before the request reaches any handler.

use axum::{extract::Request, middleware::Next, response::Response};
use chrono::Local;

/// Timestamp layout used in request log lines.
const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Log the incoming request, then pass it on.
pub async fn log_requests(request: Request, next: Next) -> Response {
    tracing::info!(
        date = %Local::now().format(DATE_FORMAT),
        method = %request.method(),
        url = %request.uri(),
        "Request"
    );

    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::StatusCode, middleware, routing::get, Router};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_passes_request_through() {
        let app = Router::new()
            .route("/notes", get(|| async { "listed" }))
            .layer(middleware::from_fn(log_requests));

        let response = app
            .oneshot(
                axum::http::Request::get("/notes?searchTerm=x")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
