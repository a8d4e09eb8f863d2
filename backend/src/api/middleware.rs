//! Request middleware

use crate::error::AppError;
use axum::{
    extract::Request,
    http::{HeaderValue, Method, Uri},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

/// Header carrying the per-request identifier back to the caller
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request ID middleware - adds unique ID to each request for tracing
pub async fn request_id_middleware(request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4().to_string();
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = Instant::now();

    let span = info_span!(
        "request",
        request_id = %request_id,
        method = %method,
        uri = %uri,
    );

    let mut response = next.run(request).instrument(span).await;

    let duration = start.elapsed();
    info!(
        request_id = %request_id,
        method = %method,
        uri = %uri,
        status = %response.status().as_u16(),
        duration_ms = duration.as_millis(),
        "Request completed"
    );

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}

/// Fallback for unmatched routes, answered with the failure envelope
pub async fn not_found(uri: Uri) -> AppError {
    AppError::RouteNotFound(uri.path().to_string())
}

/// Fallback for known routes called with an unsupported method
pub async fn method_not_allowed(method: Method, uri: Uri) -> AppError {
    AppError::MethodNotAllowed {
        method: method.to_string(),
        path: uri.path().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, routing::get, Router};
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt;

    fn test_router() -> Router {
        Router::new()
            .route("/ping", get(|| async { "pong" }))
            .method_not_allowed_fallback(method_not_allowed)
            .fallback(not_found)
            .layer(axum::middleware::from_fn(request_id_middleware))
    }

    async fn call(method: Method, uri: &str) -> Response {
        let request = axum::http::Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        test_router().oneshot(request).await.unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_request_id_header_is_uuid() {
        let first = call(Method::GET, "/ping").await;
        let second = call(Method::GET, "/ping").await;

        let id = |response: &Response| {
            let value = response
                .headers()
                .get(REQUEST_ID_HEADER)
                .expect("request id header")
                .to_str()
                .unwrap()
                .to_string();
            Uuid::parse_str(&value).expect("request id is a UUID")
        };
        assert_ne!(id(&first), id(&second));
    }

    #[tokio::test]
    async fn test_request_id_added_to_error_responses() {
        let response = call(Method::GET, "/nope").await;
        assert!(response.headers().contains_key(REQUEST_ID_HEADER));
    }

    #[tokio::test]
    async fn test_not_found_fallback() {
        let response = call(Method::GET, "/nope").await;
        assert_eq!(response.status(), axum::http::StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["message"], "Route not found: /nope");
    }

    #[tokio::test]
    async fn test_method_not_allowed_fallback() {
        let response = call(Method::DELETE, "/ping").await;
        assert_eq!(response.status(), axum::http::StatusCode::METHOD_NOT_ALLOWED);
        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["data"], Value::Null);
        assert_eq!(body["message"], "Method DELETE not allowed for /ping");
    }
}
