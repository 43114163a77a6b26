use axum::{
    extract::{MatchedPath, Request},
    http::HeaderValue,
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::Level;
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request logging middleware that adds structured logging for all HTTP requests
pub async fn request_logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let request_id = Uuid::new_v4().to_string();

    let method = req.method().clone();
    let uri = req.uri().clone();
    let matched_path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|mp| mp.as_str().to_owned())
        .unwrap_or_else(|| "unknown".to_owned());

    tracing::debug!(
        request_id = %request_id,
        method = %method,
        path = %matched_path,
        uri = %uri,
        "incoming request"
    );

    let mut response = next.run(req).await;

    let duration_ms = start.elapsed().as_millis() as u64;
    let status = response.status().as_u16();

    macro_rules! log_completed {
        ($level:ident, $message:literal) => {
            tracing::event!(
                Level::$level,
                request_id = %request_id,
                method = %method,
                path = %matched_path,
                status = status,
                duration_ms = duration_ms,
                $message
            )
        };
    }

    match status {
        500..=599 => log_completed!(ERROR, "request completed (server error)"),
        400..=499 => log_completed!(WARN, "request completed (client error)"),
        _ => log_completed!(INFO, "request completed"),
    }

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}
