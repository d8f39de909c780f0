//! Application middleware

use axum::body::Body;
use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use http::header::CONTENT_LENGTH;

use crate::core::ServerState;
use crate::utils::ErrorDetail;
use crate::views;

/// Re-render error pages with their full message when `DEBUG` is on
///
/// Error responses carry an [`ErrorDetail`] extension; without debug the
/// page keeps the public message only.
pub async fn error_detail_middleware(
    State(state): State<ServerState>,
    request: Request,
    next: Next,
) -> Response {
    let response = next.run(request).await;
    if !state.config.debug {
        return response;
    }

    let Some(detail) = response.extensions().get::<ErrorDetail>().cloned() else {
        return response;
    };

    let status = response.status();
    let public_message = if status.is_server_error() {
        detail.code.message().to_string()
    } else {
        detail.message.clone()
    };
    let debug_text = format!("[{}] {}", detail.code.code(), detail.message);
    let page = views::error_page(status, &public_message, Some(&debug_text));

    let (mut parts, _) = response.into_parts();
    parts.headers.remove(CONTENT_LENGTH);
    Response::from_parts(parts, Body::from(page.0))
}
