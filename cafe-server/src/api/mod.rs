//! HTTP routes
//!
//! - [`cafes`] - cafe pages and forms
//! - [`health`] - liveness check

pub mod cafes;
pub mod health;
pub mod middleware;

use axum::Router;
use axum::middleware as axum_middleware;
use http::{HeaderName, HeaderValue};
use tower_http::compression::CompressionLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::core::ServerState;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// UUID v4 request id generator
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// All routes, without middleware or state
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(cafes::router())
        .merge(health::router())
}

/// Fully configured application: routes, middleware and state
///
/// Used by the HTTP server and by the integration tests.
pub fn build_app(state: &ServerState) -> Router {
    build_router()
        // Debug error pages - innermost, sees the handler's response first
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::error_detail_middleware,
        ))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        // Copies the request's id onto the response; must sit inside SetRequestIdLayer
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            REQUEST_ID_HEADER,
        )))
        // Outermost: stamps every request before anything else sees it
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static(REQUEST_ID_HEADER),
            XRequestId,
        ))
        .with_state(state.clone())
}
