//! Health check
//!
//! ```json
//! { "status": "ok", "version": "0.1.0", "cafes": 3 }
//! ```

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(handler::health))
}
