//! Cafe pages
//!
//! | Path | Method | Page |
//! |------|--------|------|
//! | `/` | GET | all cafes |
//! | `/cafe/{id}` | GET | cafe detail |
//! | `/search?key=` | GET | cafes whose name or location contains `key` |
//! | `/add` | GET, POST | creation form |
//! | `/edit-cafe/{id}` | GET, POST | edit form |
//! | `/delete/{id}` | GET | delete, then back to the list |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list))
        .route("/cafe/{id}", get(handler::detail))
        .route("/search", get(handler::search))
        .route("/add", get(handler::new_form).post(handler::create))
        .route(
            "/edit-cafe/{id}",
            get(handler::edit_form).post(handler::update),
        )
        .route("/delete/{id}", get(handler::delete))
}
