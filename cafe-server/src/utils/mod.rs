//! Utility module
//!
//! - [`AppError`] - application error rendered as an HTML error page
//! - [`AppResult`] - handler result alias
//! - logger setup

pub mod error;
pub mod logger;
pub mod result;

pub use error::{AppError, ErrorDetail};
pub use result::AppResult;
