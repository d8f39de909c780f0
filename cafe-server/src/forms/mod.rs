//! Form handling
//!
//! Submitted forms are parsed into raw structs, checked field by field and
//! only then turned into typed models.

pub mod cafe;
pub mod errors;

pub use cafe::CafeForm;
pub use errors::FormErrors;

/// Message for a blank required field or an unticked required checkbox
pub const REQUIRED_MESSAGE: &str = "This field is required.";

/// Message for a value that is not an absolute URL
pub const INVALID_URL_MESSAGE: &str = "Invalid URL.";
