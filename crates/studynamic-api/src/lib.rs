//! REST client for the Studynamic backend.
//!
//! Wire DTOs live beside their endpoints and are converted into the domain
//! types from `studynamic-cal` exactly once, at this boundary. Records that
//! fail normalization are skipped with a warning; one bad row never fails a
//! batch (the calendar degrades to missing entries, not to an error page).

pub mod client;
pub mod endpoints;
pub mod error;
pub mod fetch;

pub use client::ApiClient;
pub use error::{ApiError, ApiResult};
