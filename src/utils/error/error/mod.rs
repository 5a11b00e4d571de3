//! Error handling for the alert service
//!
//! The error enum, its constructor shorthands, and the HTTP mapping live in
//! separate files; everything callers need is re-exported here.

mod helpers;
mod response;
mod types;

pub use response::{ErrorDetail, ErrorResponse};
pub use types::{AppError, Result};
