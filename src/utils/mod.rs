//! Utility modules for the alert service
//!
//! Currently this is only error handling; anything else the service needs
//! lives closer to the code that uses it.

pub mod error;

pub use error::{AppError, Result};
