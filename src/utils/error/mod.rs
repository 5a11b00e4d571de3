//! Error handling utilities
//!
//! Home of [`AppError`] and the `Result` alias used across the service.

pub mod error;

pub use error::*;
