//! Storage layer for the alert service
//!
//! This module provides data persistence for inventory items and alerts.
//! All access goes through the SeaORM-backed relational store; connection
//! pooling and transactional guarantees are delegated to it.

/// Database storage module
pub mod database;

pub use database::{Database, DatabaseBackendType, NewInventoryItem};
