//! SeaORM-backed relational store
//!
//! Entities describe the `inventory_items` and `alerts` tables, migrations
//! build them, and `seaorm_db` implements the operations the engine calls.

pub mod entities;
pub mod migration;
pub mod seaorm_db;

pub use seaorm_db::SeaOrmDatabase as Database;
pub use seaorm_db::{DatabaseBackendType, NewInventoryItem};
