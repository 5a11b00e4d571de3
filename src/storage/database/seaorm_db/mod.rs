//! Store implementation split by concern: connection and schema management
//! in `connection`, alerts-table operations in `alert_ops`, items-side
//! operations in `inventory_ops`.

mod alert_ops;
mod connection;
mod inventory_ops;
mod types;

pub use inventory_ops::NewInventoryItem;
pub use types::{DatabaseBackendType, SeaOrmDatabase};
