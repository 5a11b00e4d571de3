/// Alert entity module
pub mod alert;
/// Inventory item entity module
pub mod inventory_item;

pub use alert::Entity as Alert;
pub use inventory_item::Entity as InventoryItem;
