pub mod inventory_lookup;
pub mod purchase_executor;

pub use inventory_lookup::InventoryLookup;
pub use purchase_executor::PurchaseExecutor;
