pub mod book;
pub mod order;
pub mod pricing;
pub mod purchase_summary;
pub mod value_objects;

pub use book::Book;
pub use order::Order;
pub use pricing::{LineOutcome, reconcile_line};
pub use purchase_summary::PurchaseSummary;
pub use value_objects::*;
