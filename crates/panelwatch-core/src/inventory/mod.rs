pub mod client;
pub mod errors;
pub mod fetch;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use client::HttpInventoryClient;
pub use errors::InventoryError;
pub use fetch::fetch_inventory;
pub use traits::InventoryService;
pub use types::{InventorySnapshot, Node, ServerDetail, ServerSummary};
