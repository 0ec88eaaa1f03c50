pub mod errors;
pub mod operations;
pub mod types;

// Re-export commonly used types
pub use errors::AggregateError;
pub use operations::{aggregate, compute_extrema, max_by_dimension};
pub use types::{Aggregate, NodeStatus, ResourceDimension, ResourceExtrema};
