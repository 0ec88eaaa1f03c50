pub mod format;
pub mod operations;
pub mod types;

pub use operations::{ERROR_MESSAGE, PLACEHOLDER, render};
pub use types::{NodeField, StatusView, ViewField, ViewStyle};
