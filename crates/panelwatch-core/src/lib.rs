//! panelwatch-core: Core library for live panel status dashboards
//!
//! This library polls a game panel's application API for nodes and servers,
//! works out which servers hold the largest resource limits, and keeps a
//! single status message up to date for a bounded observation window. It is
//! used by the `panelwatch` CLI.
//!
//! # Main Entry Points
//!
//! - [`session`] - Run a poll session against an inventory and a sink
//! - [`inventory`] - Panel API client and per-cycle fetch
//! - [`aggregate`] - Node status classification and resource extrema
//! - [`render`] - Build the status view shown to users
//! - [`sink`] - Message sinks (terminal, chat webhook)
//! - [`config`] - Configuration management

pub mod aggregate;
pub mod config;
pub mod errors;
pub mod events;
pub mod inventory;
pub mod logging;
pub mod render;
pub mod session;
pub mod sink;

// Re-export commonly used types at crate root for convenience
pub use aggregate::{Aggregate, AggregateError, NodeStatus, ResourceDimension, ResourceExtrema};
pub use config::PanelConfig;
pub use errors::PanelwatchError;
pub use inventory::{
    HttpInventoryClient, InventoryError, InventoryService, InventorySnapshot, Node, ServerDetail,
    ServerSummary,
};
pub use render::{NodeField, StatusView, ViewField, ViewStyle};
pub use session::{
    CycleError, DisplayState, EndReason, SessionError, SessionOptions, SessionReport,
};
pub use sink::{Message, MessageHandle, MessageSink, SinkError, TerminalSink, WebhookSink};

// Re-export handler modules as the primary API
pub use session::lifecycle as session_ops;

// Re-export logging initialization
pub use logging::init_logging;
