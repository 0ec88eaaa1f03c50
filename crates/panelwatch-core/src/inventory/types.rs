//! Inventory domain types and the panel's JSON wire shapes.
//!
//! The panel wraps every resource as `{ "object": ..., "attributes": { ... } }`
//! and every list as `{ "object": "list", "data": [ ... ] }`. The `Wire*`
//! types mirror that envelope; the domain types are what the rest of the
//! crate works with.

use serde::{Deserialize, Serialize};

/// A backend compute host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: u64,
    pub name: String,
    pub under_maintenance: bool,
}

/// Identity fields of a server, as returned by the server list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerSummary {
    pub id: u64,
    pub name: String,
    pub owner_id: u64,
}

/// A server joined with its resource limits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerDetail {
    pub id: u64,
    pub name: String,
    pub owner_id: u64,
    pub cpu_limit: u64,
    pub disk_limit: u64,
    pub memory_limit: u64,
}

impl ServerDetail {
    /// Join a list summary with the detail looked up for the same server id.
    ///
    /// Identity and owner come from the summary; only limits come from the lookup.
    pub fn join(summary: &ServerSummary, lookup: &ServerDetail) -> Self {
        Self {
            id: summary.id,
            name: summary.name.clone(),
            owner_id: summary.owner_id,
            cpu_limit: lookup.cpu_limit,
            disk_limit: lookup.disk_limit,
            memory_limit: lookup.memory_limit,
        }
    }
}

/// Everything one cycle fetched: nodes and fully joined server details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventorySnapshot {
    pub nodes: Vec<Node>,
    pub servers: Vec<ServerDetail>,
}

/// `{ "object": "list", "data": [...] }`
#[derive(Debug, Deserialize)]
pub(crate) struct WireList<T> {
    pub data: Vec<WireObject<T>>,
}

/// `{ "object": "...", "attributes": {...} }`
#[derive(Debug, Deserialize)]
pub(crate) struct WireObject<T> {
    pub attributes: T,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireNode {
    pub id: u64,
    pub name: String,
    // Panels report either key, and some report both.
    #[serde(default)]
    pub is_under_maintenance: Option<bool>,
    #[serde(default)]
    pub maintenance_mode: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireServerSummary {
    pub id: u64,
    pub name: String,
    pub user: u64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireServerDetail {
    pub id: u64,
    pub name: String,
    pub user: u64,
    pub limits: WireLimits,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireLimits {
    pub cpu: u64,
    pub disk: u64,
    pub memory: u64,
}

impl From<WireNode> for Node {
    fn from(wire: WireNode) -> Self {
        Self {
            id: wire.id,
            name: wire.name,
            under_maintenance: wire.is_under_maintenance.unwrap_or(false)
                || wire.maintenance_mode.unwrap_or(false),
        }
    }
}

impl From<WireServerSummary> for ServerSummary {
    fn from(wire: WireServerSummary) -> Self {
        Self {
            id: wire.id,
            name: wire.name,
            owner_id: wire.user,
        }
    }
}

impl From<WireServerDetail> for ServerDetail {
    fn from(wire: WireServerDetail) -> Self {
        Self {
            id: wire.id,
            name: wire.name,
            owner_id: wire.user,
            cpu_limit: wire.limits.cpu,
            disk_limit: wire.limits.disk,
            memory_limit: wire.limits.memory,
        }
    }
}
