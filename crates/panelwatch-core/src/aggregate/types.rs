use serde::{Deserialize, Serialize};
use std::fmt;

use crate::inventory::types::{Node, ServerDetail};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeStatus {
    Online,           // Maintenance flag off
    UnderMaintenance, // Maintenance flag on
}

impl NodeStatus {
    /// The only classification path: status is a pure function of the flag.
    pub fn from_maintenance(under_maintenance: bool) -> Self {
        if under_maintenance {
            NodeStatus::UnderMaintenance
        } else {
            NodeStatus::Online
        }
    }
}

impl fmt::Display for NodeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeStatus::Online => write!(f, "Online"),
            NodeStatus::UnderMaintenance => write!(f, "Under Maintenance"),
        }
    }
}

/// A resource dimension servers are ranked on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceDimension {
    Cpu,
    Disk,
    Memory,
}

impl ResourceDimension {
    /// Display order used everywhere a per-dimension list is shown.
    pub const ALL: [ResourceDimension; 3] = [
        ResourceDimension::Cpu,
        ResourceDimension::Disk,
        ResourceDimension::Memory,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ResourceDimension::Cpu => "CPU",
            ResourceDimension::Disk => "Disk",
            ResourceDimension::Memory => "RAM",
        }
    }

    /// The server's limit in this dimension.
    pub fn value(&self, server: &ServerDetail) -> u64 {
        match self {
            ResourceDimension::Cpu => server.cpu_limit,
            ResourceDimension::Disk => server.disk_limit,
            ResourceDimension::Memory => server.memory_limit,
        }
    }
}

/// The server holding the maximum limit in each dimension.
///
/// Each slot is chosen independently; one server may fill all three.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceExtrema {
    pub cpu: ServerDetail,
    pub disk: ServerDetail,
    pub memory: ServerDetail,
}

impl ResourceExtrema {
    pub fn get(&self, dimension: ResourceDimension) -> &ServerDetail {
        match dimension {
            ResourceDimension::Cpu => &self.cpu,
            ResourceDimension::Disk => &self.disk,
            ResourceDimension::Memory => &self.memory,
        }
    }
}

/// Aggregator output for one cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Aggregate {
    /// Nodes in inventory order, each paired with its status.
    pub node_statuses: Vec<(Node, NodeStatus)>,
    pub extrema: ResourceExtrema,
}
