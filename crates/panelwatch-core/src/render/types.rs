use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::aggregate::types::NodeStatus;
use crate::config::defaults::{DEFAULT_COLOR, DEFAULT_TITLE};

/// Presentation knobs for a rendered view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewStyle {
    pub title: String,
    /// 24-bit RGB accent color.
    pub color: u32,
}

impl Default for ViewStyle {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            color: DEFAULT_COLOR,
        }
    }
}

/// One per-node line of the view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeField {
    pub name: String,
    pub status: NodeStatus,
}

/// A named block of text in the view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewField {
    pub name: String,
    pub value: String,
    /// Whether chat sinks may lay this field out side by side with others.
    pub inline: bool,
}

/// The structured status display produced by one successful cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusView {
    pub title: String,
    pub timestamp: DateTime<Utc>,
    pub color: u32,
    pub node_fields: Vec<NodeField>,
    /// Largest server per dimension, with its limit.
    pub summary_field: ViewField,
    /// Owner of each per-dimension largest server.
    pub owner_field: ViewField,
}
