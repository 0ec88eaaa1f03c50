use chrono::{DateTime, Utc};

use crate::aggregate::types::{NodeStatus, ResourceDimension, ResourceExtrema};
use crate::inventory::types::Node;
use crate::render::types::{NodeField, StatusView, ViewField, ViewStyle};

/// Text shown while the first cycle is still running.
pub const PLACEHOLDER: &str = "Fetching nodes and servers...";

/// Text shown in place of the view when a cycle fails.
pub const ERROR_MESSAGE: &str = "Error fetching nodes or servers. Please try again later.";

pub const SUMMARY_FIELD_NAME: &str = "Server with Most Resources";
pub const OWNER_FIELD_NAME: &str = "Server Owners";

/// Build the status view for one cycle.
///
/// Pure: the same inputs always give the same view. `rendered_at` is the
/// cycle time supplied by the caller.
pub fn render(
    node_statuses: &[(Node, NodeStatus)],
    extrema: &ResourceExtrema,
    rendered_at: DateTime<Utc>,
    style: &ViewStyle,
) -> StatusView {
    let node_fields = node_statuses
        .iter()
        .map(|(node, status)| NodeField {
            name: node.name.clone(),
            status: *status,
        })
        .collect();

    StatusView {
        title: style.title.clone(),
        timestamp: rendered_at,
        color: style.color,
        node_fields,
        summary_field: ViewField {
            name: SUMMARY_FIELD_NAME.to_string(),
            value: summary_lines(extrema),
            inline: false,
        },
        owner_field: ViewField {
            name: OWNER_FIELD_NAME.to_string(),
            value: owner_lines(extrema),
            inline: false,
        },
    }
}

fn summary_lines(extrema: &ResourceExtrema) -> String {
    ResourceDimension::ALL
        .iter()
        .map(|dimension| {
            let server = extrema.get(*dimension);
            format!(
                "{}: {} - {}",
                dimension.label(),
                server.name,
                dimension.value(server)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn owner_lines(extrema: &ResourceExtrema) -> String {
    ResourceDimension::ALL
        .iter()
        .map(|dimension| format!("{}: {}", dimension.label(), extrema.get(*dimension).owner_id))
        .collect::<Vec<_>>()
        .join("\n")
}
