//! One fetch, aggregate, render pass.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::aggregate::operations::aggregate;
use crate::inventory::fetch::fetch_inventory;
use crate::inventory::traits::InventoryService;
use crate::render::operations::render;
use crate::render::types::{StatusView, ViewStyle};
use crate::session::errors::CycleError;

/// Run one cycle and return the view to display.
///
/// Any inventory failure, including a single failed detail lookup, or an
/// empty server set fails the whole cycle. Nothing partial is rendered.
pub async fn run_cycle<I>(
    inventory: &I,
    detail_concurrency: Option<usize>,
    style: &ViewStyle,
    rendered_at: DateTime<Utc>,
) -> Result<StatusView, CycleError>
where
    I: InventoryService,
{
    let snapshot = fetch_inventory(inventory, detail_concurrency).await?;
    let result = aggregate(&snapshot.nodes, &snapshot.servers)?;

    debug!(
        event = "core.session.cycle_aggregated",
        nodes = result.node_statuses.len(),
        cpu_server = result.extrema.cpu.id,
        disk_server = result.extrema.disk.id,
        memory_server = result.extrema.memory.id
    );

    Ok(render(
        &result.node_statuses,
        &result.extrema,
        rendered_at,
        style,
    ))
}
