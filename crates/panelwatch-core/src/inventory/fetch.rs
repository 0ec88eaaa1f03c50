//! One cycle's worth of inventory: nodes, servers, and the detail fan-out.

use futures::{StreamExt, TryStreamExt, stream};
use tracing::{debug, info};

use super::errors::InventoryError;
use super::traits::InventoryService;
use super::types::{InventorySnapshot, ServerDetail, ServerSummary};

/// Fetch nodes and servers, then resolve every server's detail concurrently.
///
/// Detail lookups run with at most `detail_concurrency` in flight (all at
/// once when `None`). Results keep server-list order. The first failing
/// lookup fails the whole fetch; no partial snapshot is ever returned.
pub async fn fetch_inventory<I>(
    inventory: &I,
    detail_concurrency: Option<usize>,
) -> Result<InventorySnapshot, InventoryError>
where
    I: InventoryService,
{
    info!(event = "core.inventory.fetch_started");

    let nodes = inventory.list_nodes().await?;
    let summaries = inventory.list_servers().await?;

    let limit = detail_concurrency
        .unwrap_or(summaries.len())
        .max(1);

    debug!(
        event = "core.inventory.detail_fanout_started",
        servers = summaries.len(),
        concurrency = limit
    );

    let servers: Vec<ServerDetail> = stream::iter(summaries.iter())
        .map(|summary| resolve_detail(inventory, summary))
        .buffered(limit)
        .try_collect()
        .await?;

    info!(
        event = "core.inventory.fetch_completed",
        nodes = nodes.len(),
        servers = servers.len()
    );

    Ok(InventorySnapshot { nodes, servers })
}

async fn resolve_detail<I>(
    inventory: &I,
    summary: &ServerSummary,
) -> Result<ServerDetail, InventoryError>
where
    I: InventoryService,
{
    let lookup = inventory.get_server_detail(summary.id).await?;
    if lookup.id != summary.id {
        return Err(InventoryError::JoinMismatch {
            requested: summary.id,
            returned: lookup.id,
        });
    }
    Ok(ServerDetail::join(summary, &lookup))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::types::Node;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    struct FakeInventory {
        nodes: Vec<Node>,
        servers: Vec<ServerSummary>,
        details: HashMap<u64, ServerDetail>,
        failing_detail: Option<u64>,
        in_flight: AtomicUsize,
        peak_in_flight: AtomicUsize,
        requested: Mutex<Vec<u64>>,
    }

    impl FakeInventory {
        fn with_servers(count: u64) -> Self {
            let servers: Vec<ServerSummary> = (1..=count)
                .map(|id| ServerSummary {
                    id,
                    name: format!("server{}", id),
                    owner_id: 100 + id,
                })
                .collect();
            let details = servers
                .iter()
                .map(|s| {
                    (
                        s.id,
                        ServerDetail {
                            id: s.id,
                            name: s.name.clone(),
                            owner_id: s.owner_id,
                            cpu_limit: s.id * 10,
                            disk_limit: 1000 - s.id,
                            memory_limit: 512,
                        },
                    )
                })
                .collect();
            Self {
                nodes: vec![Node {
                    id: 1,
                    name: "A".to_string(),
                    under_maintenance: false,
                }],
                servers,
                details,
                failing_detail: None,
                in_flight: AtomicUsize::new(0),
                peak_in_flight: AtomicUsize::new(0),
                requested: Mutex::new(Vec::new()),
            }
        }
    }

    impl InventoryService for FakeInventory {
        async fn list_nodes(&self) -> Result<Vec<Node>, InventoryError> {
            Ok(self.nodes.clone())
        }

        async fn list_servers(&self) -> Result<Vec<ServerSummary>, InventoryError> {
            Ok(self.servers.clone())
        }

        async fn get_server_detail(&self, id: u64) -> Result<ServerDetail, InventoryError> {
            let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.peak_in_flight.fetch_max(now, Ordering::SeqCst);
            self.requested.lock().unwrap().push(id);

            // Later servers answer sooner, so ordering must come from the stream
            tokio::time::sleep(Duration::from_millis(100 - id)).await;

            self.in_flight.fetch_sub(1, Ordering::SeqCst);

            if self.failing_detail == Some(id) {
                return Err(InventoryError::status(
                    &format!("/api/application/servers/{}", id),
                    500,
                    "boom",
                ));
            }
            Ok(self.details[&id].clone())
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_fetch_preserves_server_order() {
        let inventory = FakeInventory::with_servers(5);
        let snapshot = fetch_inventory(&inventory, None).await.unwrap();

        let ids: Vec<u64> = snapshot.servers.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert_eq!(snapshot.nodes.len(), 1);
        assert_eq!(snapshot.servers[2].owner_id, 103);
    }

    #[tokio::test(start_paused = true)]
    async fn test_unbounded_fanout_issues_all_lookups_together() {
        let inventory = FakeInventory::with_servers(6);
        fetch_inventory(&inventory, None).await.unwrap();
        assert_eq!(inventory.peak_in_flight.load(Ordering::SeqCst), 6);
    }

    #[tokio::test(start_paused = true)]
    async fn test_bounded_fanout_respects_limit() {
        let inventory = FakeInventory::with_servers(6);
        fetch_inventory(&inventory, Some(2)).await.unwrap();
        assert_eq!(inventory.peak_in_flight.load(Ordering::SeqCst), 2);
        assert_eq!(inventory.requested.lock().unwrap().len(), 6);
    }

    #[tokio::test(start_paused = true)]
    async fn test_single_detail_failure_fails_fetch() {
        let mut inventory = FakeInventory::with_servers(3);
        inventory.failing_detail = Some(2);

        let err = fetch_inventory(&inventory, None).await.unwrap_err();
        assert_eq!(err.endpoint(), Some("/api/application/servers/2"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_join_mismatch_is_rejected() {
        let mut inventory = FakeInventory::with_servers(2);
        if let Some(detail) = inventory.details.get_mut(&2) {
            detail.id = 99;
        }

        let err = fetch_inventory(&inventory, None).await.unwrap_err();
        assert!(matches!(
            err,
            InventoryError::JoinMismatch {
                requested: 2,
                returned: 99
            }
        ));
    }

    #[tokio::test]
    async fn test_empty_server_list_is_not_a_fetch_error() {
        let mut inventory = FakeInventory::with_servers(0);
        inventory.nodes.clear();
        let snapshot = fetch_inventory(&inventory, Some(4)).await.unwrap();
        assert!(snapshot.servers.is_empty());
        assert!(snapshot.nodes.is_empty());
    }
}
