//! Remote inventory service trait definition.

use std::future::Future;

use super::errors::InventoryError;
use super::types::{Node, ServerDetail, ServerSummary};

/// Read-only view of a panel's inventory.
///
/// All three operations are idempotent reads. Implementations report any
/// non-success answer as an [`InventoryError`]; callers make no distinction
/// between auth, client, server and network failures.
pub trait InventoryService: Send + Sync {
    /// List every node known to the panel, in panel order.
    fn list_nodes(&self) -> impl Future<Output = Result<Vec<Node>, InventoryError>> + Send;

    /// List every server known to the panel, in panel order.
    fn list_servers(
        &self,
    ) -> impl Future<Output = Result<Vec<ServerSummary>, InventoryError>> + Send;

    /// Look up limits and owner for one server.
    fn get_server_detail(
        &self,
        id: u64,
    ) -> impl Future<Output = Result<ServerDetail, InventoryError>> + Send;
}
