use crate::aggregate::errors::AggregateError;
use crate::aggregate::types::{Aggregate, NodeStatus, ResourceDimension, ResourceExtrema};
use crate::inventory::types::{Node, ServerDetail};

/// Classify every node, in the order given.
pub fn classify_nodes(nodes: &[Node]) -> Vec<(Node, NodeStatus)> {
    nodes
        .iter()
        .map(|node| (node.clone(), NodeStatus::from_maintenance(node.under_maintenance)))
        .collect()
}

/// Find the server with the largest limit in `dimension`.
///
/// Scans left to right and replaces the running best only on a strictly
/// greater value, so on a tie the earliest server in `details` wins.
/// Returns `None` only for an empty slice.
pub fn max_by_dimension(
    details: &[ServerDetail],
    dimension: ResourceDimension,
) -> Option<&ServerDetail> {
    let (first, rest) = details.split_first()?;
    let mut best = first;
    for candidate in rest {
        if dimension.value(candidate) > dimension.value(best) {
            best = candidate;
        }
    }
    Some(best)
}

/// Compute per-dimension extrema over `details`.
pub fn compute_extrema(details: &[ServerDetail]) -> Result<ResourceExtrema, AggregateError> {
    let pick = |dimension| {
        max_by_dimension(details, dimension)
            .cloned()
            .ok_or(AggregateError::EmptyServerSet)
    };

    Ok(ResourceExtrema {
        cpu: pick(ResourceDimension::Cpu)?,
        disk: pick(ResourceDimension::Disk)?,
        memory: pick(ResourceDimension::Memory)?,
    })
}

/// Aggregate one cycle's inventory.
///
/// Pure: recomputed from scratch on every call. Fails with
/// [`AggregateError::EmptyServerSet`] when `details` is empty instead of
/// producing extrema over nothing.
pub fn aggregate(nodes: &[Node], details: &[ServerDetail]) -> Result<Aggregate, AggregateError> {
    let extrema = compute_extrema(details)?;
    Ok(Aggregate {
        node_statuses: classify_nodes(nodes),
        extrema,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server(id: u64, cpu: u64, disk: u64, memory: u64, owner: u64) -> ServerDetail {
        ServerDetail {
            id,
            name: format!("server{}", id),
            owner_id: owner,
            cpu_limit: cpu,
            disk_limit: disk,
            memory_limit: memory,
        }
    }

    fn node(id: u64, name: &str, under_maintenance: bool) -> Node {
        Node {
            id,
            name: name.to_string(),
            under_maintenance,
        }
    }

    #[test]
    fn test_reference_scenario() {
        let nodes = vec![node(1, "A", false), node(2, "B", true)];
        let details = vec![server(1, 10, 100, 1000, 1), server(2, 20, 50, 1000, 2)];

        let result = aggregate(&nodes, &details).unwrap();

        assert_eq!(result.extrema.cpu.id, 2);
        assert_eq!(result.extrema.cpu.owner_id, 2);
        assert_eq!(result.extrema.disk.id, 1);
        assert_eq!(result.extrema.disk.owner_id, 1);
        // Memory tie: first encountered wins
        assert_eq!(result.extrema.memory.id, 1);
        assert_eq!(result.extrema.memory.owner_id, 1);

        assert_eq!(result.node_statuses[0].1, NodeStatus::Online);
        assert_eq!(result.node_statuses[1].1, NodeStatus::UnderMaintenance);
    }

    #[test]
    fn test_empty_details_signal_empty_server_set() {
        let nodes = vec![node(1, "A", false)];
        let result = aggregate(&nodes, &[]);
        assert!(matches!(result, Err(AggregateError::EmptyServerSet)));

        assert!(matches!(
            compute_extrema(&[]),
            Err(AggregateError::EmptyServerSet)
        ));
    }

    #[test]
    fn test_single_server_fills_every_slot() {
        let details = vec![server(9, 1, 1, 1, 4)];
        let extrema = compute_extrema(&details).unwrap();
        for dimension in ResourceDimension::ALL {
            assert_eq!(extrema.get(dimension).id, 9);
        }
    }

    #[test]
    fn test_tie_keeps_earliest_even_after_larger_then_equal() {
        let details = vec![
            server(1, 5, 0, 0, 1),
            server(2, 30, 0, 0, 2),
            server(3, 30, 0, 0, 3),
            server(4, 10, 0, 0, 4),
        ];
        let best = max_by_dimension(&details, ResourceDimension::Cpu).unwrap();
        assert_eq!(best.id, 2);
    }

    #[test]
    fn test_all_equal_picks_first() {
        let details: Vec<ServerDetail> = (1..=5).map(|id| server(id, 7, 7, 7, id)).collect();
        let extrema = compute_extrema(&details).unwrap();
        assert_eq!(extrema.cpu.id, 1);
        assert_eq!(extrema.disk.id, 1);
        assert_eq!(extrema.memory.id, 1);
    }

    #[test]
    fn test_extrema_dominates_every_server() {
        // Deterministic pseudo-random limits, many ties
        let mut seed: u64 = 0x2545_f491_4f6c_dd1d;
        let mut next = || {
            seed ^= seed << 13;
            seed ^= seed >> 7;
            seed ^= seed << 17;
            seed % 8
        };

        for round in 0..50 {
            let details: Vec<ServerDetail> = (0..(round % 9 + 1))
                .map(|id| server(id, next(), next(), next(), id))
                .collect();
            let extrema = compute_extrema(&details).unwrap();

            for dimension in ResourceDimension::ALL {
                let winner = extrema.get(dimension);
                let winner_value = dimension.value(winner);
                assert!(details.iter().all(|s| winner_value >= dimension.value(s)));

                let first_max = details
                    .iter()
                    .position(|s| dimension.value(s) == winner_value)
                    .unwrap();
                assert_eq!(details[first_max].id, winner.id);
            }
        }
    }

    #[test]
    fn test_classify_preserves_order() {
        let nodes = vec![
            node(3, "zeta", true),
            node(1, "alpha", false),
            node(2, "mid", true),
        ];
        let names: Vec<(String, NodeStatus)> = classify_nodes(&nodes)
            .into_iter()
            .map(|(n, s)| (n.name, s))
            .collect();
        assert_eq!(
            names,
            vec![
                ("zeta".to_string(), NodeStatus::UnderMaintenance),
                ("alpha".to_string(), NodeStatus::Online),
                ("mid".to_string(), NodeStatus::UnderMaintenance),
            ]
        );
    }

    #[test]
    fn test_status_is_pure_function_of_flag() {
        assert_eq!(NodeStatus::from_maintenance(true), NodeStatus::UnderMaintenance);
        assert_eq!(NodeStatus::from_maintenance(false), NodeStatus::Online);
        assert_eq!(NodeStatus::UnderMaintenance.to_string(), "Under Maintenance");
    }
}
