//! Residual flow-network state
//!
//! This module owns the only mutable state of a max-flow computation: the
//! immutable capacity matrix and the antisymmetric flow matrix. Residual
//! capacities are derived quantities, recomputed on demand as
//! `capacity[u][v] - flow[u][v]` and never stored. Augmentation is the sole
//! mutation path and validates every edge of the path against its residual
//! capacity before touching any entry.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use serde::{Deserialize, Serialize};

use crate::algorithm::search::AugmentingPath;
use crate::error::FlowError;

/// Dense residual graph over a fixed vertex set.
///
/// Vertex `0` is the source and `vertex_count - 1` the sink. The flow matrix
/// maintains `flow[u][v] == -flow[v][u]`, so a negative entry represents
/// cancellable reverse flow and an edge's residual can exceed its nominal
/// capacity while the flow on it is negative.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlowNetwork {
    vertex_count: usize,
    capacity: Vec<Vec<i64>>,
    flow: Vec<Vec<i64>>,
}

impl FlowNetwork {
    /// Builds a network from a square matrix of non-negative capacities.
    ///
    /// Rejects, before any algorithmic work: a ragged matrix, a negative
    /// capacity, and a capacity total too large for the `i64` flow
    /// accumulator.
    pub fn from_capacities(capacity: Vec<Vec<i64>>) -> Result<Self, FlowError> {
        let vertex_count = capacity.len();
        let mut total: i128 = 0;
        for (from, row) in capacity.iter().enumerate() {
            if row.len() != vertex_count {
                return Err(FlowError::RaggedMatrix {
                    row: from,
                    expected: vertex_count,
                    actual: row.len(),
                });
            }
            for (to, &edge_capacity) in row.iter().enumerate() {
                if edge_capacity < 0 {
                    return Err(FlowError::NegativeCapacity {
                        from,
                        to,
                        capacity: edge_capacity,
                    });
                }
                total += i128::from(edge_capacity);
            }
        }
        if total > i128::from(i64::MAX) {
            return Err(FlowError::CapacityOverflow);
        }
        Ok(Self {
            vertex_count,
            flow: vec![vec![0; vertex_count]; vertex_count],
            capacity,
        })
    }

    /// Number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// The fixed source vertex.
    #[inline]
    pub fn source(&self) -> usize {
        0
    }

    /// The fixed sink vertex (`vertex_count - 1`; coincides with the source
    /// in the degenerate single-vertex network).
    #[inline]
    pub fn sink(&self) -> usize {
        self.vertex_count.saturating_sub(1)
    }

    /// Nominal capacity of the directed edge `from -> to`.
    #[inline]
    pub fn capacity(&self, from: usize, to: usize) -> i64 {
        self.capacity[from][to]
    }

    /// Signed flow currently assigned to the directed edge `from -> to`.
    #[inline]
    pub fn flow(&self, from: usize, to: usize) -> i64 {
        self.flow[from][to]
    }

    /// Whether the edge `from -> to` exists in the static topology.
    ///
    /// Distinct from a positive-residual query: an edge can exist with zero
    /// remaining residual, which is not the same condition as no edge
    /// existing at all.
    #[inline]
    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        self.capacity[from][to] > 0
    }

    /// Residual capacity of `from -> to`: `capacity - flow`. No side effects.
    #[inline]
    pub fn residual(&self, from: usize, to: usize) -> i64 {
        self.capacity[from][to] - self.flow[from][to]
    }

    /// Pushes `amount` units of flow along every edge of `path`.
    ///
    /// Each path edge `(parent, child)` receives `flow[parent][child] +=
    /// amount` and `flow[child][parent] -= amount`, preserving antisymmetry.
    /// The whole path is checked first; an `amount` exceeding any edge's
    /// residual capacity surfaces as [`FlowError::ResidualOverrun`] with no
    /// partial mutation.
    pub fn augment(&mut self, path: &AugmentingPath, amount: i64) -> Result<(), FlowError> {
        let edges = path.edges(self.sink());
        for &(from, to) in &edges {
            let residual = self.residual(from, to);
            if amount > residual {
                return Err(FlowError::ResidualOverrun {
                    from,
                    to,
                    amount,
                    residual,
                });
            }
        }
        for &(from, to) in &edges {
            self.flow[from][to] += amount;
            self.flow[to][from] -= amount;
        }
        Ok(())
    }

    /// Capacity of the cut defined by `source_side`: the sum of
    /// `capacity[u][v]` over edges leaving the set.
    ///
    /// At a maximum flow the capacity of the extracted minimum cut equals the
    /// total flow; this is the duality witness callers can verify.
    pub fn cut_capacity(&self, source_side: &[usize]) -> i64 {
        let mut inside = vec![false; self.vertex_count];
        for &vertex in source_side {
            inside[vertex] = true;
        }
        let mut total = 0;
        for from in 0..self.vertex_count {
            if !inside[from] {
                continue;
            }
            for to in 0..self.vertex_count {
                if !inside[to] {
                    total += self.capacity[from][to];
                }
            }
        }
        total
    }

    /// Consumes the network, yielding the signed flow matrix.
    pub fn into_flow(self) -> Vec<Vec<i64>> {
        self.flow
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::search::bfs_augmenting_path;

    fn two_vertex_network() -> FlowNetwork {
        FlowNetwork::from_capacities(vec![vec![0, 5], vec![0, 0]]).unwrap()
    }

    #[test]
    fn rejects_ragged_matrix() {
        let err = FlowNetwork::from_capacities(vec![vec![0, 1], vec![0]]).unwrap_err();
        assert_eq!(
            err,
            FlowError::RaggedMatrix {
                row: 1,
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn rejects_negative_capacity() {
        let err = FlowNetwork::from_capacities(vec![vec![0, -3], vec![0, 0]]).unwrap_err();
        assert_eq!(
            err,
            FlowError::NegativeCapacity {
                from: 0,
                to: 1,
                capacity: -3
            }
        );
    }

    #[test]
    fn rejects_capacity_total_overflow() {
        let huge = i64::MAX / 2 + 1;
        let err =
            FlowNetwork::from_capacities(vec![vec![0, huge], vec![huge, 0]]).unwrap_err();
        assert_eq!(err, FlowError::CapacityOverflow);
    }

    #[test]
    fn residual_tracks_flow() {
        let mut network = two_vertex_network();
        assert_eq!(network.residual(0, 1), 5);

        let path = bfs_augmenting_path(&network).unwrap();
        network.augment(&path, 3).unwrap();

        assert_eq!(network.residual(0, 1), 2);
        // Reverse residual exceeds the nominal (zero) capacity while the
        // forward edge carries flow.
        assert_eq!(network.residual(1, 0), 3);
        assert_eq!(network.flow(0, 1), 3);
        assert_eq!(network.flow(1, 0), -3);
    }

    #[test]
    fn edge_existence_is_independent_of_residual() {
        let mut network = two_vertex_network();
        let path = bfs_augmenting_path(&network).unwrap();
        network.augment(&path, 5).unwrap();

        // Saturated edge still exists; absent edge never does.
        assert!(network.has_edge(0, 1));
        assert_eq!(network.residual(0, 1), 0);
        assert!(!network.has_edge(1, 0));
        assert!(network.residual(1, 0) > 0);
    }

    #[test]
    fn augment_rejects_overrun_without_mutating() {
        let mut network = two_vertex_network();
        let path = bfs_augmenting_path(&network).unwrap();
        let err = network.augment(&path, 6).unwrap_err();
        assert_eq!(
            err,
            FlowError::ResidualOverrun {
                from: 0,
                to: 1,
                amount: 6,
                residual: 5
            }
        );
        assert_eq!(network.flow(0, 1), 0);
    }

    #[test]
    fn cut_capacity_sums_leaving_edges_only() {
        let network = FlowNetwork::from_capacities(vec![
            vec![0, 3, 2, 0],
            vec![0, 0, 0, 2],
            vec![0, 0, 0, 3],
            vec![0, 0, 0, 0],
        ])
        .unwrap();
        assert_eq!(network.cut_capacity(&[0]), 5);
        assert_eq!(network.cut_capacity(&[0, 1]), 4);
        assert_eq!(network.cut_capacity(&[0, 1, 2]), 5);
    }
}
