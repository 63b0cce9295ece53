//! Max-flow orchestration and minimum-cut extraction
//!
//! The solver drives the augment-until-exhausted loop of Edmonds-Karp:
//! repeatedly search the residual graph for a shortest augmenting path,
//! push its bottleneck, and stop at the first failed search. Termination is
//! guaranteed because every augmentation increases the total flow by a
//! positive integer and the total is bounded by the capacity leaving the
//! source. A final reachability sweep over the saturated residual graph
//! yields the source side of a minimum cut.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::algorithm::search::{bfs_augmenting_path, residual_reachable};
use crate::error::FlowError;
use crate::network::FlowNetwork;

/// Complete result of one max-flow computation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaxFlowSummary {
    /// Net flow out of the source (equivalently, into the sink).
    pub total_flow: i64,
    /// Signed, antisymmetric flow matrix.
    pub flow: Vec<Vec<i64>>,
    /// Sorted 0-based vertices on the source side of a minimum cut.
    /// Always contains the source; never the sink (except in the
    /// degenerate single-vertex network, where they coincide).
    pub min_cut: Vec<usize>,
    /// Work counters for the solve.
    pub metrics: SolveMetrics,
}

impl MaxFlowSummary {
    /// Flow matrix with negative entries clamped to zero, for display.
    ///
    /// A negative entry is a cancelled or reverse pseudo-flow; internal
    /// computation uses the signed values, external reporting does not.
    pub fn clamped_flow(&self) -> Vec<Vec<i64>> {
        self.flow
            .iter()
            .map(|row| row.iter().map(|&value| value.max(0)).collect())
            .collect()
    }
}

/// Work counters accumulated over one solve.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveMetrics {
    /// Augmenting paths pushed.
    pub augmentations: usize,
    /// Breadth-first searches run, including the final failing one.
    pub searches: usize,
}

/// Sequential Edmonds-Karp driver.
///
/// Owns the network exclusively for the lifetime of one computation; the
/// search passes borrow it immutably and augmentation is the only mutation.
#[derive(Debug, Default)]
pub struct MaxFlowSolver {
    metrics: SolveMetrics,
}

impl MaxFlowSolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs the computation to completion: augmentation loop, then cut
    /// extraction.
    pub fn solve(mut self, mut network: FlowNetwork) -> Result<MaxFlowSummary, FlowError> {
        let total_flow = self.saturate(&mut network)?;
        let min_cut = self.extract_source_side(&network)?;
        info!(
            "maximum flow {} over {} vertices after {} augmentations; source-side cut has {} vertices",
            total_flow,
            network.vertex_count(),
            self.metrics.augmentations,
            min_cut.len()
        );
        Ok(MaxFlowSummary {
            total_flow,
            min_cut,
            metrics: self.metrics,
            flow: network.into_flow(),
        })
    }

    /// Augments until no positive-bottleneck path remains, returning the
    /// total flow pushed.
    fn saturate(&mut self, network: &mut FlowNetwork) -> Result<i64, FlowError> {
        let mut total_flow = 0_i64;
        loop {
            self.metrics.searches += 1;
            let path = match bfs_augmenting_path(network) {
                Some(path) => path,
                None => break,
            };
            let bottleneck = path.bottleneck();
            if bottleneck == 0 {
                break;
            }
            network.augment(&path, bottleneck)?;
            total_flow += bottleneck;
            self.metrics.augmentations += 1;
            debug!(
                "augmentation {}: pushed {}, total flow now {}",
                self.metrics.augmentations, bottleneck, total_flow
            );
        }
        Ok(total_flow)
    }

    /// Sweeps the residual graph from the source; the visited set is the
    /// source side of a minimum cut.
    ///
    /// Reaching the sink here means the augmentation loop stopped short of a
    /// maximum flow, which is surfaced as a fatal invariant violation rather
    /// than a silent result.
    fn extract_source_side(&self, network: &FlowNetwork) -> Result<Vec<usize>, FlowError> {
        if network.vertex_count() == 0 {
            return Ok(Vec::new());
        }
        let reachable = residual_reachable(network);
        if network.vertex_count() > 1 && reachable[network.sink()] {
            return Err(FlowError::SinkReachableAtOptimum);
        }
        Ok(reachable
            .iter()
            .enumerate()
            .filter(|&(_, &visited)| visited)
            .map(|(vertex, _)| vertex)
            .collect())
    }
}

/// Convenience entry point: validate capacities, solve, summarize.
pub fn max_flow(capacity: Vec<Vec<i64>>) -> Result<MaxFlowSummary, FlowError> {
    let network = FlowNetwork::from_capacities(capacity)?;
    MaxFlowSolver::new().solve(network)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_edge_network_saturates() {
        let summary = max_flow(vec![vec![0, 5], vec![0, 0]]).unwrap();
        assert_eq!(summary.total_flow, 5);
        assert_eq!(summary.min_cut, vec![0]);
        assert_eq!(summary.flow[0][1], 5);
        assert_eq!(summary.flow[1][0], -5);
    }

    #[test]
    fn counts_searches_and_augmentations() {
        let summary = max_flow(vec![vec![0, 5], vec![0, 0]]).unwrap();
        // One successful search, then the failing one that ends the loop.
        assert_eq!(
            summary.metrics,
            SolveMetrics {
                augmentations: 1,
                searches: 2
            }
        );
    }

    #[test]
    fn clamps_reverse_flow_for_display() {
        let summary = max_flow(vec![vec![0, 5], vec![0, 0]]).unwrap();
        let clamped = summary.clamped_flow();
        assert_eq!(clamped[0][1], 5);
        assert_eq!(clamped[1][0], 0);
    }

    #[test]
    fn empty_network_yields_empty_summary() {
        let summary = max_flow(vec![]).unwrap();
        assert_eq!(summary.total_flow, 0);
        assert!(summary.min_cut.is_empty());
        assert!(summary.flow.is_empty());
    }

    #[test]
    fn single_vertex_network_is_degenerate() {
        let summary = max_flow(vec![vec![0]]).unwrap();
        assert_eq!(summary.total_flow, 0);
        assert_eq!(summary.min_cut, vec![0]);
        assert_eq!(summary.metrics.augmentations, 0);
    }

    #[test]
    fn propagates_input_rejection() {
        let err = max_flow(vec![vec![0, -1], vec![0, 0]]).unwrap_err();
        assert!(err.is_invalid_input());
    }
}
