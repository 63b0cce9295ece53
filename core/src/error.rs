//! Error taxonomy for flow-network computation
//!
//! Two failure classes exist and they are never conflated: invalid input,
//! which is rejected before any algorithmic work begins, and internal
//! invariant violations, which indicate an algorithm bug and abort the
//! computation. The algorithm is deterministic and terminating, so there is
//! no retry or partial-failure mode.

use thiserror::Error;

/// Errors surfaced by flow-network construction and solving.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlowError {
    /// The capacity matrix is not square.
    #[error("capacity row {row} has {actual} entries, expected {expected}")]
    RaggedMatrix {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// A capacity entry is negative.
    #[error("negative capacity {capacity} on edge {from} -> {to}")]
    NegativeCapacity {
        from: usize,
        to: usize,
        capacity: i64,
    },

    /// The capacity total exceeds what the flow accumulator can represent.
    #[error("capacity total overflows the 64-bit flow accumulator")]
    CapacityOverflow,

    /// An augmentation asked for more than an edge's residual capacity.
    ///
    /// The search constructs paths whose bottleneck never exceeds any edge
    /// residual, so this is an algorithm bug, not a data problem.
    #[error("augmentation of {amount} exceeds residual {residual} on edge {from} -> {to}")]
    ResidualOverrun {
        from: usize,
        to: usize,
        amount: i64,
        residual: i64,
    },

    /// Cut extraction reached the sink after the augmentation loop finished.
    ///
    /// At a maximum flow the sink must be unreachable in the residual graph;
    /// reaching it means the loop terminated early.
    #[error("sink still reachable in the residual graph after augmentation terminated")]
    SinkReachableAtOptimum,
}

impl FlowError {
    /// Whether this error denotes bad input rather than an internal bug.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            FlowError::RaggedMatrix { .. }
                | FlowError::NegativeCapacity { .. }
                | FlowError::CapacityOverflow
        )
    }
}
