//! FLOWNET core: maximum-flow and minimum-cut computation
//!
//! This crate computes the maximum feasible flow between a fixed source
//! (vertex `0`) and sink (last vertex) of a capacitated directed graph held
//! as a dense matrix, then derives the source side of a minimum edge cut
//! from the saturated residual graph. The boundary is deliberately narrow:
//! a capacity matrix in, a [`MaxFlowSummary`] out (total flow, signed flow
//! matrix, cut membership). Reading and writing files is left to
//! collaborators such as the `flownet` binary.
//!
//! # Algorithm
//! Edmonds-Karp: breadth-first search finds a shortest augmenting path in
//! the residual graph, the path's bottleneck is pushed, and the loop stops
//! at the first failed search, giving the standard `O(V·E²)` bound. A final
//! breadth-first sweep over positive-residual edges extracts the cut; by
//! max-flow/min-cut duality its capacity equals the total flow.
//!
//! # Invariants
//! - The flow matrix stays antisymmetric: `flow[u][v] == -flow[v][u]`.
//! - Residual capacity is derived (`capacity - flow`), never stored, and
//!   never negative on an edge of the static topology.
//! - All arithmetic is integer; construction rejects capacity totals the
//!   accumulator could not represent.
//! - The computation is single-threaded and synchronous; the network is
//!   exclusively owned for its whole lifetime.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod algorithm;
pub mod error;
pub mod network;

pub use self::algorithm::search::AugmentingPath;
pub use self::algorithm::solver::{max_flow, MaxFlowSolver, MaxFlowSummary, SolveMetrics};
pub use self::error::FlowError;
pub use self::network::FlowNetwork;
