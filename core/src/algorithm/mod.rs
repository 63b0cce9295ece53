//! Flow-network algorithms: augmenting-path search and solver orchestration
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod search;
pub mod solver;

pub use self::search::{bfs_augmenting_path, residual_reachable, AugmentingPath};
pub use self::solver::{max_flow, MaxFlowSolver, MaxFlowSummary, SolveMetrics};
