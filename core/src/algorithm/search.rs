//! Breadth-first searches over the residual graph
//!
//! Two passes share one traversal predicate (an edge must exist in the
//! static topology *and* have positive residual capacity): the augmenting
//! path search, which stops the moment the sink is labeled, and the full
//! reachability sweep that cut extraction runs once the flow is maximal.
//! Both visit neighbors in ascending vertex order, so among equal-length
//! paths the first by vertex enumeration wins and the result is
//! deterministic.

use std::collections::VecDeque;

use crate::network::FlowNetwork;

/// Transient product of one augmenting-path search.
///
/// Holds a parent record covering exactly the vertices the search reached
/// from the source (the source is recorded as its own parent) and the
/// bottleneck residual of the path as a whole. Discarded after one
/// augmentation.
#[derive(Debug, Clone)]
pub struct AugmentingPath {
    parent: Vec<Option<usize>>,
    bottleneck: i64,
}

impl AugmentingPath {
    /// Smallest residual capacity along the path.
    #[inline]
    pub fn bottleneck(&self) -> i64 {
        self.bottleneck
    }

    /// The vertex that labeled `vertex`, or `None` if the search never
    /// reached it. The source is its own parent.
    pub fn parent_of(&self, vertex: usize) -> Option<usize> {
        self.parent.get(vertex).copied().flatten()
    }

    /// Directed edges of the path, traced from `sink` back to the
    /// self-parented source.
    pub fn edges(&self, sink: usize) -> Vec<(usize, usize)> {
        let mut edges = Vec::new();
        let mut child = sink;
        while let Some(parent) = self.parent_of(child) {
            if parent == child {
                break;
            }
            edges.push((parent, child));
            child = parent;
        }
        edges
    }
}

/// Finds a shortest (fewest-edges) augmenting path from source to sink, or
/// `None` when the sink is unreachable through positive-residual edges.
///
/// FIFO breadth-first search seeded with the source as visited and an
/// unbounded notional bottleneck, so the source is never the limiting
/// factor. The search terminates the moment the sink is labeled; no further
/// expansion is needed since BFS already guarantees the smallest hop count.
/// Degenerate networks (fewer than two vertices, where source and sink
/// coincide) have no augmenting path.
pub fn bfs_augmenting_path(network: &FlowNetwork) -> Option<AugmentingPath> {
    let vertex_count = network.vertex_count();
    if vertex_count < 2 {
        return None;
    }
    let source = network.source();
    let sink = network.sink();

    let mut parent: Vec<Option<usize>> = vec![None; vertex_count];
    let mut bottleneck = vec![0_i64; vertex_count];
    parent[source] = Some(source);
    bottleneck[source] = i64::MAX;

    let mut queue = VecDeque::from([source]);
    while let Some(current) = queue.pop_front() {
        for next in 0..vertex_count {
            if !network.has_edge(current, next) {
                continue;
            }
            let residual = network.residual(current, next);
            if residual <= 0 || parent[next].is_some() {
                continue;
            }
            parent[next] = Some(current);
            bottleneck[next] = bottleneck[current].min(residual);
            if next == sink {
                return Some(AugmentingPath {
                    parent,
                    bottleneck: bottleneck[sink],
                });
            }
            queue.push_back(next);
        }
    }
    None
}

/// Marks every vertex reachable from the source through positive-residual
/// edges.
///
/// Same predicate as the augmenting search but with no target vertex: the
/// sweep runs to exhaustion. At a maximum flow the marked set is the source
/// side of a minimum cut.
pub fn residual_reachable(network: &FlowNetwork) -> Vec<bool> {
    let vertex_count = network.vertex_count();
    let mut visited = vec![false; vertex_count];
    if vertex_count == 0 {
        return visited;
    }
    let source = network.source();
    visited[source] = true;

    let mut queue = VecDeque::from([source]);
    while let Some(current) = queue.pop_front() {
        for next in 0..vertex_count {
            if visited[next] || !network.has_edge(current, next) {
                continue;
            }
            if network.residual(current, next) <= 0 {
                continue;
            }
            visited[next] = true;
            queue.push_back(next);
        }
    }
    visited
}
