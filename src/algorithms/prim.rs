//! Prim's minimum spanning tree.
//!
//! Grows one tree from the first node in the node list using a min-heap
//! frontier. Frontier entries whose target was visited after they were pushed
//! are discarded when popped. On a disconnected graph the frontier drains
//! before every node is visited and the result is the tree around the start
//! node only.

use super::{label_edges, SpanningEdges};
use crate::counter::OperationCounter;
use crate::error::{MstError, Result};
use crate::graph::{Adjacency, Edge, Graph};
use crate::report::{Algorithm, MstResult};
use crate::timing::Stopwatch;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// How an accepted frontier edge finds its tree-side endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PrimStrategy {
    /// Scan the incident edges of visited nodes, in visit order, for the first
    /// one matching target and weight. Every comparison is counted, which keeps
    /// operation counts comparable with existing result files.
    #[default]
    ReconcileScan,
    /// Use the origin recorded on the frontier entry. No scan, no scan cost.
    TrackOrigin,
}

/// Frontier entry. Ordered by weight, then push order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Candidate {
    weight: u32,
    seq: usize,
    to: usize,
    origin: usize,
}

struct Frontier {
    heap: BinaryHeap<Reverse<Candidate>>,
    next_seq: usize,
}

impl Frontier {
    fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    fn push(&mut self, origin: usize, to: usize, weight: u32) {
        self.heap.push(Reverse(Candidate {
            weight,
            seq: self.next_seq,
            to,
            origin,
        }));
        self.next_seq += 1;
    }

    fn pop(&mut self) -> Option<Candidate> {
        self.heap.pop().map(|Reverse(c)| c)
    }
}

/// First visited node (in visit order) with an incident edge to `target` of
/// the given weight. One operation per comparison.
fn reconcile_origin(
    adjacency: &Adjacency,
    visit_order: &[usize],
    target: usize,
    weight: u32,
    ops: &mut OperationCounter,
) -> Option<usize> {
    for &v in visit_order {
        for &(to, w) in adjacency.neighbors(v) {
            ops.tick();
            if to == target && w == weight {
                return Some(v);
            }
        }
    }
    None
}

/// Run Prim over a prebuilt adjacency view, charging work to `ops`.
///
/// Cost: one per edge pushed from the start node, one per pop, one per
/// reconciliation comparison (scan strategy only), and one per edge considered
/// from each newly visited node.
pub fn prim_edges(
    graph: &Graph,
    adjacency: &Adjacency,
    strategy: PrimStrategy,
    ops: &mut OperationCounter,
) -> Result<SpanningEdges> {
    let n = graph.len();
    if n == 0 {
        return Err(MstError::EmptyGraph(graph.id()));
    }

    let start = 0;
    let mut visited = vec![false; n];
    let mut visit_order = Vec::with_capacity(n);
    visited[start] = true;
    visit_order.push(start);

    let mut frontier = Frontier::new();
    for &(to, weight) in adjacency.neighbors(start) {
        frontier.push(start, to, weight);
        ops.tick();
    }

    let mut tree = SpanningEdges::with_capacity(n - 1);
    while visit_order.len() < n {
        let Some(candidate) = frontier.pop() else {
            break;
        };
        ops.tick();

        if visited[candidate.to] {
            log::trace!("prim discarded stale entry to {}", candidate.to);
            continue;
        }

        let from = match strategy {
            PrimStrategy::TrackOrigin => candidate.origin,
            PrimStrategy::ReconcileScan => reconcile_origin(
                adjacency,
                &visit_order,
                candidate.to,
                candidate.weight,
                ops,
            )
            .unwrap_or(candidate.origin),
        };

        log::trace!(
            "prim accepted {} - {} ({})",
            from,
            candidate.to,
            candidate.weight
        );
        tree.push(Edge::new(from, candidate.to, candidate.weight));
        visited[candidate.to] = true;
        visit_order.push(candidate.to);

        for &(next, weight) in adjacency.neighbors(candidate.to) {
            ops.tick();
            if !visited[next] {
                frontier.push(candidate.to, next, weight);
            }
        }
    }

    Ok(tree)
}

/// Prim's MST as a timed result record.
///
/// Fails with [`MstError::EmptyGraph`] when there is no start node.
pub fn prim(graph: &Graph, strategy: PrimStrategy) -> Result<MstResult> {
    let adjacency = Adjacency::new(graph);
    let mut ops = OperationCounter::new();
    let watch = Stopwatch::start();
    let tree = prim_edges(graph, &adjacency, strategy, &mut ops)?;
    let elapsed = watch.elapsed_ms();

    if tree.edges.len() + 1 < graph.len() {
        log::debug!(
            "prim on graph {} reached {} of {} nodes",
            graph.id(),
            tree.edges.len() + 1,
            graph.len()
        );
    }
    log::debug!(
        "prim on graph {}: {} edges, weight {}, {} ops",
        graph.id(),
        tree.edges.len(),
        tree.total_weight,
        ops.get()
    );

    Ok(MstResult::new(
        graph.id(),
        Algorithm::Prim,
        label_edges(graph, &tree.edges),
        tree.total_weight,
        elapsed,
        ops.get(),
    ))
}
