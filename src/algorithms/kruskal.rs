//! Kruskal's minimum spanning tree.
//!
//! Sorts edges by weight (stable, so equal weights keep input order) and
//! accepts each edge whose endpoints are still in different components.
//! The scan always covers every edge: a disconnected graph yields a spanning
//! forest with one tree per component.

use super::{label_edges, SpanningEdges};
use crate::counter::OperationCounter;
use crate::error::Result;
use crate::graph::{Edge, Graph};
use crate::report::{Algorithm, MstResult};
use crate::timing::Stopwatch;
use crate::union_find::DisjointSet;

/// Run Kruskal over `graph`, charging work to `ops`.
///
/// Cost: one per `make_set`, the edge count for the sort, one per edge
/// examined, plus the `find`/`union` costs from [`DisjointSet`].
pub fn kruskal_edges(graph: &Graph, ops: &mut OperationCounter) -> Result<SpanningEdges> {
    let n = graph.len();
    let mut sets = DisjointSet::with_capacity(n);
    for v in 0..n {
        sets.make_set(v, ops);
    }

    let mut sorted: Vec<Edge> = graph.edges().to_vec();
    sorted.sort_by_key(|e| e.weight);
    ops.add(sorted.len());

    let mut forest = SpanningEdges::with_capacity(n.saturating_sub(1));
    for edge in &sorted {
        let root_from = sets.find(edge.from, ops)?;
        let root_to = sets.find(edge.to, ops)?;
        if root_from != root_to {
            sets.union(edge.from, edge.to, ops)?;
            log::trace!(
                "kruskal accepted {} - {} ({})",
                edge.from,
                edge.to,
                edge.weight
            );
            forest.push(*edge);
        }
        ops.tick();
    }

    Ok(forest)
}

/// Kruskal's MST (or spanning forest) as a timed result record.
///
/// A graph with no nodes gives an empty result, not an error.
pub fn kruskal(graph: &Graph) -> Result<MstResult> {
    let mut ops = OperationCounter::new();
    let watch = Stopwatch::start();
    let forest = kruskal_edges(graph, &mut ops)?;
    let elapsed = watch.elapsed_ms();

    log::debug!(
        "kruskal on graph {}: {} edges, weight {}, {} ops",
        graph.id(),
        forest.edges.len(),
        forest.total_weight,
        ops.get()
    );

    Ok(MstResult::new(
        graph.id(),
        Algorithm::Kruskal,
        label_edges(graph, &forest.edges),
        forest.total_weight,
        elapsed,
        ops.get(),
    ))
}
