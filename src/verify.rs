//! Structural checks over a returned edge list.
//!
//! Rebuilds components from the edges alone, so a result can be checked
//! independently of the engine that produced it.

use crate::counter::OperationCounter;
use crate::graph::Graph;
use crate::report::MstEdge;
use crate::union_find::DisjointSet;
use std::collections::VecDeque;

/// Resolve labelled edges to index pairs. None if any label is unknown.
fn resolve(graph: &Graph, edges: &[MstEdge]) -> Option<Vec<(usize, usize)>> {
    edges
        .iter()
        .map(|e| Some((graph.node_index(&e.from)?, graph.node_index(&e.to)?)))
        .collect()
}

/// True if no edge closes a cycle among the ones before it.
pub fn is_acyclic(graph: &Graph, edges: &[MstEdge]) -> bool {
    let Some(pairs) = resolve(graph, edges) else {
        return false;
    };

    let mut scratch = OperationCounter::new();
    let mut sets = DisjointSet::with_capacity(graph.len());
    for v in 0..graph.len() {
        sets.make_set(v, &mut scratch);
    }
    pairs
        .into_iter()
        .all(|(u, v)| matches!(sets.union(u, v, &mut scratch), Ok(true)))
}

/// All nodes reachable from `source` over `edges` (BFS), including the source.
pub fn reachable_from(graph: &Graph, edges: &[MstEdge], source: usize) -> Vec<usize> {
    let n = graph.len();
    if source >= n {
        return Vec::new();
    }
    let Some(pairs) = resolve(graph, edges) else {
        return vec![source];
    };

    let mut adj = vec![Vec::new(); n];
    for (u, v) in pairs {
        adj[u].push(v);
        adj[v].push(u);
    }

    let mut visited = vec![false; n];
    let mut queue = VecDeque::new();
    let mut result = Vec::new();

    queue.push_back(source);
    visited[source] = true;

    while let Some(v) = queue.pop_front() {
        result.push(v);
        for &w in &adj[v] {
            if !visited[w] {
                visited[w] = true;
                queue.push_back(w);
            }
        }
    }

    result
}

/// True if `edges` connect every node of `graph`. An empty graph is spanned.
pub fn spans(graph: &Graph, edges: &[MstEdge]) -> bool {
    graph.is_empty() || reachable_from(graph, edges, 0).len() == graph.len()
}

/// N-1 edges, acyclic, connecting every node.
pub fn is_spanning_tree(graph: &Graph, edges: &[MstEdge]) -> bool {
    edges.len() + 1 == graph.len() && is_acyclic(graph, edges) && spans(graph, edges)
}
