//! Minimum spanning tree engines.

pub mod kruskal;
pub mod prim;

pub use kruskal::{kruskal, kruskal_edges};
pub use prim::{prim, prim_edges, PrimStrategy};

use crate::error::Result;
use crate::graph::{Edge, Graph};
use crate::report::{Algorithm, Comparison, MstEdge, MstResult};

/// Accepted edges of one run, in acceptance order, with their running total.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpanningEdges {
    pub edges: Vec<Edge>,
    pub total_weight: u64,
}

impl SpanningEdges {
    pub(crate) fn with_capacity(n: usize) -> Self {
        Self {
            edges: Vec::with_capacity(n),
            total_weight: 0,
        }
    }

    pub(crate) fn push(&mut self, edge: Edge) {
        self.total_weight += u64::from(edge.weight);
        self.edges.push(edge);
    }
}

/// Replace node indices with the graph's labels.
pub(crate) fn label_edges(graph: &Graph, edges: &[Edge]) -> Vec<MstEdge> {
    let nodes = graph.nodes();
    edges
        .iter()
        .map(|e| MstEdge::new(nodes[e.from].as_str(), nodes[e.to].as_str(), e.weight))
        .collect()
}

/// Run the chosen engine. `strategy` only affects Prim.
pub fn run(graph: &Graph, algorithm: Algorithm, strategy: PrimStrategy) -> Result<MstResult> {
    match algorithm {
        Algorithm::Kruskal => kruskal(graph),
        Algorithm::Prim => prim(graph, strategy),
    }
}

/// Run both engines on the same graph, each with its own counter.
pub fn compare(graph: &Graph, strategy: PrimStrategy) -> Result<Comparison> {
    let kruskal = kruskal(graph)?;
    let prim = prim(graph, strategy)?;
    if kruskal.total_weight() != prim.total_weight() {
        log::debug!(
            "graph {}: kruskal weight {} differs from prim weight {}",
            graph.id(),
            kruskal.total_weight(),
            prim.total_weight()
        );
    }
    Ok(Comparison { kruskal, prim })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verify;

    fn triangle() -> Graph {
        let mut g = Graph::new(5);
        for n in ["A", "B", "C"] {
            g.add_node(n).unwrap();
        }
        g.add_edge("A", "B", 1).unwrap();
        g.add_edge("B", "C", 2).unwrap();
        g.add_edge("A", "C", 3).unwrap();
        g
    }

    #[test]
    fn test_compare_triangle() {
        let g = triangle();
        let cmp = compare(&g, PrimStrategy::default()).unwrap();
        assert!(cmp.weights_match());
        assert_eq!(cmp.kruskal.total_weight(), 3);
        assert_eq!(cmp.kruskal.edges(), cmp.prim.edges());
        assert!(verify::is_spanning_tree(&g, cmp.kruskal.edges()));
        assert!(verify::is_spanning_tree(&g, cmp.prim.edges()));
    }

    #[test]
    fn test_disconnected_asymmetry() {
        let mut g = Graph::new(2);
        for n in ["A", "B", "C", "D"] {
            g.add_node(n).unwrap();
        }
        g.add_edge("A", "B", 1).unwrap();
        g.add_edge("C", "D", 2).unwrap();

        let cmp = compare(&g, PrimStrategy::default()).unwrap();
        assert_eq!(cmp.kruskal.edges().len(), 2);
        assert_eq!(cmp.kruskal.total_weight(), 3);
        assert_eq!(cmp.prim.edges().len(), 1);
        assert_eq!(cmp.prim.total_weight(), 1);
        assert!(!cmp.weights_match());
    }

    #[test]
    fn test_compare_empty_graph_fails_on_prim() {
        let g = Graph::new(0);
        assert!(kruskal(&g).is_ok());
        assert!(compare(&g, PrimStrategy::default()).is_err());
    }

    #[test]
    fn test_run_dispatch() {
        let g = triangle();
        let k = run(&g, Algorithm::Kruskal, PrimStrategy::default()).unwrap();
        let p = run(&g, Algorithm::Prim, PrimStrategy::TrackOrigin).unwrap();
        assert_eq!(k.algorithm(), Algorithm::Kruskal);
        assert_eq!(p.algorithm(), Algorithm::Prim);
        assert_eq!(k.total_weight(), p.total_weight());
    }

    #[test]
    fn test_spanning_edges_total() {
        let mut s = SpanningEdges::with_capacity(2);
        s.push(Edge::new(0, 1, 4));
        s.push(Edge::new(1, 2, 6));
        assert_eq!(s.total_weight, 10);
        assert_eq!(s.edges.len(), 2);
    }
}
