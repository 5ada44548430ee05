//! Undirected weighted graph model.
//!
//! Nodes are opaque string labels, stored in insertion order and addressed by
//! index internally. Every edge endpoint is checked at insertion time, so a
//! `Graph` value never holds an edge to a node outside its node set.

use crate::error::{self, MstError};
use std::collections::HashMap;
use wasm_bindgen::prelude::*;

/// An undirected weighted edge between two node indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
    pub weight: u32,
}

impl Edge {
    pub fn new(from: usize, to: usize, weight: u32) -> Self {
        Self { from, to, weight }
    }

    /// Self loops never join two components.
    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}

/// Graph of labelled nodes and undirected weighted edges.
#[wasm_bindgen]
#[derive(Debug, Clone, Default)]
pub struct Graph {
    id: i32,
    labels: Vec<String>,
    index: HashMap<String, usize>,
    edges: Vec<Edge>,
}

#[wasm_bindgen]
impl Graph {
    /// Create an empty graph with the given dataset identifier.
    #[wasm_bindgen(constructor)]
    pub fn new(id: i32) -> Graph {
        Graph {
            id,
            ..Default::default()
        }
    }

    #[wasm_bindgen(getter)]
    pub fn id(&self) -> i32 {
        self.id
    }

    #[wasm_bindgen(js_name = nodeCount)]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[wasm_bindgen(js_name = edgeCount)]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    #[wasm_bindgen(js_name = isEmpty)]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    #[wasm_bindgen(js_name = addNode)]
    pub fn add_node_js(&mut self, label: &str) -> std::result::Result<usize, JsValue> {
        self.add_node(label).map_err(crate::to_js_error)
    }

    #[wasm_bindgen(js_name = addEdge)]
    pub fn add_edge_js(
        &mut self,
        from: &str,
        to: &str,
        weight: u32,
    ) -> std::result::Result<usize, JsValue> {
        self.add_edge(from, to, weight).map_err(crate::to_js_error)
    }

    /// Build a graph from a single `{ id, nodes, edges }` JSON object.
    #[wasm_bindgen(js_name = fromJson)]
    pub fn from_json_js(json: &str) -> std::result::Result<Graph, JsValue> {
        Graph::from_json(json).map_err(crate::to_js_error)
    }
}

impl Graph {
    /// Add a node and return its index. Labels must be unique.
    pub fn add_node(&mut self, label: &str) -> error::Result<usize> {
        if self.index.contains_key(label) {
            return Err(MstError::DuplicateNode(label.to_string()));
        }
        let idx = self.labels.len();
        self.labels.push(label.to_string());
        self.index.insert(label.to_string(), idx);
        Ok(idx)
    }

    /// Add an undirected edge between two existing labels and return its index.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: u32) -> error::Result<usize> {
        let unknown = |missing: &str| MstError::UnknownNode {
            from: from.to_string(),
            to: to.to_string(),
            missing: missing.to_string(),
        };
        let u = self.node_index(from).ok_or_else(|| unknown(from))?;
        let v = self.node_index(to).ok_or_else(|| unknown(to))?;
        Ok(self.push_edge(Edge::new(u, v, weight)))
    }

    /// Add an undirected edge between two node indices.
    pub fn add_edge_indices(
        &mut self,
        from: usize,
        to: usize,
        weight: u32,
    ) -> error::Result<usize> {
        let n = self.len();
        if from >= n || to >= n {
            let missing = if from >= n { from } else { to };
            return Err(MstError::UnknownNode {
                from: self.label_or_index(from),
                to: self.label_or_index(to),
                missing: missing.to_string(),
            });
        }
        Ok(self.push_edge(Edge::new(from, to, weight)))
    }

    /// Parse a single graph object (`{ id, nodes, edges }`).
    pub fn from_json(json: &str) -> error::Result<Graph> {
        let input: crate::dataset::GraphInput = serde_json::from_str(json)?;
        Graph::try_from(&input)
    }

    pub fn node_index(&self, label: &str) -> Option<usize> {
        self.index.get(label).copied()
    }

    pub fn node_label(&self, idx: usize) -> Option<&str> {
        self.labels.get(idx).map(String::as_str)
    }

    pub fn nodes(&self) -> &[String] {
        &self.labels
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    fn push_edge(&mut self, edge: Edge) -> usize {
        self.edges.push(edge);
        self.edges.len() - 1
    }

    fn label_or_index(&self, idx: usize) -> String {
        self.node_label(idx)
            .map(str::to_string)
            .unwrap_or_else(|| idx.to_string())
    }
}

/// Read-only adjacency view derived once from a [`Graph`].
///
/// Each undirected edge is listed under both endpoints, so a self loop shows up
/// twice in its node's list.
#[derive(Debug, Clone)]
pub struct Adjacency {
    lists: Vec<Vec<(usize, u32)>>,
}

impl Adjacency {
    pub fn new(graph: &Graph) -> Self {
        let mut lists = vec![Vec::new(); graph.len()];
        for edge in graph.edges() {
            lists[edge.from].push((edge.to, edge.weight));
            lists[edge.to].push((edge.from, edge.weight));
        }
        Self { lists }
    }

    /// Incident `(neighbor, weight)` pairs in edge insertion order.
    pub fn neighbors(&self, node: usize) -> &[(usize, u32)] {
        self.lists.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_graph() {
        let g = Graph::new(1);
        assert_eq!(g.id(), 1);
        assert!(g.is_empty());
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn test_add_nodes_and_edges() {
        let mut g = Graph::new(7);
        let a = g.add_node("A").unwrap();
        let b = g.add_node("B").unwrap();
        assert_eq!((a, b), (0, 1));

        let e = g.add_edge("A", "B", 4).unwrap();
        assert_eq!(e, 0);
        assert_eq!(g.edges()[0], Edge::new(a, b, 4));
        assert_eq!(g.node_index("B"), Some(b));
        assert_eq!(g.node_label(a), Some("A"));
        assert_eq!(g.node_label(9), None);
    }

    #[test]
    fn test_duplicate_node_rejected() {
        let mut g = Graph::new(1);
        g.add_node("A").unwrap();
        let err = g.add_node("A").unwrap_err();
        assert!(matches!(err, MstError::DuplicateNode(ref l) if l == "A"));
        assert_eq!(g.len(), 1);
    }

    #[test]
    fn test_unknown_endpoint_rejected() {
        let mut g = Graph::new(1);
        g.add_node("A").unwrap();
        let err = g.add_edge("A", "Z", 3).unwrap_err();
        match err {
            MstError::UnknownNode { missing, .. } => assert_eq!(missing, "Z"),
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(g.edge_count(), 0);

        assert!(g.add_edge_indices(0, 5, 1).is_err());
    }

    #[test]
    fn test_self_loop_allowed() {
        let mut g = Graph::new(1);
        g.add_node("A").unwrap();
        g.add_edge("A", "A", 2).unwrap();
        assert!(g.edges()[0].is_self_loop());
    }

    #[test]
    fn test_adjacency_is_symmetric() {
        let mut g = Graph::new(1);
        g.add_node("A").unwrap();
        g.add_node("B").unwrap();
        g.add_node("C").unwrap();
        g.add_edge("A", "B", 1).unwrap();
        g.add_edge("B", "C", 2).unwrap();

        let adj = Adjacency::new(&g);
        assert_eq!(adj.len(), 3);
        assert_eq!(adj.neighbors(0), &[(1, 1)]);
        assert_eq!(adj.neighbors(1), &[(0, 1), (2, 2)]);
        assert_eq!(adj.neighbors(2), &[(1, 2)]);
        assert!(adj.neighbors(42).is_empty());
    }

    #[test]
    fn test_adjacency_self_loop_listed_twice() {
        let mut g = Graph::new(1);
        g.add_node("A").unwrap();
        g.add_edge("A", "A", 5).unwrap();
        let adj = Adjacency::new(&g);
        assert_eq!(adj.neighbors(0), &[(0, 5), (0, 5)]);
    }

    #[test]
    fn test_from_json() {
        let json = r#"{"id": 3, "nodes": ["A", "B"], "edges": [{"from": "A", "to": "B", "weight": 9}]}"#;
        let g = Graph::from_json(json).unwrap();
        assert_eq!(g.id(), 3);
        assert_eq!(g.len(), 2);
        assert_eq!(g.edges(), &[Edge::new(0, 1, 9)]);
    }
}
