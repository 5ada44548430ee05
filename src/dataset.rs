//! Input schema for graph datasets.
//!
//! A dataset is a JSON document `{ "graphs": [ { id, nodes, edges } ] }`.
//! Selecting a graph by id and checking edge endpoints is all that happens
//! here; the engines only ever see a built [`Graph`].

use crate::error::{MstError, Result};
use crate::graph::Graph;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeInput {
    pub from: String,
    pub to: String,
    pub weight: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphInput {
    pub id: i32,
    pub nodes: Vec<String>,
    pub edges: Vec<EdgeInput>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphDataset {
    pub graphs: Vec<GraphInput>,
}

impl GraphDataset {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// First graph carrying `id`, if any.
    pub fn graph(&self, id: i32) -> Option<&GraphInput> {
        self.graphs.iter().find(|g| g.id == id)
    }

    /// Build the graph carrying `id`.
    pub fn select(&self, id: i32) -> Result<Graph> {
        let input = self.graph(id).ok_or(MstError::GraphNotFound(id))?;
        Graph::try_from(input)
    }
}

impl TryFrom<&GraphInput> for Graph {
    type Error = MstError;

    fn try_from(input: &GraphInput) -> Result<Self> {
        let mut graph = Graph::new(input.id);
        for label in &input.nodes {
            graph.add_node(label)?;
        }
        for e in &input.edges {
            graph.add_edge(&e.from, &e.to, e.weight)?;
        }
        Ok(graph)
    }
}
