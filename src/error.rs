//! Error types for graph construction and MST runs.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MstError {
    #[error("Duplicate node: {0}")]
    DuplicateNode(String),

    #[error("Edge {from} - {to} references unknown node {missing}")]
    UnknownNode {
        from: String,
        to: String,
        missing: String,
    },

    #[error("Node index {0} was never registered with the disjoint set")]
    UnregisteredNode(usize),

    #[error("Graph {0} has no nodes to start from")]
    EmptyGraph(i32),

    #[error("Graph with id {0} not found")]
    GraphNotFound(i32),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MstError>;
