//! Uniform result records for MST runs.
//!
//! Both engines produce the same [`MstResult`] shape, so runs over the same
//! graph can be compared directly. The serialized form is the record existing
//! result consumers read:
//!
//! ```json
//! { "graphId": 1, "edges": ["A - B (weight 1)"], "totalWeight": 1,
//!   "executionTimeMs": 0, "operationCount": 12 }
//! ```

use crate::error::Result;
use serde::{Serialize, Serializer};
use std::fmt;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Kruskal,
    Prim,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Kruskal => f.write_str("kruskal"),
            Algorithm::Prim => f.write_str("prim"),
        }
    }
}

/// An accepted tree edge, labelled with node names.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MstEdge {
    pub from: String,
    pub to: String,
    pub weight: u32,
}

impl MstEdge {
    pub fn new(from: impl Into<String>, to: impl Into<String>, weight: u32) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }
}

impl fmt::Display for MstEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} (weight {})", self.from, self.to, self.weight)
    }
}

impl Serialize for MstEdge {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Outcome of one engine run. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MstResult {
    graph_id: i32,
    #[serde(skip)]
    algorithm: Algorithm,
    edges: Vec<MstEdge>,
    total_weight: u64,
    execution_time_ms: u64,
    operation_count: u64,
}

impl MstResult {
    pub fn new(
        graph_id: i32,
        algorithm: Algorithm,
        edges: Vec<MstEdge>,
        total_weight: u64,
        execution_time_ms: u64,
        operation_count: u64,
    ) -> Self {
        Self {
            graph_id,
            algorithm,
            edges,
            total_weight,
            execution_time_ms,
            operation_count,
        }
    }

    pub fn graph_id(&self) -> i32 {
        self.graph_id
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Accepted edges in acceptance order.
    pub fn edges(&self) -> &[MstEdge] {
        &self.edges
    }

    pub fn total_weight(&self) -> u64 {
        self.total_weight
    }

    pub fn execution_time_ms(&self) -> u64 {
        self.execution_time_ms
    }

    pub fn operation_count(&self) -> u64 {
        self.operation_count
    }

    /// Sum of edge weights, recomputed from the edge list.
    pub fn edge_weight_sum(&self) -> u64 {
        self.edges.iter().map(|e| u64::from(e.weight)).sum()
    }

    /// Edges in the `"<from> - <to> (weight <w>)"` form.
    pub fn edge_strings(&self) -> Vec<String> {
        self.edges.iter().map(ToString::to_string).collect()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Kruskal and Prim results over the same graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comparison {
    pub kruskal: MstResult,
    pub prim: MstResult,
}

impl Comparison {
    pub fn weights_match(&self) -> bool {
        self.kruskal.total_weight == self.prim.total_weight
    }
}

/// Receives one result record per run.
pub trait ResultSink {
    fn accept(&mut self, result: &MstResult) -> Result<()>;
}

impl ResultSink for Vec<MstResult> {
    fn accept(&mut self, result: &MstResult) -> Result<()> {
        self.push(result.clone());
        Ok(())
    }
}

/// Writes each record as a pretty-printed JSON document followed by a newline.
pub struct JsonSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ResultSink for JsonSink<W> {
    fn accept(&mut self, result: &MstResult) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, result)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        log::debug!(
            "wrote {} result for graph {}",
            result.algorithm,
            result.graph_id
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> MstResult {
        MstResult::new(
            5,
            Algorithm::Kruskal,
            vec![MstEdge::new("A", "B", 1), MstEdge::new("B", "C", 2)],
            3,
            0,
            17,
        )
    }

    #[test]
    fn test_edge_format() {
        assert_eq!(MstEdge::new("A", "B", 4).to_string(), "A - B (weight 4)");
    }

    #[test]
    fn test_wire_record() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            value,
            json!({
                "graphId": 5,
                "edges": ["A - B (weight 1)", "B - C (weight 2)"],
                "totalWeight": 3,
                "executionTimeMs": 0,
                "operationCount": 17
            })
        );
    }

    #[test]
    fn test_accessors() {
        let r = sample();
        assert_eq!(r.graph_id(), 5);
        assert_eq!(r.algorithm(), Algorithm::Kruskal);
        assert_eq!(r.edges().len(), 2);
        assert_eq!(r.edge_weight_sum(), r.total_weight());
        assert_eq!(r.edge_strings()[1], "B - C (weight 2)");
    }

    #[test]
    fn test_vec_sink_collects() {
        let mut sink: Vec<MstResult> = Vec::new();
        sink.accept(&sample()).unwrap();
        sink.accept(&sample()).unwrap();
        assert_eq!(sink.len(), 2);
    }

    #[test]
    fn test_json_sink_writes_record() {
        let mut sink = JsonSink::new(Vec::new());
        sink.accept(&sample()).unwrap();
        let out = String::from_utf8(sink.into_inner()).unwrap();
        assert!(out.ends_with('\n'));
        let parsed: serde_json::Value = serde_json::from_str(out.trim()).unwrap();
        assert_eq!(parsed["totalWeight"], 3);
        assert_eq!(parsed["edges"][0], "A - B (weight 1)");
    }

    #[test]
    fn test_comparison_weights() {
        let kruskal = sample();
        let prim = MstResult::new(5, Algorithm::Prim, kruskal.edges().to_vec(), 3, 0, 20);
        let cmp = Comparison { kruskal, prim };
        assert!(cmp.weights_match());
    }
}
