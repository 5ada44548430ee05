//! Minimum spanning trees for weighted undirected graphs.
//!
//! Kruskal (sorted edges + union-find) and Prim (heap frontier) run over the
//! same [`Graph`] and report the same [`MstResult`] record: accepted edges,
//! total weight, elapsed milliseconds and an operation count used to compare
//! their cost. Builds natively and as WASM for use from the browser.

use wasm_bindgen::prelude::*;

mod counter;
mod dataset;
mod graph;
mod report;
mod timing;
mod union_find;

pub mod algorithms;
pub mod error;
pub mod verify;

pub use algorithms::{compare, kruskal, prim, run, PrimStrategy};
pub use counter::OperationCounter;
pub use dataset::{EdgeInput, GraphDataset, GraphInput};
pub use error::MstError;
pub use graph::{Adjacency, Edge, Graph};
pub use report::{Algorithm, Comparison, JsonSink, MstEdge, MstResult, ResultSink};
pub use union_find::DisjointSet;

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Get the crate version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

pub(crate) fn to_js_error(err: MstError) -> JsValue {
    JsError::new(&err.to_string()).into()
}

fn strategy_from_flag(track_origin: Option<bool>) -> PrimStrategy {
    if track_origin.unwrap_or(false) {
        PrimStrategy::TrackOrigin
    } else {
        PrimStrategy::ReconcileScan
    }
}

#[wasm_bindgen]
impl Graph {
    /// Kruskal result as `{ graphId, edges, totalWeight, executionTimeMs, operationCount }`.
    #[wasm_bindgen(js_name = kruskal)]
    pub fn kruskal_js(&self) -> std::result::Result<JsValue, JsValue> {
        let result = algorithms::kruskal(self).map_err(to_js_error)?;
        Ok(serde_wasm_bindgen::to_value(&result)?)
    }

    /// Prim result in the same shape. Pass `true` to skip the origin scan.
    #[wasm_bindgen(js_name = prim)]
    pub fn prim_js(&self, track_origin: Option<bool>) -> std::result::Result<JsValue, JsValue> {
        let result =
            algorithms::prim(self, strategy_from_flag(track_origin)).map_err(to_js_error)?;
        Ok(serde_wasm_bindgen::to_value(&result)?)
    }

    /// Both results as `{ kruskal, prim }`.
    #[wasm_bindgen(js_name = compare)]
    pub fn compare_js(&self, track_origin: Option<bool>) -> std::result::Result<JsValue, JsValue> {
        let comparison =
            algorithms::compare(self, strategy_from_flag(track_origin)).map_err(to_js_error)?;
        Ok(serde_wasm_bindgen::to_value(&comparison)?)
    }
}

/// Select graph `id` from a dataset JSON document and run both engines.
#[wasm_bindgen(js_name = compareDataset)]
pub fn compare_dataset(
    dataset_json: &str,
    id: i32,
    track_origin: Option<bool>,
) -> std::result::Result<JsValue, JsValue> {
    let graph = GraphDataset::from_json(dataset_json)
        .and_then(|ds| ds.select(id))
        .map_err(to_js_error)?;
    graph.compare_js(track_origin)
}
