//! Disjoint-set (union-find) over node indices.
//!
//! Nodes must be registered with `make_set` before they take part in `find` or
//! `union`. `find` compresses paths iteratively: one pass to locate the root,
//! a second to repoint every node on the way directly at it.
//!
//! Cost accounting: `make_set` and `union` cost one each, `find` costs one per
//! node on the path to the root (root included). `union` re-finds both sides.

use crate::counter::OperationCounter;
use crate::error::{MstError, Result};

#[derive(Debug, Clone, Default)]
pub struct DisjointSet {
    parent: Vec<Option<usize>>,
}

impl DisjointSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(n: usize) -> Self {
        Self {
            parent: Vec::with_capacity(n),
        }
    }

    /// Register `v` as its own representative.
    ///
    /// Calling this again for a node already in a larger set resets only that
    /// node's parent pointer.
    pub fn make_set(&mut self, v: usize, ops: &mut OperationCounter) {
        if v >= self.parent.len() {
            self.parent.resize(v + 1, None);
        }
        self.parent[v] = Some(v);
        ops.tick();
    }

    /// Representative of `v`'s component.
    pub fn find(&mut self, v: usize, ops: &mut OperationCounter) -> Result<usize> {
        let mut root = self.parent_of(v)?;
        ops.tick();
        let mut current = v;
        while root != current {
            current = root;
            root = self.parent_of(current)?;
            ops.tick();
        }

        let mut node = v;
        while node != root {
            let next = self.parent_of(node)?;
            self.parent[node] = Some(root);
            node = next;
        }

        Ok(root)
    }

    /// Merge the components of `a` and `b`. Returns false if they were already
    /// in the same component.
    pub fn union(&mut self, a: usize, b: usize, ops: &mut OperationCounter) -> Result<bool> {
        ops.tick();
        let ra = self.find(a, ops)?;
        let rb = self.find(b, ops)?;
        if ra == rb {
            return Ok(false);
        }
        self.parent[rb] = Some(ra);
        Ok(true)
    }

    pub fn same_set(&mut self, a: usize, b: usize, ops: &mut OperationCounter) -> Result<bool> {
        Ok(self.find(a, ops)? == self.find(b, ops)?)
    }

    /// Number of distinct components among registered nodes.
    pub fn component_count(&self) -> usize {
        self.parent
            .iter()
            .enumerate()
            .filter(|&(i, p)| *p == Some(i))
            .count()
    }

    fn parent_of(&self, v: usize) -> Result<usize> {
        self.parent
            .get(v)
            .copied()
            .flatten()
            .ok_or(MstError::UnregisteredNode(v))
    }
}
