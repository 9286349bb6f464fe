//! Block-level dependency edges.
//!
//! Many connections can join the same two blocks (one per resource pair). Layout only needs one
//! edge per `(provider block, consumer block)` pair, so `EdgeSet` collapses duplicates while
//! keeping first-seen order.

use rustc_hash::FxHashMap as HashMap;
use serde::{Deserialize, Serialize};

/// A directed block edge: `v` provides, `w` consumes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EdgeKey {
    pub v: String,
    pub w: String,
}

impl EdgeKey {
    pub fn new(v: impl Into<String>, w: impl Into<String>) -> Self {
        Self {
            v: v.into(),
            w: w.into(),
        }
    }

    pub fn is_self_loop(&self) -> bool {
        self.v == self.w
    }
}

#[derive(Debug, Clone, Default)]
pub struct EdgeSet {
    edges: Vec<EdgeKey>,
    edge_index: HashMap<EdgeKey, usize>,
    in_adj: HashMap<String, Vec<usize>>,
    out_adj: HashMap<String, Vec<usize>>,
}

impl EdgeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `v -> w`; returns `false` when the pair is already present.
    pub fn insert(&mut self, v: impl Into<String>, w: impl Into<String>) -> bool {
        let key = EdgeKey::new(v, w);
        if self.edge_index.contains_key(&key) {
            return false;
        }

        let idx = self.edges.len();
        if !key.is_self_loop() {
            self.out_adj.entry(key.v.clone()).or_default().push(idx);
            self.in_adj.entry(key.w.clone()).or_default().push(idx);
        }
        self.edge_index.insert(key.clone(), idx);
        self.edges.push(key);
        true
    }

    pub fn contains(&self, v: &str, w: &str) -> bool {
        self.edge_index.contains_key(&EdgeKey::new(v, w))
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EdgeKey> {
        self.edges.iter()
    }

    pub fn get(&self, idx: usize) -> Option<&EdgeKey> {
        self.edges.get(idx)
    }

    /// Indices of edges ending at `w`, self-loops excluded.
    pub fn incoming(&self, w: &str) -> &[usize] {
        self.in_adj.get(w).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Indices of edges starting at `v`, self-loops excluded.
    pub fn outgoing(&self, v: &str) -> &[usize] {
        self.out_adj.get(v).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn predecessors(&self, w: &str) -> Vec<&str> {
        self.incoming(w)
            .iter()
            .map(|&idx| self.edges[idx].v.as_str())
            .collect()
    }

    pub fn successors(&self, v: &str) -> Vec<&str> {
        self.outgoing(v)
            .iter()
            .map(|&idx| self.edges[idx].w.as_str())
            .collect()
    }

    pub fn degree(&self, id: &str) -> usize {
        self.incoming(id).len() + self.outgoing(id).len()
    }

    pub fn has_incoming(&self, w: &str) -> bool {
        !self.incoming(w).is_empty()
    }
}

impl<V, W> FromIterator<(V, W)> for EdgeSet
where
    V: Into<String>,
    W: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (V, W)>>(iter: I) -> Self {
        let mut set = EdgeSet::new();
        for (v, w) in iter {
            set.insert(v, w);
        }
        set
    }
}
