#![forbid(unsafe_code)]

//! Column-based auto-layout for planner diagrams.
//!
//! Blocks are assigned to columns by longest-path layering over their provider → consumer
//! edges, so every provider sits left of its consumers. Columns are then stacked vertically,
//! most-connected blocks first, using a [`BlockSizeEstimator`] to reserve enough room for each
//! block.
//!
//! The engine never mutates its input; callers apply [`LayoutResult::positions`] themselves.

pub mod estimate;
pub mod position;
pub mod rank;

use std::collections::BTreeMap;

use planner_model::{Block, EdgeSet, Point};
use rustc_hash::FxHashSet as HashSet;
use serde::{Deserialize, Serialize};

pub use estimate::{BlockSizeEstimator, NodeSize, ResourceRowEstimator};
pub use rank::Layering;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutOptions {
    pub node_width: f64,
    pub margin_x: f64,
    pub margin_y: f64,
    pub node_size: NodeSize,
    /// Minimum vertical room reserved per block.
    pub default_node_height: f64,
    /// Relaxation pass cap; defaults to `block count + 1`.
    pub max_passes: Option<usize>,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            node_width: 300.0,
            margin_x: 150.0,
            margin_y: 50.0,
            node_size: NodeSize::Medium,
            default_node_height: 150.0,
            max_passes: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LayoutResult {
    /// Top-left corner of every block, keyed by block id.
    pub positions: BTreeMap<String, Point>,
    pub columns: BTreeMap<String, usize>,
    /// `false` when layering hit the pass cap (cyclic input); positions are still usable.
    pub converged: bool,
}

impl LayoutResult {
    pub fn position(&self, id: &str) -> Option<Point> {
        self.positions.get(id).copied()
    }

    pub fn column(&self, id: &str) -> Option<usize> {
        self.columns.get(id).copied()
    }

    /// Writes positions back onto `blocks`. Blocks missing from the result are left untouched.
    pub fn apply<'a>(&self, blocks: impl IntoIterator<Item = &'a mut Block>) {
        for block in blocks {
            if let Some(p) = self.positions.get(&block.id) {
                block.left = p.x;
                block.top = p.y;
            }
        }
    }
}

/// Lays out `blocks` with the default [`ResourceRowEstimator`].
pub fn layout<'a>(
    blocks: impl IntoIterator<Item = &'a Block>,
    edges: &EdgeSet,
    options: &LayoutOptions,
) -> LayoutResult {
    layout_with(blocks, edges, &ResourceRowEstimator::default(), options)
}

pub fn layout_with<'a>(
    blocks: impl IntoIterator<Item = &'a Block>,
    edges: &EdgeSet,
    estimator: &dyn BlockSizeEstimator,
    options: &LayoutOptions,
) -> LayoutResult {
    let mut seen: HashSet<&str> = HashSet::default();
    let mut unique: Vec<&Block> = Vec::new();
    for block in blocks {
        if seen.insert(block.id.as_str()) {
            unique.push(block);
        }
    }
    let blocks = unique;

    let max_passes = options
        .max_passes
        .unwrap_or_else(|| rank::default_max_passes(blocks.len()));
    let layering = rank::longest_path(blocks.iter().map(|b| b.id.as_str()), edges, max_passes);

    let groups = position::column_groups(&blocks, &layering, edges);
    let positions = position::place(&groups, estimator, options);

    tracing::debug!(
        blocks = blocks.len(),
        edges = edges.len(),
        columns = groups.len(),
        passes = layering.passes,
        "laid out plan"
    );

    LayoutResult {
        positions,
        columns: layering.columns.into_iter().collect(),
        converged: layering.converged,
    }
}
