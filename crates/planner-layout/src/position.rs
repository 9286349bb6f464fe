//! Pixel placement of layered blocks.

use std::cmp::Reverse;
use std::collections::BTreeMap;

use planner_model::{Block, EdgeSet, Point};

use crate::LayoutOptions;
use crate::estimate::BlockSizeEstimator;
use crate::rank::Layering;

/// Groups blocks by column, most-connected first within each column.
///
/// The sort is stable so blocks with equal edge counts keep their input order.
pub fn column_groups<'a>(
    blocks: &[&'a Block],
    layering: &Layering,
    edges: &EdgeSet,
) -> BTreeMap<usize, Vec<&'a Block>> {
    let mut groups: BTreeMap<usize, Vec<&'a Block>> = BTreeMap::new();
    for &block in blocks {
        let column = layering.column(&block.id).unwrap_or(0);
        groups.entry(column).or_default().push(block);
    }
    for group in groups.values_mut() {
        group.sort_by_key(|b| Reverse(edges.degree(&b.id)));
    }
    groups
}

/// Stacks each column top to bottom and advances left to right.
///
/// Odd columns start one extra `margin_y` lower than even ones so edges between neighbouring
/// columns are less likely to run exactly horizontal through a block row.
pub fn place(
    groups: &BTreeMap<usize, Vec<&Block>>,
    estimator: &dyn BlockSizeEstimator,
    options: &LayoutOptions,
) -> BTreeMap<String, Point> {
    let mut positions = BTreeMap::new();
    let mut current_x = options.margin_x;

    for (&column, blocks) in groups {
        let mut current_y = if column % 2 == 0 {
            options.margin_y
        } else {
            options.margin_y * 2.0
        };
        let mut column_extent: f64 = 0.0;

        for block in blocks {
            let size = estimator.estimate(block, options.node_size);
            positions.insert(block.id.clone(), Point::new(current_x, current_y));

            current_y += options.default_node_height.max(size.height) + options.margin_y;
            column_extent = column_extent.max(options.node_width.max(size.width) + options.margin_x);
        }

        current_x += column_extent;
    }

    positions
}
