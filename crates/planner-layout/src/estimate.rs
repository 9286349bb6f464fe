//! Block size estimation.
//!
//! The layout engine never measures anything itself; it asks a [`BlockSizeEstimator`] how much
//! room a block needs. Embedders that render blocks with real fonts can plug in their own
//! measurer, the default one counts resource rows.

use planner_model::{Block, PortGeometry, Size};
use serde::{Deserialize, Serialize};

/// Visual density of blocks. Drives the header and per-resource row heights.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NodeSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl NodeSize {
    pub fn header_height(self) -> f64 {
        match self {
            Self::Small => 60.0,
            Self::Medium => 70.0,
            Self::Large => 80.0,
        }
    }

    pub fn row_height(self) -> f64 {
        match self {
            Self::Small => 32.0,
            Self::Medium => 40.0,
            Self::Large => 48.0,
        }
    }

    /// Port placement matching the estimated block shape.
    pub fn port_geometry(self) -> PortGeometry {
        PortGeometry {
            header_height: self.header_height(),
            row_height: self.row_height(),
        }
    }
}

pub trait BlockSizeEstimator {
    fn estimate(&self, block: &Block, node_size: NodeSize) -> Size;
}

impl<F> BlockSizeEstimator for F
where
    F: Fn(&Block, NodeSize) -> Size,
{
    fn estimate(&self, block: &Block, node_size: NodeSize) -> Size {
        self(block, node_size)
    }
}

/// Estimates a block as a header plus one row per resource pair.
///
/// Consumers and providers share rows (consumer on the left, provider on the right), so the
/// row count is the longer of the two lists. Width grows with the longest label pair. A block
/// that already carries a size (resized by the user) never gets less room than that size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResourceRowEstimator {
    pub char_width: f64,
    pub side_padding: f64,
    pub footer_height: f64,
}

impl Default for ResourceRowEstimator {
    fn default() -> Self {
        Self {
            char_width: 8.0,
            side_padding: 40.0,
            footer_height: 20.0,
        }
    }
}

impl BlockSizeEstimator for ResourceRowEstimator {
    fn estimate(&self, block: &Block, node_size: NodeSize) -> Size {
        let rows = self.resource_rows(block, node_size);
        Size::new(
            rows.width.max(block.width),
            rows.height.max(block.height),
        )
    }
}

impl ResourceRowEstimator {
    fn resource_rows(&self, block: &Block, node_size: NodeSize) -> Size {
        let rows = block.consumers.len().max(block.providers.len());
        if rows == 0 {
            return Size::default();
        }

        let mut widest = 0usize;
        for i in 0..rows {
            let left = block.consumers.get(i).map_or(0, |r| r.name.chars().count());
            let right = block.providers.get(i).map_or(0, |r| r.name.chars().count());
            widest = widest.max(left + right);
        }

        Size::new(
            widest as f64 * self.char_width + 2.0 * self.side_padding,
            node_size.header_height() + rows as f64 * node_size.row_height() + self.footer_height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_blocks_have_no_size_requirement() {
        let size = ResourceRowEstimator::default().estimate(&Block::new("a"), NodeSize::Medium);
        assert_eq!(size, Size::default());
    }

    #[test]
    fn rows_are_shared_between_consumers_and_providers() {
        let block = Block::new("a")
            .with_consumer("abcd")
            .with_consumer("ef")
            .with_provider("ghijkl");
        let size = ResourceRowEstimator::default().estimate(&block, NodeSize::Large);
        assert_eq!(size.height, 80.0 + 2.0 * 48.0 + 20.0);
        assert_eq!(size.width, 10.0 * 8.0 + 80.0);
    }

    #[test]
    fn known_block_size_is_a_floor() {
        let block = Block::new("a")
            .with_bounds(0.0, 0.0, 120.0, 400.0)
            .with_consumer("abcdefghijklmnopqrstuvwxyz");
        let size = ResourceRowEstimator::default().estimate(&block, NodeSize::Medium);
        assert_eq!(size, Size::new(26.0 * 8.0 + 80.0, 400.0));
    }

    #[test]
    fn closures_are_estimators() {
        let fixed = |_: &Block, _: NodeSize| Size::new(1.0, 2.0);
        assert_eq!(fixed.estimate(&Block::new("a"), NodeSize::Small), Size::new(1.0, 2.0));
    }
}
