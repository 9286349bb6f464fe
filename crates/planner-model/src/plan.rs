use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::block::Block;
use crate::connection::{Connection, Endpoint, ResourceRole};
use crate::edges::EdgeSet;
use crate::geometry::{Obstacle, Point, Size};

/// Vertical placement of resource ports inside a block.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PortGeometry {
    /// Space above the first resource row (block title, icons).
    pub header_height: f64,
    pub row_height: f64,
}

impl Default for PortGeometry {
    fn default() -> Self {
        Self {
            header_height: 70.0,
            row_height: 40.0,
        }
    }
}

/// A diagram: blocks keyed by id (insertion ordered) and the connections between their ports.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Plan {
    #[serde(default)]
    pub blocks: IndexMap<String, Block>,
    #[serde(default)]
    pub connections: Vec<Connection>,
}

impl Plan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a block.
    pub fn insert_block(&mut self, block: Block) -> &mut Self {
        self.blocks.insert(block.id.clone(), block);
        self
    }

    pub fn block(&self, id: &str) -> Option<&Block> {
        self.blocks.get(id)
    }

    /// Removes a block together with every connection touching it.
    pub fn remove_block(&mut self, id: &str) -> Option<Block> {
        let removed = self.blocks.shift_remove(id)?;
        self.connections.retain(|c| !c.touches_block(id));
        Some(removed)
    }

    pub fn move_block(&mut self, id: &str, to: Point) -> bool {
        let Some(block) = self.blocks.get_mut(id) else {
            return false;
        };
        block.left = to.x;
        block.top = to.y;
        true
    }

    pub fn resize_block(&mut self, id: &str, size: Size) -> bool {
        let Some(block) = self.blocks.get_mut(id) else {
            return false;
        };
        block.width = size.width;
        block.height = size.height;
        true
    }

    /// Adds a connection unless one with the same id already exists.
    pub fn add_connection(&mut self, connection: Connection) -> bool {
        let id = connection.id();
        if self.connections.iter().any(|c| c.id() == id) {
            return false;
        }
        self.connections.push(connection);
        true
    }

    pub fn remove_connection(&mut self, id: &str) -> Option<Connection> {
        let idx = self.connections.iter().position(|c| c.id() == id)?;
        Some(self.connections.remove(idx))
    }

    pub fn connection(&self, id: &str) -> Option<&Connection> {
        self.connections.iter().find(|c| c.id() == id)
    }

    /// Unique `(provider block, consumer block)` edges in connection order.
    pub fn edges(&self) -> EdgeSet {
        self.connections
            .iter()
            .map(|c| (c.provider.block_id.as_str(), c.consumer.block_id.as_str()))
            .collect()
    }

    /// Block bounding boxes padded by `margin`, skipping the block being dragged.
    pub fn obstacles(&self, excluding: Option<&str>, margin: f64) -> Vec<Obstacle> {
        self.blocks
            .values()
            .filter(|b| Some(b.id.as_str()) != excluding)
            .map(|b| Obstacle::new(b.id.clone(), b.bounds().padded(margin, margin)))
            .collect()
    }

    /// Pixel anchor of a resource port.
    ///
    /// Providers attach to the right edge of their block, consumers to the left edge. Returns
    /// `None` when the block or resource is unknown.
    pub fn port_point(
        &self,
        endpoint: &Endpoint,
        role: ResourceRole,
        geometry: &PortGeometry,
    ) -> Option<Point> {
        let block = self.blocks.get(&endpoint.block_id)?;
        let (index, x) = match role {
            ResourceRole::Provider => (
                block.provider_index(&endpoint.resource_name)?,
                block.left + block.width,
            ),
            ResourceRole::Consumer => (block.consumer_index(&endpoint.resource_name)?, block.left),
        };
        let y = block.top + geometry.header_height + (index as f64 + 0.5) * geometry.row_height;
        Some(Point::new(x, y))
    }
}
