#![forbid(unsafe_code)]

//! In-memory plan model used by the planner layout and routing engines.
//!
//! A plan is a set of blocks (services) whose resource ports are wired together by
//! connections. Connections always run from a provider port to a consumer port; the layout
//! engine only cares about the block-level edges they imply, while the route planner needs the
//! pixel anchors of the individual ports.

pub mod block;
pub mod connection;
pub mod edges;
pub mod geometry;
pub mod plan;

pub use block::{Block, Resource};
pub use connection::{Connection, Endpoint, ResourceRole};
pub use edges::{EdgeKey, EdgeSet};
pub use geometry::{Obstacle, Point, Rect, Size};
pub use plan::{Plan, PortGeometry};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
