#![forbid(unsafe_code)]

//! Orthogonal connector routing for planner diagrams.
//!
//! A route leaves the provider port horizontally, travels over a coarse occupancy grid built
//! from the other blocks on the canvas, and enters the consumer port horizontally. The grid is
//! sized relative to the distance between the ports, so the search cost stays bounded no matter
//! how large the canvas is. Sharp corners are rounded into arcs before the path is serialized.
//!
//! When a grid route is not wanted (the connection is still being dragged) or cannot be found,
//! a fixed elbow shape is returned instead; routing never fails once both ports are known.

pub mod matrix;
pub mod path;
pub mod route;
pub mod search;

use planner_model::Point;
use serde::{Deserialize, Serialize};

pub use matrix::{GridSpec, Matrix};
pub use path::{PathCommand, SvgPath, smooth_corners};
pub use route::{FallbackReason, Route, RouteKind, compute_route, fallback_points};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RouteOptions {
    /// Horizontal run forced out of and into each port.
    pub indent: f64,
    pub target_columns: usize,
    pub target_rows: usize,
    /// Lower bound for both cell dimensions.
    pub min_cell: f64,
    /// Cells of slack searched around the ports before nearby obstacles widen the window.
    pub search_margin: usize,
    pub arc_radius: f64,
    pub midpoint_offset: Point,
    /// Vertical room kept by the fallback loop when the ports are nearly level.
    pub loop_clearance: f64,
    /// Upper bound on the search grid. Windows are grown only while they stay below it; a port
    /// box that alone exceeds it skips the search.
    pub max_cells: usize,
}

impl Default for RouteOptions {
    fn default() -> Self {
        Self {
            indent: 20.0,
            target_columns: 30,
            target_rows: 20,
            min_cell: 5.0,
            search_margin: 10,
            arc_radius: 10.0,
            midpoint_offset: Point::new(-10.0, -10.0),
            loop_clearance: 40.0,
            max_cells: 250_000,
        }
    }
}
