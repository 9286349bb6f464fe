use planner_layout::LayoutOptions;
use planner_model::PortGeometry;
use planner_route::RouteOptions;
use serde::{Deserialize, Serialize};

use crate::Result;

/// Options for the whole planner pipeline.
///
/// Deserializes from the camelCase JSON an embedding UI already carries; unknown keys are
/// ignored and every missing field takes its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlannerConfig {
    pub layout: LayoutOptions,
    pub route: RouteOptions,
    /// Padding added around every block before it becomes a routing obstacle. Keep it below
    /// `route.indent` so ports stay reachable.
    pub obstacle_margin: f64,
    /// Port placement; derived from `layout.nodeSize` when absent.
    pub ports: Option<PortGeometry>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            layout: LayoutOptions::default(),
            route: RouteOptions::default(),
            obstacle_margin: 10.0,
            ports: None,
        }
    }
}

impl PlannerConfig {
    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_json_value(value: serde_json::Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    pub fn port_geometry(&self) -> PortGeometry {
        self.ports
            .unwrap_or_else(|| self.layout.node_size.port_geometry())
    }
}
