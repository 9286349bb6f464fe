#![forbid(unsafe_code)]

//! `planner` is a headless layout and connector-routing engine for architecture diagrams.
//!
//! A [`Plan`] holds blocks (services) whose resource ports are wired by provider → consumer
//! connections. This crate ties the pieces together:
//!
//! - [`layout_plan`] assigns every block a position (columns by dependency depth)
//! - [`route_connection`] / [`route_all`] compute obstacle-avoiding connector paths
//!
//! The lower-level crates are re-exported as [`model`], [`layout`] and [`route`].

mod config;

pub use config::PlannerConfig;
pub use planner_layout as layout;
pub use planner_model as model;
pub use planner_route as route;

pub use planner_layout::{BlockSizeEstimator, LayoutOptions, LayoutResult, NodeSize};
pub use planner_model::{
    Block, Connection, Endpoint, Obstacle, Plan, Point, Rect, Resource, ResourceRole, Size,
};
pub use planner_route::{Route, RouteKind, RouteOptions};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unknown connection: {id}")]
    UnknownConnection { id: String },
    #[error("invalid planner config: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Computes positions for every block of `plan` without touching it.
pub fn layout_plan(plan: &Plan, config: &PlannerConfig) -> LayoutResult {
    layout_plan_with(
        plan,
        &planner_layout::ResourceRowEstimator::default(),
        config,
    )
}

pub fn layout_plan_with(
    plan: &Plan,
    estimator: &dyn BlockSizeEstimator,
    config: &PlannerConfig,
) -> LayoutResult {
    planner_layout::layout_with(plan.blocks.values(), &plan.edges(), estimator, &config.layout)
}

/// Lays out `plan` and writes the new positions back onto its blocks.
pub fn apply_layout(plan: &mut Plan, config: &PlannerConfig) -> LayoutResult {
    let result = layout_plan(plan, config);
    result.apply(plan.blocks.values_mut());
    result
}

/// Routes one connection of `plan`.
///
/// `dragging` names a block that is being moved and must not act as an obstacle; `temporary`
/// marks a connection that is still being drawn. Returns `Ok(None)` while either port has no
/// position (its block or resource is not in the plan yet).
pub fn route_connection(
    plan: &Plan,
    connection_id: &str,
    canvas: Size,
    dragging: Option<&str>,
    temporary: bool,
    config: &PlannerConfig,
) -> Result<Option<Route>> {
    let connection = plan
        .connection(connection_id)
        .ok_or_else(|| Error::UnknownConnection {
            id: connection_id.to_string(),
        })?;
    let obstacles = plan.obstacles(dragging, config.obstacle_margin);
    Ok(route_with_obstacles(
        plan,
        connection,
        &obstacles,
        canvas,
        temporary,
        config,
    ))
}

/// Routes every connection whose ports resolve, keyed by connection id in plan order.
pub fn route_all(
    plan: &Plan,
    canvas: Size,
    dragging: Option<&str>,
    config: &PlannerConfig,
) -> Vec<(String, Route)> {
    let obstacles = plan.obstacles(dragging, config.obstacle_margin);
    let routes: Vec<(String, Route)> = plan
        .connections
        .iter()
        .filter_map(|c| {
            route_with_obstacles(plan, c, &obstacles, canvas, false, config)
                .map(|route| (c.id(), route))
        })
        .collect();
    tracing::debug!(
        connections = plan.connections.len(),
        routed = routes.len(),
        "routed plan"
    );
    routes
}

fn route_with_obstacles(
    plan: &Plan,
    connection: &Connection,
    obstacles: &[Obstacle],
    canvas: Size,
    temporary: bool,
    config: &PlannerConfig,
) -> Option<Route> {
    let ports = config.port_geometry();
    let from = plan.port_point(&connection.provider, ResourceRole::Provider, &ports);
    let to = plan.port_point(&connection.consumer, ResourceRole::Consumer, &ports);
    if from.is_none() || to.is_none() {
        tracing::debug!(connection = %connection.id(), "skipping connection with unresolved port");
    }
    planner_route::compute_route(from, to, obstacles, canvas, temporary, &config.route)
}
