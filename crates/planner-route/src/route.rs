//! Connector routing between two resource ports.

use planner_model::{Obstacle, Point, Rect, Size};
use serde::{Deserialize, Serialize};

use crate::RouteOptions;
use crate::matrix::{GridSpec, Matrix};
use crate::path::{self, SvgPath};
use crate::search;

/// Border kept around the search window, in cells.
const GRID_BORDER_CELLS: f64 = 2.0;
const AXIS_EPS: f64 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FallbackReason {
    /// The connection is still being dragged.
    Temporary,
    /// The grid search found no route.
    NoPath,
    /// The grid would exceed `RouteOptions::max_cells`.
    GridTooLarge,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RouteKind {
    Grid,
    Fallback(FallbackReason),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    /// Orthogonal polyline from `from` to `to`, before corner rounding.
    pub points: Vec<Point>,
    pub path: SvgPath,
    /// Anchor for the connection's label and buttons: the mean of `points` plus
    /// `RouteOptions::midpoint_offset`.
    ///
    /// Averaged after duplicate and collinear points are dropped, so the anchor depends on the
    /// shape of the route and not on how many grid cells a straight run crosses.
    pub midpoint: Point,
    pub kind: RouteKind,
}

impl Route {
    fn from_points(points: Vec<Point>, kind: RouteKind, options: &RouteOptions) -> Self {
        let points = path::compress(&points);
        let path = path::smooth_corners(&points, options.arc_radius);
        let midpoint = path::midpoint(&points, options.midpoint_offset).unwrap_or_default();
        Self {
            points,
            path,
            midpoint,
            kind,
        }
    }

    fn fallback(
        from: Point,
        to: Point,
        reason: FallbackReason,
        options: &RouteOptions,
    ) -> Self {
        tracing::debug!(?reason, ?from, ?to, "using fallback connector shape");
        Self::from_points(
            fallback_points(from, to, options),
            RouteKind::Fallback(reason),
            options,
        )
    }

    pub fn path_string(&self) -> String {
        self.path.to_string()
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self.kind, RouteKind::Fallback(_))
    }
}

/// Fixed elbow shape used when no grid route is wanted or found.
///
/// Ports facing each other get a single vertical jog halfway between the indented exit points.
/// Ports facing away loop around through a horizontal run at `mid_y`; when the ports are nearly
/// level that run is pushed below both of them so the loop does not fold back onto itself.
pub fn fallback_points(from: Point, to: Point, options: &RouteOptions) -> Vec<Point> {
    let from_x = from.x + options.indent;
    let to_x = to.x - options.indent;

    if from_x <= to_x {
        let mid_x = (from_x + to_x) / 2.0;
        return vec![
            from,
            Point::new(mid_x, from.y),
            Point::new(mid_x, to.y),
            to,
        ];
    }

    let mid_y = if (to.y - from.y).abs() < options.loop_clearance {
        from.y.max(to.y) + options.loop_clearance
    } else {
        (from.y + to.y) / 2.0
    };
    vec![
        from,
        Point::new(from_x, from.y),
        Point::new(from_x, mid_y),
        Point::new(to_x, mid_y),
        Point::new(to_x, to.y),
        to,
    ]
}

/// Cell size that keeps the grid near `target_columns × target_rows` between the two ports.
pub fn cell_size(from_x: f64, to_x: f64, from_y: f64, to_y: f64, options: &RouteOptions) -> Size {
    let columns = options.target_columns.max(1) as f64;
    let rows = options.target_rows.max(1) as f64;
    Size::new(
        options.min_cell.max((to_x - from_x).abs() / columns),
        options.min_cell.max((to_y - from_y).abs() / rows),
    )
}

/// Routes a connector from `from` to `to` around `obstacles`.
///
/// Returns `None` when either port has no position yet; callers skip drawing in that case.
/// Temporary connections (still being dragged) always get the fallback shape, as does any
/// request the grid search cannot serve.
pub fn compute_route(
    from: Option<Point>,
    to: Option<Point>,
    obstacles: &[Obstacle],
    canvas: Size,
    temporary: bool,
    options: &RouteOptions,
) -> Option<Route> {
    let (from, to) = (from?, to?);
    if temporary {
        return Some(Route::fallback(
            from,
            to,
            FallbackReason::Temporary,
            options,
        ));
    }

    let exit = Point::new(from.x + options.indent, from.y);
    let entry = Point::new(to.x - options.indent, to.y);
    let cell = cell_size(exit.x, entry.x, from.y, to.y, options);

    let mut rects: Vec<Rect> = obstacles
        .iter()
        .map(|o| o.rect.padded(cell.width, cell.height))
        .filter(|r| !r.is_empty())
        .collect();

    let ports = [from, to, entry]
        .into_iter()
        .fold(Rect::new(exit.x, exit.y, 0.0, 0.0), |r, p| r.include_point(p));
    let window = search_window(ports, exit, cell, &rects, canvas, options);
    let spec = GridSpec::covering(with_border(window, cell), exit, cell);
    if spec.cell_count() > options.max_cells {
        return Some(Route::fallback(
            from,
            to,
            FallbackReason::GridTooLarge,
            options,
        ));
    }

    let (Some(start), Some(goal)) = (spec.cell_of(exit), spec.cell_of(entry)) else {
        return Some(Route::fallback(from, to, FallbackReason::NoPath, options));
    };

    rects.push(port_wall(&spec, start, -1));
    rects.push(port_wall(&spec, goal, 1));

    // The port cells and their outward neighbours usually fall inside the padded bounds of the
    // port's own block; they stay walkable so the route can leave and enter horizontally.
    let mut matrix = Matrix::rasterize(&spec, &rects);
    matrix.set_blocked(start.0, start.1, false);
    matrix.set_blocked(start.0 + 1, start.1, false);
    matrix.set_blocked(goal.0, goal.1, false);
    if let Some(col) = goal.0.checked_sub(1) {
        matrix.set_blocked(col, goal.1, false);
    }

    let cells = search::find_path(&matrix, start, goal);
    if cells.len() < 2 {
        return Some(Route::fallback(from, to, FallbackReason::NoPath, options));
    }

    let mut pixels: Vec<Point> = cells
        .iter()
        .map(|&(col, row)| spec.point_of(col, row))
        .collect();
    end_horizontally(&mut pixels, to);

    let mut points = Vec::with_capacity(pixels.len() + 2);
    points.push(from);
    points.extend(pixels);
    points.push(to);

    tracing::debug!(
        cols = spec.cols,
        rows = spec.rows,
        cells = cells.len(),
        "routed connector on grid"
    );
    Some(Route::from_points(points, RouteKind::Grid, options))
}

/// Pixel area the grid search may use.
///
/// Starts from the box spanned by the ports and their indented exit/entry points, widened by
/// `search_margin` cells on every side and clipped to the canvas (a zero-sized canvas does not
/// clip). The window then grows to take in every obstacle it overlaps, repeatedly, so the route
/// can walk around blocks that stick out of it; growth stops once the grid would exceed
/// `max_cells`. The cell count follows the distance between the ports and the blocks near them,
/// not the canvas size.
fn search_window(
    ports: Rect,
    exit: Point,
    cell: Size,
    obstacles: &[Rect],
    canvas: Size,
    options: &RouteOptions,
) -> Rect {
    let margin = options.search_margin as f64;
    let mut window = ports.padded(cell.width * margin, cell.height * margin);
    if canvas.width > 0.0 && canvas.height > 0.0 {
        let area = Rect::new(0.0, 0.0, canvas.width, canvas.height);
        window = window.intersection(&area).unwrap_or(ports);
    }
    window = window.union(&ports);

    let cells_for = |r: Rect| GridSpec::covering(with_border(r, cell), exit, cell).cell_count();
    loop {
        let grown = obstacles
            .iter()
            .filter(|r| r.intersects(&window))
            .fold(window, |w, r| w.union(r));
        if grown == window || cells_for(grown) > options.max_cells {
            return window;
        }
        window = grown;
    }
}

fn with_border(window: Rect, cell: Size) -> Rect {
    window.padded(cell.width * GRID_BORDER_CELLS, cell.height * GRID_BORDER_CELLS)
}

/// A 2px wall one cell behind (`side = -1`) or ahead of (`side = 1`) a port cell, so the route
/// cannot curl back into the port from the wrong side.
///
/// The wall is two cells high starting 1px below the row above the port, so it blocks three
/// rows: the port row and one on either side.
fn port_wall(spec: &GridSpec, cell: (usize, usize), side: isize) -> Rect {
    let corner = spec.point_of(cell.0, cell.1);
    let x = corner.x + side as f64 * spec.cell.width + 1.0;
    Rect::new(
        x,
        corner.y - spec.cell.height + 1.0,
        2.0,
        2.0 * spec.cell.height,
    )
}

/// Makes the last leg of a grid path horizontal at `to.y`.
fn end_horizontally(pixels: &mut Vec<Point>, to: Point) {
    let n = pixels.len();
    if n < 2 {
        return;
    }
    let (prev, last) = (pixels[n - 2], pixels[n - 1]);
    if (last.x - prev.x).abs() < AXIS_EPS {
        pixels[n - 1].y = to.y;
    } else {
        pixels.push(Point::new(last.x, to.y));
    }
}
