//! Typed SVG path commands and corner rounding.
//!
//! Routes are kept as a list of [`PathCommand`]s so the geometry can be inspected and tested
//! without parsing strings; text is only produced by the `Display` impl of [`SvgPath`].

use std::fmt;

use planner_model::Point;
use serde::{Deserialize, Serialize};

const GEOM_EPS: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "cmd", rename_all = "camelCase")]
pub enum PathCommand {
    Move { to: Point },
    Line { to: Point },
    /// Circular arc (`rx == ry`, no rotation, small arc).
    Arc { radius: f64, sweep: bool, to: Point },
}

impl PathCommand {
    pub fn end(&self) -> Point {
        match *self {
            Self::Move { to } | Self::Line { to } | Self::Arc { to, .. } => to,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SvgPath {
    pub commands: Vec<PathCommand>,
}

impl SvgPath {
    /// `M` to the first point and `L` through the rest.
    pub fn polyline(points: &[Point]) -> Self {
        let mut commands = Vec::with_capacity(points.len());
        let mut iter = points.iter();
        if let Some(&first) = iter.next() {
            commands.push(PathCommand::Move { to: first });
        }
        commands.extend(iter.map(|&to| PathCommand::Line { to }));
        Self { commands }
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn start(&self) -> Option<Point> {
        self.commands.first().map(PathCommand::end)
    }

    pub fn end(&self) -> Option<Point> {
        self.commands.last().map(PathCommand::end)
    }

    pub fn arc_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, PathCommand::Arc { .. }))
            .count()
    }
}

impl fmt::Display for SvgPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::with_capacity(self.commands.len().saturating_mul(24));
        for (idx, cmd) in self.commands.iter().enumerate() {
            if idx > 0 {
                out.push(' ');
            }
            match *cmd {
                PathCommand::Move { to } => emit_cmd_pair(&mut out, 'M', to),
                PathCommand::Line { to } => emit_cmd_pair(&mut out, 'L', to),
                PathCommand::Arc { radius, sweep, to } => {
                    out.push_str("A ");
                    fmt_path_into(&mut out, radius);
                    out.push(' ');
                    fmt_path_into(&mut out, radius);
                    out.push_str(if sweep { " 0 0 1 " } else { " 0 0 0 " });
                    fmt_path_into(&mut out, to.x);
                    out.push(' ');
                    fmt_path_into(&mut out, to.y);
                }
            }
        }
        f.write_str(&out)
    }
}

fn emit_cmd_pair(out: &mut String, cmd: char, p: Point) {
    out.push(cmd);
    out.push(' ');
    fmt_path_into(out, p.x);
    out.push(' ');
    fmt_path_into(out, p.y);
}

/// Three fractional digits, half-up, trailing zeros trimmed, never `-0`.
pub fn fmt_path_into(out: &mut String, v: f64) {
    if !v.is_finite() || v.abs() < 0.0005 {
        out.push('0');
        return;
    }

    let k = (v * 1000.0 + 0.5).floor() as i64;
    if k == 0 {
        out.push('0');
        return;
    }

    if k < 0 {
        out.push('-');
    }
    let abs = k.unsigned_abs();
    let int_part = abs / 1000;
    let mut frac = abs % 1000;

    use std::fmt::Write as _;
    let _ = write!(out, "{int_part}");
    if frac == 0 {
        return;
    }

    let mut digits: usize = 3;
    while frac % 10 == 0 {
        frac /= 10;
        digits -= 1;
    }
    let _ = write!(out, ".{frac:0digits$}");
}

/// Replaces every sharp interior joint of the polyline with a circular arc.
///
/// For each joint the two tangent points sit `radius` away from the corner along the adjacent
/// segments (clamped to half of the shorter segment so neighbouring arcs never overlap), and the
/// arc radius follows from the joint angle so the arc meets both segments tangentially.
/// Collinear joints and zero-length segments are kept as plain lines.
pub fn smooth_corners(points: &[Point], radius: f64) -> SvgPath {
    let mut commands = Vec::with_capacity(points.len() * 2);
    let Some(&first) = points.first() else {
        return SvgPath { commands };
    };
    commands.push(PathCommand::Move { to: first });
    if points.len() == 1 {
        return SvgPath { commands };
    }

    for w in points.windows(3) {
        let (prev, corner, next) = (w[0], w[1], w[2]);
        match round_corner(prev, corner, next, radius) {
            Some((t1, arc)) => {
                commands.push(PathCommand::Line { to: t1 });
                commands.push(arc);
            }
            None => commands.push(PathCommand::Line { to: corner }),
        }
    }

    if let Some(&last) = points.last() {
        commands.push(PathCommand::Line { to: last });
    }
    SvgPath { commands }
}

fn round_corner(prev: Point, corner: Point, next: Point, radius: f64) -> Option<(Point, PathCommand)> {
    let (ax, ay) = (prev.x - corner.x, prev.y - corner.y);
    let (bx, by) = (next.x - corner.x, next.y - corner.y);
    let la = (ax * ax + ay * ay).sqrt();
    let lb = (bx * bx + by * by).sqrt();
    if la < GEOM_EPS || lb < GEOM_EPS {
        return None;
    }
    let (ua, ub) = ((ax / la, ay / la), (bx / lb, by / lb));

    let cross = ua.0 * ub.1 - ua.1 * ub.0;
    if cross.abs() < GEOM_EPS {
        return None;
    }

    let d = radius.min(la / 2.0).min(lb / 2.0);
    if d < GEOM_EPS {
        return None;
    }

    let t1 = Point::new(corner.x + ua.0 * d, corner.y + ua.1 * d);
    let t2 = Point::new(corner.x + ub.0 * d, corner.y + ub.1 * d);
    let cos = (ua.0 * ub.0 + ua.1 * ub.1).clamp(-1.0, 1.0);
    let arc_radius = if cos.abs() < GEOM_EPS {
        d
    } else {
        d * (cos.acos() / 2.0).tan()
    };

    // The direction of travel is `-ua` then `ub`; a clockwise turn on a y-down canvas is the
    // positive sweep direction.
    let sweep = cross < 0.0;
    Some((
        t1,
        PathCommand::Arc {
            radius: arc_radius,
            sweep,
            to: t2,
        },
    ))
}

/// Mean of `points` shifted by `offset`; `None` for an empty slice.
pub fn midpoint(points: &[Point], offset: Point) -> Option<Point> {
    if points.is_empty() {
        return None;
    }
    let n = points.len() as f64;
    let (sx, sy) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    Some(Point::new(sx / n + offset.x, sy / n + offset.y))
}

/// Drops consecutive duplicates and interior points lying strictly between their neighbours on
/// a straight line. Reversals are kept.
pub fn compress(points: &[Point]) -> Vec<Point> {
    let mut out: Vec<Point> = Vec::with_capacity(points.len());
    for &p in points {
        if out.last().is_some_and(|last| last.approx_eq(p, GEOM_EPS)) {
            continue;
        }
        if out.len() >= 2 {
            let a = out[out.len() - 2];
            let b = out[out.len() - 1];
            let (d1x, d1y) = (b.x - a.x, b.y - a.y);
            let (d2x, d2y) = (p.x - b.x, p.y - b.y);
            let cross = d1x * d2y - d1y * d2x;
            let dot = d1x * d2x + d1y * d2y;
            if cross.abs() < GEOM_EPS && dot > 0.0 {
                out.pop();
            }
        }
        out.push(p);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(v: f64) -> String {
        let mut s = String::new();
        fmt_path_into(&mut s, v);
        s
    }

    #[test]
    fn numbers_are_rounded_and_trimmed() {
        assert_eq!(fmt(0.0), "0");
        assert_eq!(fmt(-0.0001), "0");
        assert_eq!(fmt(12.0), "12");
        assert_eq!(fmt(1.5), "1.5");
        assert_eq!(fmt(1.05), "1.05");
        assert_eq!(fmt(2.0004), "2");
        assert_eq!(fmt(3.14159), "3.142");
        assert_eq!(fmt(-7.25), "-7.25");
        assert_eq!(fmt(f64::NAN), "0");
    }

    #[test]
    fn compress_removes_duplicates_and_collinear_points() {
        let pts = [
            Point::new(0.0, 0.0),
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(20.0, 0.0),
            Point::new(20.0, 10.0),
        ];
        assert_eq!(
            compress(&pts),
            vec![Point::new(0.0, 0.0), Point::new(20.0, 0.0), Point::new(20.0, 10.0)]
        );
    }

    #[test]
    fn compress_keeps_reversals() {
        let pts = [Point::new(0.0, 0.0), Point::new(20.0, 0.0), Point::new(10.0, 0.0)];
        assert_eq!(compress(&pts).len(), 3);
    }

    #[test]
    fn midpoint_is_the_offset_mean() {
        let pts = [Point::new(0.0, 0.0), Point::new(10.0, 20.0)];
        assert_eq!(
            midpoint(&pts, Point::new(-1.0, 1.0)),
            Some(Point::new(4.0, 11.0))
        );
        assert_eq!(midpoint(&[], Point::default()), None);
    }
}
