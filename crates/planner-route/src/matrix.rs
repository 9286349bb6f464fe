//! Rasterization of obstacle rectangles into a walkable/blocked grid.
//!
//! Cell `(col, row)` covers the half-open pixel box starting at
//! `origin + (col * cell.width, row * cell.height)`; that corner is also the pixel the router
//! uses for the cell.

use planner_model::{Point, Rect, Size};

/// Absorbs float noise when a coordinate sits exactly on a cell boundary.
const EDGE_EPS: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSpec {
    pub origin: Point,
    pub cell: Size,
    pub cols: usize,
    pub rows: usize,
}

impl GridSpec {
    /// Smallest grid covering `bounds` whose cell corners include `anchor`.
    pub fn covering(bounds: Rect, anchor: Point, cell: Size) -> Self {
        let steps_left = ((anchor.x - bounds.x) / cell.width).ceil().max(0.0);
        let steps_up = ((anchor.y - bounds.y) / cell.height).ceil().max(0.0);
        let origin = Point::new(
            anchor.x - steps_left * cell.width,
            anchor.y - steps_up * cell.height,
        );
        let cols = ((bounds.right() - origin.x) / cell.width).ceil().max(0.0) as usize + 1;
        let rows = ((bounds.bottom() - origin.y) / cell.height).ceil().max(0.0) as usize + 1;
        Self {
            origin,
            cell,
            cols,
            rows,
        }
    }

    pub fn cell_count(&self) -> usize {
        self.cols.saturating_mul(self.rows)
    }

    pub fn cell_of(&self, p: Point) -> Option<(usize, usize)> {
        let col = ((p.x - self.origin.x) / self.cell.width + EDGE_EPS).floor();
        let row = ((p.y - self.origin.y) / self.cell.height + EDGE_EPS).floor();
        if col < 0.0 || row < 0.0 {
            return None;
        }
        let (col, row) = (col as usize, row as usize);
        (col < self.cols && row < self.rows).then_some((col, row))
    }

    pub fn point_of(&self, col: usize, row: usize) -> Point {
        Point::new(
            self.origin.x + col as f64 * self.cell.width,
            self.origin.y + row as f64 * self.cell.height,
        )
    }

    /// Inclusive span of the cells overlapping `[start, end)` along one axis, clamped to `len`.
    ///
    /// A cell that only touches `end` is not part of the span.
    fn span(start: f64, end: f64, origin: f64, cell: f64, len: usize) -> Option<(usize, usize)> {
        let lo = ((start - origin) / cell + EDGE_EPS).floor();
        let hi = ((end - origin) / cell - EDGE_EPS).ceil() - 1.0;
        if hi < lo || hi < 0.0 || lo >= len as f64 {
            return None;
        }
        let lo = lo.max(0.0) as usize;
        let hi = (hi as usize).min(len.saturating_sub(1));
        Some((lo, hi))
    }
}

/// Boolean occupancy grid, `true` meaning blocked, indexed `[col][row]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    cols: usize,
    rows: usize,
    blocked: Vec<bool>,
}

impl Matrix {
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            blocked: vec![false; cols * rows],
        }
    }

    /// Marks every cell overlapped by any of `rects`. Empty rectangles and rectangles outside
    /// the grid are ignored.
    pub fn rasterize<'a>(spec: &GridSpec, rects: impl IntoIterator<Item = &'a Rect>) -> Self {
        let mut matrix = Self::new(spec.cols, spec.rows);
        for rect in rects {
            matrix.fill_rect(spec, rect);
        }
        matrix
    }

    pub fn fill_rect(&mut self, spec: &GridSpec, rect: &Rect) {
        if rect.is_empty() {
            return;
        }
        let Some((c0, c1)) = GridSpec::span(
            rect.x,
            rect.right(),
            spec.origin.x,
            spec.cell.width,
            self.cols,
        ) else {
            return;
        };
        let Some((r0, r1)) = GridSpec::span(
            rect.y,
            rect.bottom(),
            spec.origin.y,
            spec.cell.height,
            self.rows,
        ) else {
            return;
        };
        for col in c0..=c1 {
            let base = col * self.rows;
            for row in r0..=r1 {
                self.blocked[base + row] = true;
            }
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn contains(&self, col: usize, row: usize) -> bool {
        col < self.cols && row < self.rows
    }

    /// Out-of-range cells count as blocked.
    pub fn is_blocked(&self, col: usize, row: usize) -> bool {
        !self.contains(col, row) || self.blocked[col * self.rows + row]
    }

    pub fn set_blocked(&mut self, col: usize, row: usize, blocked: bool) {
        if self.contains(col, row) {
            self.blocked[col * self.rows + row] = blocked;
        }
    }

    pub fn blocked_count(&self) -> usize {
        self.blocked.iter().filter(|b| **b).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(cols: usize, rows: usize) -> GridSpec {
        GridSpec {
            origin: Point::new(0.0, 0.0),
            cell: Size::new(10.0, 10.0),
            cols,
            rows,
        }
    }

    #[test]
    fn rect_marks_every_overlapped_cell() {
        let spec = spec(10, 10);
        let m = Matrix::rasterize(&spec, &[Rect::new(15.0, 5.0, 20.0, 10.0)]);
        for col in 1..=3 {
            for row in 0..=1 {
                assert!(m.is_blocked(col, row), "({col},{row}) should be blocked");
            }
        }
        assert_eq!(m.blocked_count(), 6);
        assert!(!m.is_blocked(0, 0));
        assert!(!m.is_blocked(4, 1));
    }

    #[test]
    fn cells_touching_the_far_edge_stay_free() {
        let m = Matrix::rasterize(&spec(4, 4), &[Rect::new(0.0, 0.0, 10.0, 10.0)]);
        assert_eq!(m.blocked_count(), 1);
        assert!(m.is_blocked(0, 0));
        assert!(!m.is_blocked(1, 0));
        assert!(!m.is_blocked(0, 1));
        assert!(!m.is_blocked(1, 1));

        let m = Matrix::rasterize(&spec(4, 4), &[Rect::new(10.0, 10.0, 20.0, 10.0)]);
        assert_eq!(m.blocked_count(), 2);
        assert!(m.is_blocked(1, 1) && m.is_blocked(2, 1));
        assert!(!m.is_blocked(0, 1));
    }

    #[test]
    fn rects_are_clamped_to_the_grid() {
        let spec = spec(4, 4);
        let m = Matrix::rasterize(&spec, &[Rect::new(-100.0, 25.0, 500.0, 100.0)]);
        assert_eq!(m.blocked_count(), 8);
        assert!(m.is_blocked(0, 2));
        assert!(m.is_blocked(3, 3));
        assert!(!m.is_blocked(3, 1));
    }

    #[test]
    fn empty_and_outside_rects_are_ignored() {
        let spec = spec(4, 4);
        let m = Matrix::rasterize(
            &spec,
            &[
                Rect::new(10.0, 10.0, 0.0, 10.0),
                Rect::new(100.0, 100.0, 10.0, 10.0),
                Rect::new(-50.0, -50.0, 10.0, 10.0),
            ],
        );
        assert_eq!(m.blocked_count(), 0);
    }

    #[test]
    fn out_of_range_cells_are_blocked() {
        let m = Matrix::new(2, 2);
        assert!(!m.is_blocked(1, 1));
        assert!(m.is_blocked(2, 0));
    }

    #[test]
    fn covering_grid_aligns_anchor_to_a_cell_corner() {
        let g = GridSpec::covering(
            Rect::new(0.0, 0.0, 100.0, 50.0),
            Point::new(23.0, 7.0),
            Size::new(10.0, 5.0),
        );
        assert_eq!(g.origin, Point::new(-7.0, -3.0));
        assert_eq!(g.cell_of(Point::new(23.0, 7.0)), Some((3, 2)));
        assert_eq!(g.point_of(3, 2), Point::new(23.0, 7.0));
        assert!(g.point_of(g.cols - 1, g.rows - 1).x >= 100.0);
        assert!(g.point_of(g.cols - 1, g.rows - 1).y >= 50.0);
        assert_eq!(g.cell_of(Point::new(-8.0, 0.0)), None);
    }
}
