//! A* search over a 4-connected [`Matrix`].
//!
//! Path cost is compared lexicographically as `(steps, turns)`: the shortest path always wins,
//! and among equally short paths the one with the fewest direction changes is returned. The
//! remaining ties are broken by heap order on `(cell, direction)`, which keeps results stable
//! across runs.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::matrix::Matrix;

pub type Cell = (usize, usize);

/// East, south, west, north.
const DIRS: [(isize, isize); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];
const EAST: u8 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Entry {
    est: u32,
    turns: u32,
    steps: u32,
    col: usize,
    row: usize,
    dir: u8,
}

fn manhattan(a: Cell, b: Cell) -> u32 {
    (a.0.abs_diff(b.0) + a.1.abs_diff(b.1)) as u32
}

/// Finds a path from `start` to `goal`, both inclusive.
///
/// Blocked cells are impassable except `start` and `goal` themselves. The walker starts facing
/// east, so leaving `start` vertically costs a turn. Returns an empty vector when `goal` is
/// unreachable or either cell lies outside the matrix.
pub fn find_path(matrix: &Matrix, start: Cell, goal: Cell) -> Vec<Cell> {
    if !matrix.contains(start.0, start.1) || !matrix.contains(goal.0, goal.1) {
        return Vec::new();
    }
    if start == goal {
        return vec![start];
    }

    let rows = matrix.rows();
    let state_of = |col: usize, row: usize, dir: u8| (col * rows + row) * 4 + dir as usize;
    let states = matrix.cols() * rows * 4;

    let mut best: Vec<(u32, u32)> = vec![(u32::MAX, u32::MAX); states];
    let mut prev: Vec<Option<usize>> = vec![None; states];
    let mut heap = BinaryHeap::new();

    let start_state = state_of(start.0, start.1, EAST);
    best[start_state] = (0, 0);
    heap.push(Reverse(Entry {
        est: manhattan(start, goal),
        turns: 0,
        steps: 0,
        col: start.0,
        row: start.1,
        dir: EAST,
    }));

    let mut end_state: Option<usize> = None;
    while let Some(Reverse(entry)) = heap.pop() {
        let state = state_of(entry.col, entry.row, entry.dir);
        if (entry.steps, entry.turns) != best[state] {
            continue;
        }
        if (entry.col, entry.row) == goal {
            end_state = Some(state);
            break;
        }

        for (dir_idx, (dx, dy)) in DIRS.iter().enumerate() {
            let Some(nc) = entry.col.checked_add_signed(*dx) else {
                continue;
            };
            let Some(nr) = entry.row.checked_add_signed(*dy) else {
                continue;
            };
            if !matrix.contains(nc, nr) {
                continue;
            }
            let next = (nc, nr);
            if next != goal && next != start && matrix.is_blocked(nc, nr) {
                continue;
            }

            let dir = dir_idx as u8;
            let steps = entry.steps + 1;
            let turns = entry.turns + u32::from(dir != entry.dir);
            let next_state = state_of(nc, nr, dir);
            if (steps, turns) >= best[next_state] {
                continue;
            }
            best[next_state] = (steps, turns);
            prev[next_state] = Some(state);
            heap.push(Reverse(Entry {
                est: steps + manhattan(next, goal),
                turns,
                steps,
                col: nc,
                row: nr,
                dir,
            }));
        }
    }

    let Some(mut state) = end_state else {
        return Vec::new();
    };
    let mut path = Vec::new();
    loop {
        let cell = state / 4;
        path.push((cell / rows, cell % rows));
        match prev[state] {
            Some(p) => state = p,
            None => break,
        }
    }
    path.reverse();
    path
}
