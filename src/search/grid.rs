/*
 * Copyright (c) 2021, 2022 Frank Fischer <frank-fischer@shadow-soft.de>
 *
 * This program is free software: you can redistribute it and/or
 * modify it under the terms of the GNU General Public License as
 * published by the Free Software Foundation, either version 3 of the
 * License, or (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful, but
 * WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
 * General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see  <http://www.gnu.org/licenses/>
 */

//! A* search on grids.
//!
//! Cells are addressed by `(row, col)`. Each step to a neighbouring cell
//! costs 1. The open set is kept in discovery order and the cell with the
//! smallest estimate is found by a linear scan; among cells with equal
//! estimates the one discovered first is expanded.
//!
//! # Example
//!
//! ```
//! use rs_datastruct::search::grid::{find_path, SquareGrid};
//!
//! let grid = SquareGrid::from_ascii(
//!     r"
//!     ....
//!     ####.
//!     ....
//!     ",
//! );
//!
//! let path = find_path(&grid, (0, 0), (2, 0)).unwrap();
//! assert_eq!(path.len(), 9);
//! assert_eq!(path[3], (0, 3));
//! assert_eq!(path[5], (2, 3));
//! ```

use crate::search::path_from_parents;

use std::collections::{HashMap, HashSet};

/// A cell `(row, col)` of a grid.
pub type Cell = (usize, usize);

/// A grid of cells.
pub trait Grid {
    /// Return the cells reachable in one step from `(row, col)`.
    fn neighbours(&self, row: usize, col: usize) -> Vec<Cell>;
}

impl<'a, G> Grid for &'a G
where
    G: Grid + ?Sized,
{
    fn neighbours(&self, row: usize, col: usize) -> Vec<Cell> {
        (**self).neighbours(row, col)
    }
}

/// A rectangular grid with blocked cells.
///
/// Each free cell is connected to its free neighbours to the north, east,
/// south and west (in this order).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SquareGrid {
    rows: usize,
    cols: usize,
    blocked: HashSet<Cell>,
}

impl SquareGrid {
    pub fn new(rows: usize, cols: usize) -> Self {
        SquareGrid {
            rows,
            cols,
            blocked: HashSet::new(),
        }
    }

    /// Create a grid from an ascii drawing.
    ///
    /// Each non-empty line (leading and trailing whitespace removed) is a
    /// row, a `#` is a blocked cell and every other character a free one.
    /// Short rows are padded with free cells.
    pub fn from_ascii(text: &str) -> Self {
        let lines: Vec<&str> = text.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        let mut grid = SquareGrid::new(lines.len(), lines.iter().map(|l| l.chars().count()).max().unwrap_or(0));
        for (row, line) in lines.iter().enumerate() {
            for (col, c) in line.chars().enumerate() {
                if c == '#' {
                    grid.block(row, col);
                }
            }
        }
        grid
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Block a cell.
    ///
    /// Returns `false` if the cell is outside of the grid or already blocked.
    pub fn block(&mut self, row: usize, col: usize) -> bool {
        self.contains(row, col) && self.blocked.insert((row, col))
    }

    /// Free a blocked cell.
    pub fn unblock(&mut self, row: usize, col: usize) -> bool {
        self.blocked.remove(&(row, col))
    }

    pub fn is_blocked(&self, row: usize, col: usize) -> bool {
        self.blocked.contains(&(row, col))
    }

    fn is_free(&self, (row, col): Cell) -> bool {
        self.contains(row, col) && !self.is_blocked(row, col)
    }
}

impl Grid for SquareGrid {
    fn neighbours(&self, row: usize, col: usize) -> Vec<Cell> {
        let north = row.checked_sub(1).map(|r| (r, col));
        let east = col.checked_add(1).map(|c| (row, c));
        let south = row.checked_add(1).map(|r| (r, col));
        let west = col.checked_sub(1).map(|c| (row, c));
        [north, east, south, west]
            .iter()
            .flatten()
            .cloned()
            .filter(|&c| self.is_free(c))
            .collect()
    }
}

fn diff(a: usize, b: usize) -> f64 {
    if a > b {
        (a - b) as f64
    } else {
        (b - a) as f64
    }
}

/// The straight-line distance between two cells.
pub fn euclidean_distance(a: Cell, b: Cell) -> f64 {
    diff(a.0, b.0).hypot(diff(a.1, b.1))
}

/// The number of horizontal and vertical steps between two cells.
pub fn manhattan_distance(a: Cell, b: Cell) -> f64 {
    diff(a.0, b.0) + diff(a.1, b.1)
}

/// Find a shortest path from `start` to `goal` with the euclidean heuristic.
///
/// Returns the cells of the path, including `start` and `goal`, or `None` if
/// `goal` is not reachable.
pub fn find_path<G>(grid: &G, start: Cell, goal: Cell) -> Option<Vec<Cell>>
where
    G: Grid + ?Sized,
{
    find_path_with(grid, start, goal, euclidean_distance)
}

/// Find a shortest path from `start` to `goal` with a custom heuristic.
///
/// `heur(cell, goal)` must not overestimate the number of steps from `cell`
/// to `goal`.
pub fn find_path_with<G, H>(grid: &G, start: Cell, goal: Cell, heur: H) -> Option<Vec<Cell>>
where
    G: Grid + ?Sized,
    H: Fn(Cell, Cell) -> f64,
{
    let score = |scores: &HashMap<Cell, f64>, c: &Cell| scores.get(c).copied().unwrap_or(f64::INFINITY);

    let mut open = vec![start];
    let mut closed = HashSet::new();
    let mut came_from = HashMap::new();
    let mut g_score = HashMap::new();
    let mut f_score = HashMap::new();
    g_score.insert(start, 0.0);
    f_score.insert(start, heur(start, goal));

    while !open.is_empty() {
        let mut best = 0;
        for i in 1..open.len() {
            if score(&f_score, &open[i]) < score(&f_score, &open[best]) {
                best = i;
            }
        }
        let current = open.remove(best);
        if current == goal {
            let mut path: Vec<Cell> = path_from_parents(goal, |c| came_from.get(&c).copied()).collect();
            path.reverse();
            return Some(path);
        }
        closed.insert(current);

        let g = score(&g_score, &current) + 1.0;
        for next in grid.neighbours(current.0, current.1) {
            if closed.contains(&next) {
                continue;
            }
            if !open.contains(&next) {
                open.push(next);
            } else if g >= score(&g_score, &next) {
                continue;
            }
            came_from.insert(next, current);
            g_score.insert(next, g);
            f_score.insert(next, g + heur(next, goal));
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::{euclidean_distance, find_path, find_path_with, manhattan_distance, Cell, Grid, SquareGrid};

    #[test]
    fn test_line() {
        let grid = SquareGrid::new(1, 4);
        assert_eq!(find_path(&grid, (0, 0), (0, 3)), Some(vec![(0, 0), (0, 1), (0, 2), (0, 3)]));
    }

    #[test]
    fn test_start_is_goal() {
        let grid = SquareGrid::new(2, 2);
        assert_eq!(find_path(&grid, (1, 1), (1, 1)), Some(vec![(1, 1)]));
    }

    #[test]
    fn test_blocked() {
        let mut grid = SquareGrid::new(3, 3);
        assert!(grid.block(0, 1));
        assert!(grid.block(1, 1));
        assert!(grid.block(2, 1));
        assert!(!grid.block(2, 1));
        assert!(!grid.block(5, 5));
        assert_eq!(find_path(&grid, (0, 0), (0, 2)), None);

        assert!(grid.unblock(2, 1));
        let path = find_path(&grid, (0, 0), (0, 2)).unwrap();
        assert_eq!(path.len(), 7);
        assert!(path.contains(&(2, 1)));
    }

    #[test]
    fn test_neighbours() {
        let grid = SquareGrid::from_ascii(
            r"
            .#.
            ...
            ",
        );
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 3);
        assert!(grid.is_blocked(0, 1));
        assert_eq!(grid.neighbours(1, 1), vec![(1, 2), (1, 0)]);
        assert_eq!(grid.neighbours(0, 0), vec![(1, 0)]);
    }

    #[test]
    fn test_neighbours_at_border() {
        let m = usize::MAX;
        let grid = SquareGrid::new(m, m);
        assert!(grid.neighbours(m, m).is_empty());
        assert_eq!(grid.neighbours(m - 1, m - 1), vec![(m - 2, m - 1), (m - 1, m - 2)]);
        assert_eq!(grid.neighbours(0, m - 1), vec![(1, m - 1), (0, m - 2)]);
    }

    #[test]
    fn test_shortest() {
        let grid = SquareGrid::new(5, 5);
        for &(start, goal) in &[((0, 0), (4, 4)), ((4, 0), (0, 3)), ((2, 2), (2, 0))] {
            let path = find_path_with(&grid, start, goal, manhattan_distance).unwrap();
            assert_eq!(path.len() as f64, manhattan_distance(start, goal) + 1.0);
            let path = find_path(&grid, start, goal).unwrap();
            assert_eq!(path.len() as f64, manhattan_distance(start, goal) + 1.0);
            assert_eq!(path.first(), Some(&start));
            assert_eq!(path.last(), Some(&goal));
        }
    }

    #[test]
    fn test_custom_grid() {
        // a ring of 6 cells in a single row, the last one is next to the first
        struct Ring;

        impl Grid for Ring {
            fn neighbours(&self, _row: usize, col: usize) -> Vec<Cell> {
                vec![(0, (col + 1) % 6), (0, (col + 5) % 6)]
            }
        }

        let path = find_path_with(&Ring, (0, 0), (0, 4), |_, _| 0.0).unwrap();
        assert_eq!(path, vec![(0, 0), (0, 5), (0, 4)]);
    }

    #[test]
    fn test_distances() {
        assert_eq!(euclidean_distance((0, 0), (3, 4)), 5.0);
        assert_eq!(euclidean_distance((3, 4), (0, 0)), 5.0);
        assert_eq!(manhattan_distance((1, 5), (4, 1)), 7.0);
    }
}
