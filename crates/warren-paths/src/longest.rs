//! Longest-path estimation by double sweep.

use warren_core::{Coord, Grid};

use crate::distances::{Distances, PathError};

/// Endpoints and distance map of an estimated longest path.
///
/// Built by two breadth-first sweeps: find the farthest cell from an
/// arbitrary starting cell, then the farthest cell from there. On a
/// perfect maze (a tree) the two endpoints realize the true diameter;
/// on topologies with cycles the estimate can fall short of it.
#[derive(Debug)]
pub struct LongestPath {
    start: Coord,
    goal: Coord,
    distances: Distances,
}

impl LongestPath {
    /// Run the double sweep, seeding the first from `from`.
    ///
    /// Errors when `from` is not a cell of `grid`.
    pub fn estimate(grid: &Grid, from: Coord) -> Result<Self, PathError> {
        let first = Distances::compute(grid, from)?;
        let start = first.max().coord;
        let distances = Distances::compute(grid, start)?;
        let goal = distances.max().coord;
        Ok(Self {
            start,
            goal,
            distances,
        })
    }

    /// First endpoint; the kept distance map is rooted here.
    #[inline]
    pub fn start(&self) -> Coord {
        self.start
    }

    /// Second endpoint, the farthest cell from [`start`](Self::start).
    #[inline]
    pub fn goal(&self) -> Coord {
        self.goal
    }

    /// The distance map of the second sweep.
    #[inline]
    pub fn distances(&self) -> &Distances {
        &self.distances
    }

    /// Number of passages along the estimated longest path.
    pub fn length(&self) -> i32 {
        self.distances.at(self.goal).unwrap_or(0)
    }

    /// The cell sequence from `start` to `goal`.
    pub fn path(&self, grid: &Grid) -> Result<Vec<Coord>, PathError> {
        self.distances.path_to(grid, self.goal)
    }
}
