//! Breadth-first distance maps over carved passages.

use std::collections::VecDeque;
use std::fmt;

use warren_core::{Coord, Grid};

/// Sentinel value meaning "not reached" in the flat distance map.
pub const UNREACHABLE: i32 = i32::MAX;

// ---------------------------------------------------------------------------
// PathError
// ---------------------------------------------------------------------------

/// Error returned by distance computation and path queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathError {
    /// The coordinate is not a cell of the grid.
    OutOfBounds(Coord),
    /// No passage route connects the map's root to the goal.
    UnreachableGoal(Coord),
    /// The map was computed for a grid of different dimensions.
    DimensionMismatch {
        expected: (i32, i32),
        actual: (i32, i32),
    },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::OutOfBounds(c) => write!(f, "coordinate {c} is outside the grid"),
            PathError::UnreachableGoal(c) => write!(f, "no passage route reaches {c}"),
            PathError::DimensionMismatch { expected, actual } => write!(
                f,
                "distance map for a {}x{} grid queried against a {}x{} grid",
                expected.0, expected.1, actual.0, actual.1
            ),
        }
    }
}

impl std::error::Error for PathError {}

// ---------------------------------------------------------------------------
// Distances
// ---------------------------------------------------------------------------

/// A coordinate with its distance from the map's root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistNode {
    pub coord: Coord,
    pub dist: i32,
}

/// Passage-following distances from a single root cell.
///
/// A value object: computing one walks the grid once, and the result
/// never changes afterwards. Carving more passages requires a fresh map.
#[derive(Debug)]
pub struct Distances {
    root: Coord,
    rows: i32,
    cols: i32,
    map: Vec<i32>,
}

impl Distances {
    /// Breadth-first distances from `root`, following linked neighbours
    /// only. Cells without a passage route from the root stay absent.
    ///
    /// Errors when `root` is not a cell of `grid`.
    pub fn compute(grid: &Grid, root: Coord) -> Result<Self, PathError> {
        if !grid.in_bounds(root) {
            return Err(PathError::OutOfBounds(root));
        }
        let mut this = Self {
            root,
            rows: grid.rows(),
            cols: grid.columns(),
            map: vec![UNREACHABLE; grid.len()],
        };

        let mut queue: VecDeque<Coord> = VecDeque::new();
        if let Some(ri) = this.idx(root) {
            this.map[ri] = 0;
            queue.push_back(root);
        }

        while let Some(c) = queue.pop_front() {
            let Some(ci) = this.idx(c) else {
                continue;
            };
            let dist = this.map[ci];
            let Some(cell) = grid.at(c) else {
                continue;
            };
            for n in cell.links() {
                let Some(ni) = this.idx(n) else {
                    continue;
                };
                if this.map[ni] == UNREACHABLE {
                    this.map[ni] = dist + 1;
                    queue.push_back(n);
                }
            }
        }

        Ok(this)
    }

    /// Convert a coordinate to a flat index. `None` when out of bounds.
    #[inline]
    fn idx(&self, c: Coord) -> Option<usize> {
        if c.row < 0 || c.row >= self.rows || c.col < 0 || c.col >= self.cols {
            return None;
        }
        Some((c.row * self.cols + c.col) as usize)
    }

    /// Convert a flat index back to a coordinate.
    #[inline]
    fn coord(&self, idx: usize) -> Coord {
        let cols = self.cols as usize;
        Coord::new((idx / cols) as i32, (idx % cols) as i32)
    }

    /// The root the map was computed from.
    #[inline]
    pub fn root(&self) -> Coord {
        self.root
    }

    /// The (rows, columns) this map was computed over.
    #[inline]
    pub fn dimensions(&self) -> (i32, i32) {
        (self.rows, self.cols)
    }

    /// Distance at `c`, or `None` when `c` is out of bounds or unreached.
    pub fn at(&self, c: Coord) -> Option<i32> {
        match self.idx(c) {
            Some(i) if self.map[i] != UNREACHABLE => Some(self.map[i]),
            _ => None,
        }
    }

    /// Reached cells with their distances, in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = DistNode> + '_ {
        self.map
            .iter()
            .enumerate()
            .filter(|&(_, &d)| d != UNREACHABLE)
            .map(|(i, &d)| DistNode {
                coord: self.coord(i),
                dist: d,
            })
    }

    /// Number of reached cells, the root included.
    pub fn reached_count(&self) -> usize {
        self.map.iter().filter(|&&d| d != UNREACHABLE).count()
    }

    /// The farthest reached cell. Ties break to the first cell in
    /// row-major order; the root itself when nothing else was reached.
    pub fn max(&self) -> DistNode {
        let mut best = DistNode {
            coord: self.root,
            dist: 0,
        };
        for node in self.iter() {
            if node.dist > best.dist {
                best = node;
            }
        }
        best
    }

    /// The passage route from the root to `goal`, both ends inclusive.
    ///
    /// Walks backward from the goal, each step moving to a linked
    /// neighbour exactly one closer to the root. When several qualify the
    /// first in canonical direction order wins, so the result is
    /// deterministic; on a perfect maze it is also the only route.
    pub fn path_to(&self, grid: &Grid, goal: Coord) -> Result<Vec<Coord>, PathError> {
        if (grid.rows(), grid.columns()) != (self.rows, self.cols) {
            return Err(PathError::DimensionMismatch {
                expected: (self.rows, self.cols),
                actual: (grid.rows(), grid.columns()),
            });
        }
        if !grid.in_bounds(goal) {
            return Err(PathError::OutOfBounds(goal));
        }
        let Some(mut dist) = self.at(goal) else {
            return Err(PathError::UnreachableGoal(goal));
        };

        let mut path = Vec::with_capacity(dist as usize + 1);
        let mut current = goal;
        path.push(current);

        while dist > 0 {
            let mut stepped = false;
            if let Some(cell) = grid.at(current) {
                for n in cell.links() {
                    if self.at(n) == Some(dist - 1) {
                        current = n;
                        dist -= 1;
                        path.push(current);
                        stepped = true;
                        break;
                    }
                }
            }
            if !stepped {
                // Link state diverged from the map since it was computed.
                return Err(PathError::UnreachableGoal(goal));
            }
        }

        path.reverse();
        Ok(path)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn dist_node_round_trip() {
        let node = DistNode {
            coord: Coord::new(3, 7),
            dist: 42,
        };
        let json = serde_json::to_string(&node).unwrap();
        let back: DistNode = serde_json::from_str(&json).unwrap();
        assert_eq!(node, back);
    }
}
