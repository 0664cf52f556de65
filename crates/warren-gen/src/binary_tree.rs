//! Binary-tree maze carving.

use rand::{Rng, RngExt};

use warren_core::{Coord, Direction, Grid};

use crate::carver::Carver;

/// The binary-tree algorithm.
///
/// Visits cells in row-major order and links each toward its north or
/// east neighbour: one RNG draw when both exist, no draw when only one
/// does, nothing at the top-right corner which has neither. The top row
/// can only link east and the rightmost column only north, which gives
/// the algorithm its characteristic unbroken northeast corridors.
///
/// Carving yields `rows * cols - 1` passages forming a spanning tree of
/// the grid.
#[derive(Debug, Clone, Copy, Default)]
pub struct BinaryTree;

impl Carver for BinaryTree {
    fn carve(&self, grid: &mut Grid, rng: &mut impl Rng) {
        for row in 0..grid.rows() {
            for col in 0..grid.columns() {
                let c = Coord::new(row, col);
                let north = c.step(Direction::North);
                let east = c.step(Direction::East);
                match (grid.in_bounds(north), grid.in_bounds(east)) {
                    (true, true) => {
                        if rng.random_range(0..2u32) == 0 {
                            grid.link(c, north);
                        } else {
                            grid.link(c, east);
                        }
                    }
                    (true, false) => {
                        grid.link(c, north);
                    }
                    (false, true) => {
                        grid.link(c, east);
                    }
                    (false, false) => {}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn carve(rows: i32, cols: i32, seed: u64) -> Grid {
        let mut g = Grid::new(rows, cols).unwrap();
        BinaryTree.carve(&mut g, &mut StdRng::seed_from_u64(seed));
        g
    }

    /// Cells reachable from the origin by following links.
    fn reached(g: &Grid) -> usize {
        let mut seen = HashSet::from([Coord::ZERO]);
        let mut stack = vec![Coord::ZERO];
        while let Some(c) = stack.pop() {
            for n in g.at(c).unwrap().links() {
                if seen.insert(n) {
                    stack.push(n);
                }
            }
        }
        seen.len()
    }

    #[test]
    fn spanning_tree_link_count() {
        // One passage fewer than cells, seen from both sides.
        assert_eq!(carve(3, 3, 42).link_count(), 2 * 8);
        assert_eq!(carve(5, 5, 7).link_count(), 2 * 24);
        assert_eq!(carve(4, 7, 3).link_count(), 2 * 27);
    }

    #[test]
    fn degenerate_grids() {
        assert_eq!(carve(1, 1, 0).link_count(), 0);
        // Single row: one eastward corridor, no draws needed.
        assert_eq!(carve(1, 5, 0).link_count(), 2 * 4);
        // Single column: one northward corridor.
        assert_eq!(carve(5, 1, 0).link_count(), 2 * 4);
    }

    #[test]
    fn connects_every_cell() {
        for seed in [0, 7, 42] {
            let g = carve(5, 5, seed);
            assert_eq!(reached(&g), 25, "seed {seed} left cells unreachable");
            // A carved cell always has at least one passage.
            assert!(g.iter().all(|c| c.has_links()));
        }
    }

    #[test]
    fn top_row_and_east_column_are_corridors() {
        let g = carve(4, 6, 11);
        for col in 0..5 {
            assert!(g.linked(Coord::new(0, col), Coord::new(0, col + 1)));
        }
        for row in 1..4 {
            assert!(g.linked(Coord::new(row, 5), Coord::new(row - 1, 5)));
        }
    }

    #[test]
    fn same_seed_reproduces_the_maze() {
        let a = carve(6, 9, 42);
        let b = carve(6, 9, 42);
        for (ca, cb) in a.iter().zip(b.iter()) {
            assert_eq!(ca.link_mask(), cb.link_mask(), "mismatch at {}", ca.coord());
        }
        assert_eq!(a.to_string(), b.to_string());
    }

    #[test]
    fn seeds_can_disagree() {
        let a = carve(6, 9, 1);
        let differs = (2..34).any(|seed| {
            let b = carve(6, 9, seed);
            a.iter().zip(b.iter()).any(|(ca, cb)| ca.link_mask() != cb.link_mask())
        });
        assert!(differs);
    }

    #[test]
    fn carved_mazes_have_dead_ends() {
        // A spanning tree of two or more cells always has leaves.
        for (rows, cols) in [(2, 2), (4, 5), (9, 3)] {
            for seed in 0..10 {
                let g = carve(rows, cols, seed);
                let ends = g.dead_ends();
                assert!(!ends.is_empty(), "{rows}x{cols} seed {seed} has no dead ends");
                for c in ends {
                    assert_eq!(g.at(c).unwrap().link_count(), 1);
                }
            }
        }
    }

    #[test]
    fn carving_leaves_tiles_alone() {
        let g = carve(3, 3, 5);
        assert!(g.iter().all(|c| c.tile() == warren_core::tiles::EMPTY));
    }
}
