//! Sidewinder maze carving.

use rand::{Rng, RngExt};

use warren_core::{Coord, Direction, Grid};

use crate::carver::Carver;

/// The sidewinder algorithm.
///
/// Works row by row: each cell either extends the current eastward run or
/// closes it out by linking a uniformly chosen run member north. The top
/// row has nothing to close out against and becomes a single corridor.
/// Like [`BinaryTree`](crate::BinaryTree) this carves a spanning tree,
/// but the bias is milder: only the top row is guaranteed unbroken.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sidewinder;

impl Carver for Sidewinder {
    fn carve(&self, grid: &mut Grid, rng: &mut impl Rng) {
        for row in 0..grid.rows() {
            // The current run is the cells in run_start..=col.
            let mut run_start = 0;
            for col in 0..grid.columns() {
                let c = Coord::new(row, col);
                let at_east_edge = col + 1 == grid.columns();
                let at_north_edge = row == 0;

                let close_out =
                    at_east_edge || (!at_north_edge && rng.random_range(0..2u32) == 0);

                if close_out {
                    if !at_north_edge {
                        let member = Coord::new(row, rng.random_range(run_start..=col));
                        grid.link(member, member.step(Direction::North));
                    }
                    run_start = col + 1;
                } else {
                    grid.link(c, c.step(Direction::East));
                }
            }
        }
    }
}
