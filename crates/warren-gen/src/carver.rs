//! The carving strategy seam.

use rand::Rng;

use warren_core::Grid;

/// A maze-carving strategy.
///
/// Implementations mutate link state only; tiles, dimensions, and the
/// neighbour wiring of the grid are off limits. Carving the same grid
/// dimensions with an identically seeded RNG must reproduce the same
/// link set.
pub trait Carver {
    /// Carve passages into `grid`, drawing randomness from `rng`.
    fn carve(&self, grid: &mut Grid, rng: &mut impl Rng);
}
