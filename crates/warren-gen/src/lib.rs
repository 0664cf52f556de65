//! **warren-gen** — Maze carving strategies for warren level grids.
//!
//! Generation is split from the grid itself: a [`Carver`] mutates link
//! state only, and every strategy draws its randomness from a
//! caller-provided RNG, so a seed fully determines the carved topology.
//!
//! - [`BinaryTree`] — one north-or-east choice per cell; strong northeast bias
//! - [`Sidewinder`] — eastward runs closed out northward; milder bias
//!
//! Both carve *perfect* mazes: every cell reachable from every other
//! through exactly one route.

mod binary_tree;
mod carver;
mod sidewinder;

pub use binary_tree::BinaryTree;
pub use carver::Carver;
pub use sidewinder::Sidewinder;
