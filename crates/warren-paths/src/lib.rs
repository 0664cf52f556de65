//! **warren-paths** — Distance queries over carved level topology.
//!
//! - [`Distances`] — single-source breadth-first distance maps with
//!   passage-exact path reconstruction
//! - [`LongestPath`] — double-sweep diameter estimation, for stairs
//!   placement and similar "far apart" picks
//!
//! Both are value objects computed against a [`warren_core::Grid`]: a map
//! reflects the link state at the moment it was computed and is never
//! invalidated in place, so carve first, then query.

mod distances;
mod longest;

pub use distances::{DistNode, Distances, PathError, UNREACHABLE};
pub use longest::LongestPath;
