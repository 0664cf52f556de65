//! **warren-core** — Dungeon-level topology (core types).
//!
//! This crate provides the foundational types of the *warren* ecosystem:
//! row/column geometry, tile glyph classification, the flyweight cell-type
//! registry, and the grid arena of linked cells that carving and distance
//! queries operate on.

pub mod cell;
pub mod celltype;
pub mod geom;
pub mod grid;
pub mod tiles;

pub use cell::{Cell, LinkMask};
pub use celltype::{CellKind, CellProps, CellType, CellTypeRegistry, UnknownCellType};
pub use geom::{Coord, Direction};
pub use grid::{Grid, GridError};
