//! Level cells and their passage links.

use std::ops::{BitAnd, BitOr};

use crate::geom::{Coord, Direction};
use crate::tiles;

// ---------------------------------------------------------------------------
// LinkMask
// ---------------------------------------------------------------------------

/// Bitmask of the directions a cell is linked through.
///
/// Adjacency is strictly 4-connected and links only ever point at wired
/// neighbours, so four bits describe the whole link set of a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinkMask(pub u8);

impl LinkMask {
    pub const NONE: Self = Self(0);
    pub const NORTH: Self = Self(1 << 0);
    pub const SOUTH: Self = Self(1 << 1);
    pub const EAST: Self = Self(1 << 2);
    pub const WEST: Self = Self(1 << 3);

    /// The bit for `dir`.
    #[inline]
    pub const fn of(dir: Direction) -> Self {
        Self(1 << dir.index())
    }

    /// Whether this mask contains all the bits from `other`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Whether the mask is empty.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of set direction bits.
    #[inline]
    pub const fn count(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Add the bits from `other`.
    #[inline]
    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }

    /// Clear the bits from `other`.
    #[inline]
    pub fn remove(&mut self, other: Self) {
        self.0 &= !other.0;
    }
}

impl BitOr for LinkMask {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitAnd for LinkMask {
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

// ---------------------------------------------------------------------------
// Cell
// ---------------------------------------------------------------------------

/// One position in a level's cell arena.
///
/// A cell knows its own coordinate, its up-to-four neighbours (wired once
/// when the grid is built, never changed afterwards), the directions it is
/// linked through, and the tile currently on it. Links are mutated through
/// the owning grid so that carved passages stay symmetric.
#[derive(Clone, Debug)]
pub struct Cell {
    coord: Coord,
    neighbors: [Option<Coord>; 4],
    links: LinkMask,
    tile: char,
}

impl Cell {
    pub(crate) fn new(coord: Coord) -> Self {
        Self {
            coord,
            neighbors: [None; 4],
            links: LinkMask::NONE,
            tile: tiles::EMPTY,
        }
    }

    pub(crate) fn set_neighbor(&mut self, dir: Direction, coord: Coord) {
        self.neighbors[dir.index()] = Some(coord);
    }

    pub(crate) fn add_link(&mut self, dir: Direction) {
        self.links.insert(LinkMask::of(dir));
    }

    pub(crate) fn remove_link(&mut self, dir: Direction) {
        self.links.remove(LinkMask::of(dir));
    }

    pub(crate) fn set_tile(&mut self, tile: char) {
        self.tile = tile;
    }

    /// This cell's position.
    #[inline]
    pub fn coord(&self) -> Coord {
        self.coord
    }

    /// Row of this cell.
    #[inline]
    pub fn row(&self) -> i32 {
        self.coord.row
    }

    /// Column of this cell.
    #[inline]
    pub fn column(&self) -> i32 {
        self.coord.col
    }

    /// The tile glyph currently on this cell.
    #[inline]
    pub fn tile(&self) -> char {
        self.tile
    }

    /// The adjacent coordinate in `dir`, if it exists on the grid.
    #[inline]
    pub fn neighbor(&self, dir: Direction) -> Option<Coord> {
        self.neighbors[dir.index()]
    }

    /// All wired neighbours in canonical direction order.
    pub fn neighbors(&self) -> impl Iterator<Item = Coord> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(|d| self.neighbors[d.index()])
    }

    /// Whether a passage leads out of this cell in `dir`.
    #[inline]
    pub fn is_linked(&self, dir: Direction) -> bool {
        self.links.contains(LinkMask::of(dir))
    }

    /// Whether a passage connects this cell to `other`.
    pub fn linked(&self, other: Coord) -> bool {
        match Direction::between(self.coord, other) {
            Some(dir) => self.is_linked(dir),
            None => false,
        }
    }

    /// Coordinates this cell has passages to, in canonical direction order.
    pub fn links(&self) -> impl Iterator<Item = Coord> + '_ {
        Direction::ALL
            .into_iter()
            .filter(|&d| self.is_linked(d))
            .filter_map(|d| self.neighbors[d.index()])
    }

    /// The raw direction mask of this cell's links.
    #[inline]
    pub fn link_mask(&self) -> LinkMask {
        self.links
    }

    /// Whether any passage leads out of this cell.
    #[inline]
    pub fn has_links(&self) -> bool {
        !self.links.is_empty()
    }

    /// Number of passages out of this cell.
    #[inline]
    pub fn link_count(&self) -> usize {
        self.links.count()
    }
}
