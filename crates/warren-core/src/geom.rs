//! Geometry primitives: [`Coord`] and [`Direction`].
//!
//! Rows grow downward and columns grow rightward, so row 0 is the top row
//! of a level and [`Direction::North`] decreases the row. Coordinates are
//! signed so that callers can probe positions outside a grid without casts.

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Coord
// ---------------------------------------------------------------------------

/// A row/column position on a level grid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    /// Top-left corner (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new coordinate.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a coordinate shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// The adjacent coordinate one step in `dir`.
    #[inline]
    pub const fn step(self, dir: Direction) -> Self {
        let (drow, dcol) = dir.delta();
        self.shift(drow, dcol)
    }

    /// The four cardinal neighbours in canonical order (north, south,
    /// east, west).
    #[inline]
    pub fn neighbors_4(self) -> [Coord; 4] {
        [
            self.step(Direction::North),
            self.step(Direction::South),
            self.step(Direction::East),
            self.step(Direction::West),
        ]
    }
}

// --- trait impls for Coord ---

impl PartialOrd for Coord {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Coord {
    /// Row-major order: by row, then by column.
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl Add for Coord {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Coord {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// One of the four cardinal directions.
///
/// Level topology is strictly 4-connected; there are no diagonals.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// All directions in canonical order. Every iteration over directions
    /// in this crate follows this order, which keeps neighbour visits and
    /// tie-breaking deterministic.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// The (drow, dcol) step for this direction.
    #[inline]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::East => (0, 1),
            Direction::West => (0, -1),
        }
    }

    /// The reverse direction.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    /// Stable index in `0..4`, matching the position in [`Direction::ALL`].
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::South => 1,
            Direction::East => 2,
            Direction::West => 3,
        }
    }

    /// The direction of `b` as seen from `a`, if the two are 4-adjacent.
    pub fn between(a: Coord, b: Coord) -> Option<Direction> {
        Direction::ALL.into_iter().find(|&d| a.step(d) == b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coord_arithmetic() {
        let a = Coord::new(1, 2);
        let b = Coord::new(3, 4);
        assert_eq!(a + b, Coord::new(4, 6));
        assert_eq!(b - a, Coord::new(2, 2));
        assert_eq!(a.shift(-1, 1), Coord::new(0, 3));
    }

    #[test]
    fn coord_row_major_order() {
        let mut coords = vec![
            Coord::new(1, 0),
            Coord::new(0, 2),
            Coord::new(0, 0),
            Coord::new(1, 1),
        ];
        coords.sort();
        assert_eq!(
            coords,
            vec![
                Coord::new(0, 0),
                Coord::new(0, 2),
                Coord::new(1, 0),
                Coord::new(1, 1),
            ]
        );
    }

    #[test]
    fn step_matches_delta() {
        let c = Coord::new(5, 5);
        assert_eq!(c.step(Direction::North), Coord::new(4, 5));
        assert_eq!(c.step(Direction::South), Coord::new(6, 5));
        assert_eq!(c.step(Direction::East), Coord::new(5, 6));
        assert_eq!(c.step(Direction::West), Coord::new(5, 4));
    }

    #[test]
    fn opposite_round_trips() {
        for d in Direction::ALL {
            assert_eq!(d.opposite().opposite(), d);
            let (dr, dc) = d.delta();
            let (or, oc) = d.opposite().delta();
            assert_eq!((dr + or, dc + oc), (0, 0));
        }
    }

    #[test]
    fn between_adjacent_coords() {
        let c = Coord::new(2, 2);
        assert_eq!(
            Direction::between(c, Coord::new(1, 2)),
            Some(Direction::North)
        );
        assert_eq!(
            Direction::between(c, Coord::new(2, 3)),
            Some(Direction::East)
        );
        assert_eq!(Direction::between(c, Coord::new(3, 3)), None);
        assert_eq!(Direction::between(c, c), None);
    }

    #[test]
    fn neighbors_4_order() {
        let n = Coord::new(1, 1).neighbors_4();
        assert_eq!(n[0], Coord::new(0, 1));
        assert_eq!(n[1], Coord::new(2, 1));
        assert_eq!(n[2], Coord::new(1, 2));
        assert_eq!(n[3], Coord::new(1, 0));
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn coord_json_round_trip() {
        let c = Coord::new(3, -1);
        let json = serde_json::to_string(&c).unwrap();
        let back: Coord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }

    #[test]
    fn direction_json_round_trip() {
        for d in Direction::ALL {
            let json = serde_json::to_string(&d).unwrap();
            let back: Direction = serde_json::from_str(&json).unwrap();
            assert_eq!(back, d);
        }
    }
}
