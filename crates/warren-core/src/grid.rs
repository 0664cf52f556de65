//! The level grid: a rectangular arena of cells.
//!
//! A [`Grid`] owns `rows * cols` cells in row-major order, wires each
//! cell's neighbour table once at construction, and is the only mutator
//! of link state, which keeps carved passages symmetric unless a caller
//! explicitly asks for a one-way link. Bounds probes (`at`, `in_bounds`,
//! `blocks_vision`) never error: poking outside the grid is a routine
//! part of neighbour scans.

use std::fmt;
use std::rc::Rc;

use rand::{Rng, RngExt};

use crate::cell::Cell;
use crate::celltype::{CellType, CellTypeRegistry};
use crate::geom::{Coord, Direction};

// ---------------------------------------------------------------------------
// GridError
// ---------------------------------------------------------------------------

/// Error returned by grid construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// Rows and columns must both be at least 1.
    InvalidDimensions { rows: i32, cols: i32 },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::InvalidDimensions { rows, cols } => {
                write!(
                    f,
                    "invalid grid dimensions {rows}x{cols}: both must be at least 1"
                )
            }
        }
    }
}

impl std::error::Error for GridError {}

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// A rectangular dungeon level: the cell arena plus its type registry.
#[derive(Debug)]
pub struct Grid {
    rows: i32,
    cols: i32,
    cells: Vec<Cell>,
    registry: Rc<CellTypeRegistry>,
}

impl Grid {
    /// Create a grid with the standard cell-type table.
    pub fn new(rows: i32, cols: i32) -> Result<Self, GridError> {
        Self::with_registry(rows, cols, Rc::new(CellTypeRegistry::standard()))
    }

    /// Create a grid sharing an existing registry.
    pub fn with_registry(
        rows: i32,
        cols: i32,
        registry: Rc<CellTypeRegistry>,
    ) -> Result<Self, GridError> {
        if rows < 1 || cols < 1 {
            return Err(GridError::InvalidDimensions { rows, cols });
        }
        let mut cells = Vec::with_capacity((rows * cols) as usize);
        for row in 0..rows {
            for col in 0..cols {
                cells.push(Cell::new(Coord::new(row, col)));
            }
        }
        let mut grid = Self {
            rows,
            cols,
            cells,
            registry,
        };
        grid.wire_neighbors();
        Ok(grid)
    }

    /// Wire every cell's neighbour table from grid adjacency. No wraparound:
    /// edge cells keep `None` toward the outside.
    fn wire_neighbors(&mut self) {
        for i in 0..self.cells.len() {
            let coord = self.cells[i].coord();
            // neighbors_4 lists candidates in Direction::ALL order.
            for (dir, n) in Direction::ALL.into_iter().zip(coord.neighbors_4()) {
                if self.in_bounds(n) {
                    self.cells[i].set_neighbor(dir, n);
                }
            }
        }
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn columns(&self) -> i32 {
        self.cols
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: dimensions are validated to at least 1x1.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `c` is a cell of this grid.
    #[inline]
    pub fn in_bounds(&self, c: Coord) -> bool {
        c.row >= 0 && c.row < self.rows && c.col >= 0 && c.col < self.cols
    }

    #[inline]
    fn idx(&self, c: Coord) -> usize {
        (c.row * self.cols + c.col) as usize
    }

    /// The cell at `c`, or `None` when out of bounds.
    pub fn at(&self, c: Coord) -> Option<&Cell> {
        if self.in_bounds(c) {
            Some(&self.cells[self.idx(c)])
        } else {
            None
        }
    }

    /// Row-major iterator over all cells.
    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    /// A uniformly random cell.
    pub fn random_cell(&self, rng: &mut impl Rng) -> &Cell {
        let row = rng.random_range(0..self.rows);
        let col = rng.random_range(0..self.cols);
        &self.cells[self.idx(Coord::new(row, col))]
    }

    /// Whether `c` is opaque for line-of-sight purposes.
    ///
    /// Out-of-bounds coordinates and cells with no carved passages read as
    /// solid. After maze generation every cell has at least one link, so
    /// the link check matters on ungenerated or partially carved levels.
    pub fn blocks_vision(&self, c: Coord) -> bool {
        match self.at(c) {
            Some(cell) => !cell.has_links(),
            None => true,
        }
    }

    // ── link state ─────────────────────────────────────────────────────

    /// The direction from `a` to `b` when both are cells of this grid and
    /// 4-adjacent. Linking goes through this check, so a link can only
    /// ever point at a wired neighbour.
    fn adjacency(&self, a: Coord, b: Coord) -> Option<Direction> {
        if !self.in_bounds(a) || !self.in_bounds(b) {
            return None;
        }
        Direction::between(a, b)
    }

    /// Carve a two-way passage between adjacent cells `a` and `b`.
    ///
    /// Returns `false` (and changes nothing) unless both are in-bounds,
    /// 4-adjacent cells.
    pub fn link(&mut self, a: Coord, b: Coord) -> bool {
        let Some(dir) = self.adjacency(a, b) else {
            return false;
        };
        let ia = self.idx(a);
        let ib = self.idx(b);
        self.cells[ia].add_link(dir);
        self.cells[ib].add_link(dir.opposite());
        true
    }

    /// Carve a passage from `a` toward `b` only.
    pub fn link_one_way(&mut self, a: Coord, b: Coord) -> bool {
        let Some(dir) = self.adjacency(a, b) else {
            return false;
        };
        let ia = self.idx(a);
        self.cells[ia].add_link(dir);
        true
    }

    /// Remove the passage between `a` and `b` in both directions.
    pub fn unlink(&mut self, a: Coord, b: Coord) -> bool {
        let Some(dir) = self.adjacency(a, b) else {
            return false;
        };
        let ia = self.idx(a);
        let ib = self.idx(b);
        self.cells[ia].remove_link(dir);
        self.cells[ib].remove_link(dir.opposite());
        true
    }

    /// Remove only the passage from `a` toward `b`.
    pub fn unlink_one_way(&mut self, a: Coord, b: Coord) -> bool {
        let Some(dir) = self.adjacency(a, b) else {
            return false;
        };
        let ia = self.idx(a);
        self.cells[ia].remove_link(dir);
        true
    }

    /// Whether a passage leads from `a` to `b`.
    pub fn linked(&self, a: Coord, b: Coord) -> bool {
        self.at(a).is_some_and(|cell| cell.linked(b))
    }

    /// Total number of directed links. A two-way passage counts twice,
    /// once from each side.
    pub fn link_count(&self) -> usize {
        self.cells.iter().map(Cell::link_count).sum()
    }

    /// Coordinates of every cell with exactly one link, in row-major order.
    pub fn dead_ends(&self) -> Vec<Coord> {
        self.cells
            .iter()
            .filter(|c| c.link_count() == 1)
            .map(Cell::coord)
            .collect()
    }

    // ── tiles and types ────────────────────────────────────────────────

    /// The tile glyph at `c`, or `None` when out of bounds.
    pub fn tile(&self, c: Coord) -> Option<char> {
        self.at(c).map(Cell::tile)
    }

    /// Put `tile` on the cell at `c`. Returns `false` when out of bounds.
    pub fn set_tile(&mut self, c: Coord, tile: char) -> bool {
        if !self.in_bounds(c) {
            return false;
        }
        let i = self.idx(c);
        self.cells[i].set_tile(tile);
        true
    }

    /// The cell-type record for the tile at `c`, resolved through the
    /// registry's permissive glyph lookup.
    pub fn type_at(&self, c: Coord) -> Option<Rc<CellType>> {
        self.at(c).map(|cell| self.registry.by_glyph(cell.tile()))
    }

    /// The registry this grid resolves tiles against.
    #[inline]
    pub fn registry(&self) -> &CellTypeRegistry {
        &self.registry
    }

    // ── rendering ──────────────────────────────────────────────────────

    /// Render the carved topology as ASCII, choosing each cell's body
    /// glyph with `f`.
    ///
    /// Cell bodies are three columns wide; a wall is drawn wherever no
    /// passage links the two sides.
    pub fn render_with(&self, mut f: impl FnMut(&Cell) -> char) -> String {
        let cols = self.cols as usize;
        let mut out = String::with_capacity((self.rows as usize * 2 + 1) * (cols * 4 + 2));
        out.push('+');
        for _ in 0..cols {
            out.push_str("---+");
        }
        out.push('\n');
        for row in 0..self.rows {
            let mut body = String::from("|");
            let mut south = String::from("+");
            for col in 0..self.cols {
                let cell = &self.cells[self.idx(Coord::new(row, col))];
                body.push(' ');
                body.push(f(cell));
                body.push(' ');
                body.push(if cell.is_linked(Direction::East) { ' ' } else { '|' });
                south.push_str(if cell.is_linked(Direction::South) { "   " } else { "---" });
                south.push('+');
            }
            out.push_str(&body);
            out.push('\n');
            out.push_str(&south);
            out.push('\n');
        }
        out
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Grid {
    /// The topology with each cell's tile as its body glyph.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_with(Cell::tile))
    }
}
