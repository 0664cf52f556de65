//! Cell-type metadata and the flyweight registry.
//!
//! A [`CellType`] is the immutable description shared by every level
//! position of one kind (glyph plus behaviour flags). The
//! [`CellTypeRegistry`] hands out `Rc`-shared instances so that a level
//! with thousands of wall cells carries exactly one wall record.
//!
//! Lookup is deliberately asymmetric: [`CellTypeRegistry::get`] by kind is
//! strict and fails on an unregistered kind, while
//! [`CellTypeRegistry::by_glyph`] is permissive and falls back to the
//! Empty type so that render paths never error on stray glyphs.

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::tiles;

// ---------------------------------------------------------------------------
// CellKind
// ---------------------------------------------------------------------------

/// The closed set of cell-type keys.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellKind {
    Empty,
    Wall,
    Player,
    Stairs,
    Door,
    Floor,
    Monster,
    VerticalWall,
}

impl CellKind {
    /// All kinds in declaration order. Glyph lookup scans this order, so
    /// a glyph shared by two kinds resolves to the earlier one.
    pub const ALL: [CellKind; 8] = [
        CellKind::Empty,
        CellKind::Wall,
        CellKind::Player,
        CellKind::Stairs,
        CellKind::Door,
        CellKind::Floor,
        CellKind::Monster,
        CellKind::VerticalWall,
    ];
}

// ---------------------------------------------------------------------------
// CellProps
// ---------------------------------------------------------------------------

/// Behaviour flags of a cell type.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CellProps {
    pub walkable: bool,
    pub stairs: bool,
    pub player: bool,
}

impl CellProps {
    /// Props for a type actors can step onto (builder start).
    #[inline]
    pub const fn walkable() -> Self {
        Self {
            walkable: true,
            stairs: false,
            player: false,
        }
    }

    /// Props for an impassable type (builder start).
    #[inline]
    pub const fn solid() -> Self {
        Self {
            walkable: false,
            stairs: false,
            player: false,
        }
    }

    /// Mark the type as a stairway (builder).
    #[inline]
    pub const fn with_stairs(mut self) -> Self {
        self.stairs = true;
        self
    }

    /// Mark the type as the player marker (builder).
    #[inline]
    pub const fn with_player(mut self) -> Self {
        self.player = true;
        self
    }
}

// ---------------------------------------------------------------------------
// CellType
// ---------------------------------------------------------------------------

/// Immutable metadata record for one cell kind.
///
/// Instances are only created by a [`CellTypeRegistry`] and shared via
/// `Rc`; two lookups of the same kind on the same registry return the
/// same allocation (`Rc::ptr_eq` holds).
#[derive(Debug, PartialEq, Eq)]
pub struct CellType {
    kind: CellKind,
    glyph: char,
    props: CellProps,
}

impl CellType {
    fn new(kind: CellKind, glyph: char, props: CellProps) -> Self {
        Self { kind, glyph, props }
    }

    /// The registry key of this type.
    #[inline]
    pub fn kind(&self) -> CellKind {
        self.kind
    }

    /// The rendered glyph.
    #[inline]
    pub fn glyph(&self) -> char {
        self.glyph
    }

    /// Whether actors can step onto cells of this type.
    #[inline]
    pub fn walkable(&self) -> bool {
        self.props.walkable
    }

    /// Whether this type is a stairway to the next level.
    #[inline]
    pub fn stairs(&self) -> bool {
        self.props.stairs
    }

    /// Whether this type marks the player.
    #[inline]
    pub fn player(&self) -> bool {
        self.props.player
    }
}

// ---------------------------------------------------------------------------
// CellTypeRegistry
// ---------------------------------------------------------------------------

/// Error for a strict lookup of a kind that was never registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownCellType(pub CellKind);

impl fmt::Display for UnknownCellType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no cell type registered for kind {:?}", self.0)
    }
}

impl std::error::Error for UnknownCellType {}

/// Factory and cache for [`CellType`] instances.
///
/// Registration happens while the registry is still exclusively owned;
/// once it is shared behind an `Rc` (for example by a grid), `register`
/// is no longer reachable. Re-registering a kind during setup replaces
/// the record, and `Rc`s handed out before that point keep the old one,
/// so finish registration before the first lookup.
#[derive(Debug)]
pub struct CellTypeRegistry {
    types: HashMap<CellKind, Rc<CellType>>,
    empty: Rc<CellType>,
}

impl CellTypeRegistry {
    /// A registry with only the Empty type registered.
    ///
    /// The Empty type is always present so that [`by_glyph`] stays total.
    ///
    /// [`by_glyph`]: CellTypeRegistry::by_glyph
    pub fn new() -> Self {
        let empty = Rc::new(CellType::new(
            CellKind::Empty,
            tiles::EMPTY,
            CellProps::walkable(),
        ));
        let mut types = HashMap::new();
        types.insert(CellKind::Empty, Rc::clone(&empty));
        Self { types, empty }
    }

    /// A registry with the full standard table registered.
    pub fn standard() -> Self {
        let mut reg = Self::new();
        reg.register(CellKind::Wall, tiles::WALL, CellProps::solid());
        reg.register(
            CellKind::Player,
            tiles::PLAYER,
            CellProps::walkable().with_player(),
        );
        reg.register(
            CellKind::Stairs,
            tiles::STAIRS,
            CellProps::walkable().with_stairs(),
        );
        reg.register(CellKind::Door, tiles::DOOR, CellProps::walkable());
        reg.register(CellKind::Floor, tiles::FLOOR, CellProps::walkable());
        reg.register(CellKind::Monster, tiles::MONSTER, CellProps::solid());
        reg.register(
            CellKind::VerticalWall,
            tiles::VERTICAL_WALL,
            CellProps::solid(),
        );
        reg
    }

    /// Register (or replace) the type for `kind`.
    pub fn register(&mut self, kind: CellKind, glyph: char, props: CellProps) {
        let t = Rc::new(CellType::new(kind, glyph, props));
        if kind == CellKind::Empty {
            self.empty = Rc::clone(&t);
        }
        self.types.insert(kind, t);
    }

    /// Strict lookup by kind.
    pub fn get(&self, kind: CellKind) -> Result<Rc<CellType>, UnknownCellType> {
        self.types.get(&kind).cloned().ok_or(UnknownCellType(kind))
    }

    /// Permissive lookup by glyph: the first registered kind (in
    /// [`CellKind::ALL`] order) whose glyph matches, or the Empty type.
    pub fn by_glyph(&self, glyph: char) -> Rc<CellType> {
        for kind in CellKind::ALL {
            if let Some(t) = self.types.get(&kind) {
                if t.glyph() == glyph {
                    return Rc::clone(t);
                }
            }
        }
        self.empty()
    }

    /// The Empty fallback type.
    #[inline]
    pub fn empty(&self) -> Rc<CellType> {
        Rc::clone(&self.empty)
    }

    /// Whether a type is registered for `kind`.
    #[inline]
    pub fn contains(&self, kind: CellKind) -> bool {
        self.types.contains_key(&kind)
    }

    /// Number of registered types.
    #[inline]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Always false: the Empty type is registered from construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl Default for CellTypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_registers_every_kind() {
        let reg = CellTypeRegistry::standard();
        assert_eq!(reg.len(), 8);
        for kind in CellKind::ALL {
            assert!(reg.contains(kind));
            let t = reg.get(kind).unwrap();
            assert_eq!(t.kind(), kind);
        }
    }

    #[test]
    fn standard_table_props() {
        let reg = CellTypeRegistry::standard();
        assert!(!reg.get(CellKind::Wall).unwrap().walkable());
        assert!(!reg.get(CellKind::VerticalWall).unwrap().walkable());
        assert!(!reg.get(CellKind::Monster).unwrap().walkable());
        assert!(reg.get(CellKind::Floor).unwrap().walkable());
        assert!(reg.get(CellKind::Door).unwrap().walkable());

        let stairs = reg.get(CellKind::Stairs).unwrap();
        assert!(stairs.walkable() && stairs.stairs() && !stairs.player());

        let player = reg.get(CellKind::Player).unwrap();
        assert!(player.walkable() && player.player() && !player.stairs());
    }

    #[test]
    fn strict_lookup_fails_on_unregistered_kind() {
        let reg = CellTypeRegistry::new();
        assert!(reg.contains(CellKind::Empty));
        assert!(!reg.contains(CellKind::Wall));
        let err = reg.get(CellKind::Wall).unwrap_err();
        assert_eq!(err, UnknownCellType(CellKind::Wall));
        assert!(format!("{err}").contains("Wall"));
    }

    #[test]
    fn lookups_share_one_allocation() {
        let reg = CellTypeRegistry::standard();
        let a = reg.get(CellKind::Wall).unwrap();
        let b = reg.get(CellKind::Wall).unwrap();
        assert!(Rc::ptr_eq(&a, &b));

        let c = reg.by_glyph(tiles::WALL);
        assert!(Rc::ptr_eq(&a, &c));
    }

    #[test]
    fn distinct_registries_have_distinct_instances() {
        let a = CellTypeRegistry::standard();
        let b = CellTypeRegistry::standard();
        let ta = a.get(CellKind::Floor).unwrap();
        let tb = b.get(CellKind::Floor).unwrap();
        assert_eq!(ta.glyph(), tb.glyph());
        assert!(!Rc::ptr_eq(&ta, &tb));
    }

    #[test]
    fn glyph_lookup_falls_back_to_empty() {
        let reg = CellTypeRegistry::standard();
        let t = reg.by_glyph('?');
        assert_eq!(t.kind(), CellKind::Empty);
        assert!(Rc::ptr_eq(&t, &reg.empty()));

        // A minimal registry resolves even registered-elsewhere glyphs to Empty.
        let minimal = CellTypeRegistry::new();
        assert_eq!(minimal.by_glyph(tiles::WALL).kind(), CellKind::Empty);
    }

    #[test]
    fn reregistration_replaces_the_record() {
        let mut reg = CellTypeRegistry::standard();
        let before = reg.get(CellKind::Door).unwrap();
        reg.register(CellKind::Door, '/', CellProps::walkable());
        let after = reg.get(CellKind::Door).unwrap();
        assert!(!Rc::ptr_eq(&before, &after));
        assert_eq!(after.glyph(), '/');
        // The old record lives on in holders of the old Rc.
        assert_eq!(before.glyph(), tiles::DOOR);
    }
}
