//! Tile glyphs and their classification.
//!
//! A tile is the single rendered character of a level position. The
//! classifiers are pure lookups; an unknown glyph is simply not `valid`
//! and classifies as neither walkable nor wall.

/// Nothing here yet.
pub const EMPTY: char = ' ';
/// Solid rock.
pub const WALL: char = '#';
/// An open doorway.
pub const DOOR: char = '+';
/// Bare corridor floor.
pub const FLOOR: char = '.';
/// The player marker.
pub const PLAYER: char = '@';
/// A monster marker.
pub const MONSTER: char = 'M';
/// Stairs leading down to the next level.
pub const STAIRS: char = '>';
/// Solid rock, rendered as a vertical face.
pub const VERTICAL_WALL: char = '|';
/// A pile of gold.
pub const GOLD: char = '$';

/// Whether a glyph names a known tile.
pub fn valid(tile: char) -> bool {
    matches!(
        tile,
        EMPTY | WALL | DOOR | FLOOR | PLAYER | MONSTER | STAIRS | VERTICAL_WALL | GOLD
    )
}

/// Whether a tile can be stepped onto.
pub fn walkable(tile: char) -> bool {
    matches!(tile, EMPTY | DOOR | FLOOR | PLAYER | STAIRS | GOLD)
}

/// Whether a tile is a wall face.
pub fn wall(tile: char) -> bool {
    matches!(tile, WALL | VERTICAL_WALL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifiers_partition_known_tiles() {
        for tile in [EMPTY, WALL, DOOR, FLOOR, PLAYER, MONSTER, STAIRS, VERTICAL_WALL, GOLD] {
            assert!(valid(tile));
            // No tile is both walkable and a wall.
            assert!(!(walkable(tile) && wall(tile)));
        }
        // Monster tiles are valid but neither walkable nor wall.
        assert!(!walkable(MONSTER));
        assert!(!wall(MONSTER));
    }

    #[test]
    fn unknown_glyphs_classify_false() {
        assert!(!valid('?'));
        assert!(!walkable('?'));
        assert!(!wall('?'));
        assert!(!valid('x'));
    }

    #[test]
    fn walls_are_not_walkable() {
        assert!(wall(WALL));
        assert!(wall(VERTICAL_WALL));
        assert!(!walkable(WALL));
        assert!(!walkable(VERTICAL_WALL));
    }
}
