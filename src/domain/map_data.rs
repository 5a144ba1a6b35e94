//! Embedded map grids for every registered area
//!
//! Grids live in the binary rather than on disk so a deployment can never
//! lose them. One character per tile; see `tile_map` for the legend. Every
//! row must match the map's width - the world registry validates this at
//! startup and refuses to run otherwise.

use crate::domain::value_objects::MapId;

/// Town: house blocks with NPCs. `1` to Cave, `3`/`4`/`5` into the houses
/// (each door doubling as the matching re-entry spawn).
pub const TOWN: &str = "\
########################################\n\
#..............HHHH..............HHHH..#\n\
#....P.........HHHH....N.........HHHH..#\n\
#..............HHHH..............HHHH..#\n\
#................3..................4..#\n\
#..............HHHH..............HHHH..#\n\
#..............HHHH..............HHHH..#\n\
#......................................#\n\
#.................................1....#\n\
#..............HHHH..............HHHH..#\n\
#..............HHHH....N.........HHHH..#\n\
#..............HHHH..............HHHH..#\n\
#................5.....................#\n\
#..............HHHH..............HHHH..#\n\
#..............HHHH..............HHHH..#\n\
#..N............N..........N........N..#\n\
#..............HHHH..............HHHH..#\n\
#..............HHHH..............HHHH..#\n\
#..............HHHH..............HHHH..#\n\
#..............HHHH..............HHHH..#\n\
#..............HHHH..............HHHH..#\n\
########################################";

/// Open field between town and dungeon. `2` back to Town, `3` to Dungeon.
pub const FIELD: &str = "\
########################################\n\
#......................................#\n\
#......................................#\n\
#......................................#\n\
#............E.....E...................#\n\
#......................................#\n\
#.................P....................#\n\
#......................................#\n\
#............E.....E...................#\n\
#......................................#\n\
#.....................................2#\n\
#......................................#\n\
#..............3.......................#\n\
#......................................#\n\
########################################";

/// Doubled cave maze, dense with encounter floors. `2` back to Town.
pub const CAVE: &str = "\
################################################\n\
#..........................#...................#\n\
#.EEEE........EEEE.........#.EEEE........EEEE..#\n\
#.E..............E.........#.E..............E..#\n\
#.E....P.........E.........#.E..............E..#\n\
#.E................E.......#.E..............E..#\n\
#....EEEE........EEEE.......#.EEEE........EEEE.#\n\
#..........................#...................#\n\
######............##############################\n\
#......E........E........E........E............#\n\
#......E........E........E........E.......2....#\n\
#......EEEE.....EEEE.....EEEE.....EEEE.........#\n\
#..............................................#\n\
#..........................#...................#\n\
#.EEEE........EEEE.........#.EEEE........EEEE..#\n\
#.E..............E.........#.E..............E..#\n\
#.E..............E.........#.E..............E..#\n\
#.E..............E.........#.E..............E..#\n\
#.EEEE........EEEE.........#.EEEE........EEEE..#\n\
#..........................#...................#\n\
#..............................................#\n\
#......E........E........E........E............#\n\
#......E........E........E........E............#\n\
#......EEEE.....EEEE.....EEEE.....EEEE.........#\n\
#..............................................#\n\
################################################";

/// Dungeon interior. `2` back to Field.
pub const DUNGEON: &str = "\
########################################\n\
#......................................#\n\
#..............####....................#\n\
#..............#..#....................#\n\
#....E..........E.........E............#\n\
#......................................#\n\
#.................P....................#\n\
#......................................#\n\
#....E.........E.........E.............#\n\
#......................................#\n\
#.....................................2#\n\
#......................................#\n\
########################################";

/// Overworld. `2` to Town spawn 4, `3` to Field.
pub const WORLD_MAP: &str = "\
########################################\n\
#......................................#\n\
#......................................#\n\
#......................................#\n\
#......................................#\n\
#......................................#\n\
#.................P....................#\n\
#......................................#\n\
#......................................#\n\
#......................................#\n\
#.....................................2#\n\
#......................................#\n\
#.................3....................#\n\
########################################";

/// House 1 interior; `6` back to Town spawn 1.
pub const HOUSE1: &str = "\
############\n\
#..........#\n\
#..........#\n\
#....P.....#\n\
#..........#\n\
#..........#\n\
#.....6....#\n\
############";

/// House 2 interior; `7` back to Town spawn 2.
pub const HOUSE2: &str = "\
############\n\
#..........#\n\
#..........#\n\
#....P.....#\n\
#..........#\n\
#..........#\n\
#.....7....#\n\
############";

/// House 3 interior; `8` back to Town spawn 3.
pub const HOUSE3: &str = "\
############\n\
#..........#\n\
#..........#\n\
#....P.....#\n\
#..........#\n\
#..........#\n\
#.....8....#\n\
############";

/// Raw grid text for a registered map.
pub fn grid(id: MapId) -> &'static str {
    match id {
        MapId::Town => TOWN,
        MapId::Field => FIELD,
        MapId::Cave => CAVE,
        MapId::Dungeon => DUNGEON,
        MapId::House1 => HOUSE1,
        MapId::House2 => HOUSE2,
        MapId::House3 => HOUSE3,
        MapId::WorldMap => WORLD_MAP,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_map_has_a_grid() {
        for id in MapId::ALL {
            assert!(!grid(id).is_empty());
        }
    }

    #[test]
    fn test_builtin_grids_are_rectangular() {
        for id in MapId::ALL {
            let text = grid(id);
            let width = text.lines().next().map(str::len).unwrap_or(0);
            for (i, line) in text.lines().enumerate() {
                assert_eq!(line.len(), width, "{id} line {}", i + 1);
            }
        }
    }
}
