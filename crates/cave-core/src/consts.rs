//! Game constants: the symbol table, player defaults and the built-in map

/// Empty floor
pub const EMPTY: char = ' ';
/// Wall (not walkable)
pub const WALL: char = '#';
/// Hole in the ground
pub const HOLE: char = '@';
/// Cave exit
pub const EXIT: char = 'E';

/// Rock item
pub const ROCK: char = '^';
/// Pickaxe item
pub const PICK: char = 'P';

/// Glyph drawn on the space the player occupies
pub const PLAYER_SYMBOL: char = 'X';

/// Number of inventory slots
pub const INVENTORY_MAX: usize = 2;

/// Largest inventory a configuration may ask for
pub const INVENTORY_LIMIT: usize = 16;

/// Steps available at the start of a round
pub const START_STEPS: u32 = 22;

/// Player start position, one row down and one column right of the origin
pub const START_ROW: usize = 1;
pub const START_COL: usize = 1;

/// Map file read when no other path is configured
pub const DEFAULT_MAP_FILE: &str = "map.txt";

/// Built-in 7x7 map used when no map file can be read
pub const DEFAULT_MAP: [&str; 7] = [
    "#######",
    "# @  ^#",
    "# ^#  #",
    "#P#  ##",
    "#^# @@#",
    "##^@@E#",
    "#######",
];
