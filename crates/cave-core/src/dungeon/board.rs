//! The game board
//!
//! Spaces live in a flat row-major `Vec`; neighbors are found by index
//! arithmetic, so dropping the board releases every space exactly once.

use std::fmt;

use super::{Direction, MapDescription, Position, Space};
use crate::world::MapError;
use crate::{START_COL, START_ROW};

/// Grid of spaces plus the player's location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    spaces: Vec<Space>,
    player: Position,
}

impl Board {
    /// Build a board from a map description and place the player.
    ///
    /// The player starts one row down and one column right of the origin,
    /// clamped onto boards smaller than 2x2.
    pub fn new(map: &MapDescription) -> Self {
        let rows = map.rows();
        let cols = map.cols();
        let spaces: Vec<Space> = map.cells().iter().map(|&c| Space::from_symbol(c)).collect();

        let player = Position::new(START_ROW.min(rows - 1), START_COL.min(cols - 1));
        let mut board = Self {
            rows,
            cols,
            spaces,
            player,
        };
        let idx = board.index(player);
        board.spaces[idx].set_occupied(true);

        log::debug!("built {}x{} board, player at {:?}", rows, cols, player);
        board
    }

    /// Parse map text and build a board from it
    pub fn from_text(text: &str) -> Result<Self, MapError> {
        Ok(Self::new(&MapDescription::parse(text)?))
    }

    /// Board built from the built-in 7x7 map
    pub fn from_default_map() -> Self {
        Self::new(&MapDescription::default())
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The top-left cell
    pub fn origin(&self) -> Position {
        Position::new(0, 0)
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    fn index(&self, pos: Position) -> usize {
        pos.row * self.cols + pos.col
    }

    /// Space at `pos`, or `None` off the grid
    pub fn space(&self, pos: Position) -> Option<&Space> {
        if self.contains(pos) {
            self.spaces.get(self.index(pos))
        } else {
            None
        }
    }

    pub fn space_mut(&mut self, pos: Position) -> Option<&mut Space> {
        if self.contains(pos) {
            let idx = self.index(pos);
            self.spaces.get_mut(idx)
        } else {
            None
        }
    }

    /// Position adjacent to `pos` in `dir`, or `None` at the grid edge
    pub fn neighbor(&self, pos: Position, dir: Direction) -> Option<Position> {
        if !self.contains(pos) {
            return None;
        }
        let (dr, dc) = dir.delta();
        let row = pos.row.checked_add_signed(dr)?;
        let col = pos.col.checked_add_signed(dc)?;
        let next = Position::new(row, col);
        self.contains(next).then_some(next)
    }

    pub fn player_position(&self) -> Position {
        self.player
    }

    /// Space the player is standing on
    pub fn player_location(&self) -> &Space {
        &self.spaces[self.index(self.player)]
    }

    pub fn player_location_mut(&mut self) -> &mut Space {
        let idx = self.index(self.player);
        &mut self.spaces[idx]
    }

    /// Move the player one step.
    ///
    /// Returns false, leaving everything untouched, when the target is off
    /// the grid or not walkable. Arrival effects are left to the caller.
    pub fn move_player(&mut self, dir: Direction) -> bool {
        let Some(target) = self.neighbor(self.player, dir) else {
            log::trace!("move {} blocked by grid edge", dir);
            return false;
        };
        let target_idx = self.index(target);
        if !self.spaces[target_idx].is_walkable() {
            log::trace!("move {} blocked by {}", dir, self.spaces[target_idx].kind());
            return false;
        }

        let old_idx = self.index(self.player);
        self.spaces[old_idx].set_occupied(false);
        self.spaces[target_idx].set_occupied(true);
        self.player = target;
        log::trace!("player moved {} to {:?}", dir, target);
        true
    }

    /// Move by WASD key (case-insensitive); other keys never move
    pub fn move_player_key(&mut self, key: char) -> bool {
        match Direction::from_key(key) {
            Some(dir) => self.move_player(dir),
            None => false,
        }
    }

    /// Iterate over rows, origin row first
    pub fn rows_iter(&self) -> impl Iterator<Item = &[Space]> {
        self.spaces.chunks(self.cols)
    }

    /// Iterate over every space with its position
    pub fn spaces(&self) -> impl Iterator<Item = (Position, &Space)> {
        self.spaces
            .iter()
            .enumerate()
            .map(|(i, space)| (Position::new(i / self.cols, i % self.cols), space))
    }

    /// Board as text: one line per row, each symbol followed by a space
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.rows * (self.cols * 2 + 1));
        for (i, row) in self.rows_iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            for space in row {
                out.push(space.symbol());
                out.push(' ');
            }
        }
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::from_default_map()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
