//! Grid spaces (tiles)
//!
//! Every cell of the board is a [`Space`]. Its behavior is selected by a
//! closed [`SpaceKind`] variant and dispatched with `match`.

use serde::{Deserialize, Serialize};
use strum::Display;

use crate::action::ChoiceProvider;
use crate::object::Item;
use crate::player::{Player, PlayerState};
use crate::world::SpaceError;
use crate::{EMPTY, EXIT, HOLE, PLAYER_SYMBOL, WALL};

/// Terrain variant of a space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum SpaceKind {
    /// Blocks movement
    Wall,
    /// Swallows the player unless filled with a rock
    Hole { filled: bool },
    /// Reaching it wins the round
    Exit,
    /// Plain floor, possibly carrying an item
    Empty { item: Option<Item> },
}

impl SpaceKind {
    /// Symbol shown when the player is not standing here
    pub const fn default_symbol(&self) -> char {
        match self {
            SpaceKind::Wall => WALL,
            SpaceKind::Hole { filled: false } => HOLE,
            SpaceKind::Hole { filled: true } => EMPTY,
            SpaceKind::Exit => EXIT,
            SpaceKind::Empty { item: Some(item) } => item.symbol(),
            SpaceKind::Empty { item: None } => EMPTY,
        }
    }

    pub const fn is_walkable(&self) -> bool {
        !matches!(self, SpaceKind::Wall)
    }
}

/// A single board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Space {
    kind: SpaceKind,
    occupied: bool,
}

impl Space {
    pub const fn new(kind: SpaceKind) -> Self {
        Self {
            kind,
            occupied: false,
        }
    }

    pub const fn wall() -> Self {
        Self::new(SpaceKind::Wall)
    }

    pub const fn hole() -> Self {
        Self::new(SpaceKind::Hole { filled: false })
    }

    pub const fn exit() -> Self {
        Self::new(SpaceKind::Exit)
    }

    pub const fn empty() -> Self {
        Self::new(SpaceKind::Empty { item: None })
    }

    /// Empty floor carrying `item`
    pub const fn with_item(item: Item) -> Self {
        Self::new(SpaceKind::Empty { item: Some(item) })
    }

    /// Build the space a map character stands for.
    ///
    /// Unrecognized characters become empty floor.
    pub const fn from_symbol(symbol: char) -> Self {
        match symbol {
            WALL => Self::wall(),
            HOLE => Self::hole(),
            EXIT => Self::exit(),
            _ => match Item::from_symbol(symbol) {
                Some(item) => Self::with_item(item),
                None => Self::empty(),
            },
        }
    }

    pub fn kind(&self) -> SpaceKind {
        self.kind
    }

    pub fn is_walkable(&self) -> bool {
        self.kind.is_walkable()
    }

    pub fn is_occupied(&self) -> bool {
        self.occupied
    }

    /// Mark the player as present or absent
    pub fn set_occupied(&mut self, occupied: bool) {
        self.occupied = occupied;
    }

    pub fn default_symbol(&self) -> char {
        self.kind.default_symbol()
    }

    /// Display symbol; the player glyph wins over everything else
    pub fn symbol(&self) -> char {
        if self.occupied {
            PLAYER_SYMBOL
        } else {
            self.kind.default_symbol()
        }
    }

    /// Item lying on this space, if any
    pub fn item(&self) -> Option<Item> {
        match self.kind {
            SpaceKind::Empty { item } => item,
            _ => None,
        }
    }

    /// Change the item shown on an empty space.
    ///
    /// `' '` clears the item; item symbols place that item. Wall, hole and
    /// exit symbols are fixed per variant and rejected.
    pub fn set_symbol(&mut self, symbol: char) -> Result<(), SpaceError> {
        let SpaceKind::Empty { item } = &mut self.kind else {
            return Err(SpaceError::NotEmpty);
        };
        match symbol {
            WALL | HOLE | EXIT => Err(SpaceError::FixedSymbol(symbol)),
            EMPTY => {
                *item = None;
                Ok(())
            }
            _ => {
                let placed = Item::from_symbol(symbol).ok_or(SpaceError::UnknownItem(symbol))?;
                *item = Some(placed);
                Ok(())
            }
        }
    }

    /// Apply the effect of the player stepping onto this space.
    ///
    /// Called once per successful move, after the board has moved the player.
    pub fn on_arrive(&mut self, player: &mut Player, messages: &mut Vec<String>) {
        match &mut self.kind {
            SpaceKind::Wall | SpaceKind::Empty { .. } => {}
            SpaceKind::Exit => {
                messages.push("You reached the exit!".to_string());
                player.set_state(PlayerState::Win);
            }
            SpaceKind::Hole { filled: true } => {}
            SpaceKind::Hole { filled } => {
                if player.use_item(Item::Rock) {
                    messages
                        .push("You filled the hole in the ground with rocks to cross it.".to_string());
                    *filled = true;
                } else {
                    messages.push("You fell in a hole!".to_string());
                    player.set_state(PlayerState::Lose);
                }
            }
        }
    }

    /// Examine this space without moving.
    ///
    /// Items may be offered to the player through `chooser`.
    pub fn on_inspect(
        &mut self,
        player: &mut Player,
        chooser: &mut dyn ChoiceProvider,
        messages: &mut Vec<String>,
    ) {
        let SpaceKind::Empty { item } = &mut self.kind else {
            return;
        };

        match *item {
            Some(Item::Rock) => {
                messages.push("A formation of large rocks.".to_string());
                if !player.has_item(Item::Pickaxe) {
                    return;
                }
                if player.is_inventory_full() {
                    messages.push("You have a pickaxe, but your inventory is full.".to_string());
                    return;
                }
                messages.push("You have a pickaxe.".to_string());
                if chooser.confirm(
                    messages.as_slice(),
                    "A formation of large rocks.",
                    "Mine the rocks",
                    "Do nothing",
                ) {
                    player.add_item(Item::Rock);
                    *item = None;
                    messages.push("You mined some rocks.".to_string());
                }
            }
            Some(Item::Pickaxe) => {
                messages.push("A pickaxe.".to_string());
                if player.is_inventory_full() {
                    return;
                }
                if chooser.confirm(messages.as_slice(), "A pickaxe.", "Take the pickaxe", "Do nothing")
                {
                    player.add_item(Item::Pickaxe);
                    *item = None;
                    messages.push("You took the pickaxe.".to_string());
                }
            }
            None => messages.push("Found nothing of interest.".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Answers every prompt with a fixed option, counting prompts and
    /// keeping the context of the last one
    struct Always {
        answer: usize,
        asked: usize,
        context: Vec<String>,
    }

    impl Always {
        fn accept() -> Self {
            Self {
                answer: 0,
                asked: 0,
                context: Vec::new(),
            }
        }

        fn decline() -> Self {
            Self {
                answer: 1,
                ..Self::accept()
            }
        }
    }

    impl ChoiceProvider for Always {
        fn choose(&mut self, context: &[String], _prompt: &str, _options: &[&str]) -> usize {
            self.asked += 1;
            self.context = context.to_vec();
            self.answer
        }
    }

    fn playing() -> Player {
        let mut player = Player::new();
        player.set_state(PlayerState::Playing);
        player
    }

    #[test]
    fn test_symbol_table() {
        assert_eq!(Space::from_symbol('#').kind(), SpaceKind::Wall);
        assert_eq!(Space::from_symbol('@').kind(), SpaceKind::Hole { filled: false });
        assert_eq!(Space::from_symbol('E').kind(), SpaceKind::Exit);
        assert_eq!(Space::from_symbol('^').item(), Some(Item::Rock));
        assert_eq!(Space::from_symbol('P').item(), Some(Item::Pickaxe));
        assert_eq!(Space::from_symbol(' ').kind(), SpaceKind::Empty { item: None });
        assert_eq!(Space::from_symbol('?').kind(), SpaceKind::Empty { item: None });
    }

    #[test]
    fn test_walkability() {
        assert!(!Space::wall().is_walkable());
        assert!(Space::hole().is_walkable());
        assert!(Space::exit().is_walkable());
        assert!(Space::empty().is_walkable());
        assert!(Space::with_item(Item::Rock).is_walkable());
    }

    #[test]
    fn test_occupancy_overrides_symbol() {
        let mut space = Space::with_item(Item::Pickaxe);
        assert_eq!(space.symbol(), 'P');
        space.set_occupied(true);
        assert_eq!(space.symbol(), 'X');
        space.set_occupied(false);
        assert_eq!(space.symbol(), 'P');
    }

    #[test]
    fn test_set_symbol_on_empty() {
        let mut space = Space::empty();
        assert!(space.set_symbol('^').is_ok());
        assert_eq!(space.symbol(), '^');
        assert!(space.set_symbol(' ').is_ok());
        assert_eq!(space.symbol(), ' ');
    }

    #[test]
    fn test_set_symbol_rejects_fixed_terrain() {
        let mut space = Space::with_item(Item::Rock);
        for symbol in ['#', '@', 'E'] {
            assert_eq!(space.set_symbol(symbol), Err(SpaceError::FixedSymbol(symbol)));
        }
        assert_eq!(space.set_symbol('z'), Err(SpaceError::UnknownItem('z')));
        assert_eq!(space.item(), Some(Item::Rock));
        assert_eq!(Space::exit().set_symbol('^'), Err(SpaceError::NotEmpty));
    }

    #[test]
    fn test_exit_wins_regardless_of_inventory() {
        let mut player = playing();
        player.add_item(Item::Rock);
        let mut messages = Vec::new();
        Space::exit().on_arrive(&mut player, &mut messages);
        assert_eq!(player.state(), PlayerState::Win);
        assert_eq!(player.items(), &[Item::Rock]);
        assert_eq!(messages, vec!["You reached the exit!".to_string()]);
    }

    #[test]
    fn test_hole_with_rock_is_filled() {
        let mut player = playing();
        player.add_item(Item::Rock);
        player.add_item(Item::Rock);
        let mut hole = Space::hole();
        let mut messages = Vec::new();
        hole.on_arrive(&mut player, &mut messages);
        assert_eq!(player.state(), PlayerState::Playing);
        assert_eq!(player.items(), &[Item::Rock]);
        assert_eq!(hole.kind(), SpaceKind::Hole { filled: true });
        assert_eq!(hole.default_symbol(), ' ');

        // A filled hole stays harmless even without rocks
        player.use_item(Item::Rock);
        hole.on_arrive(&mut player, &mut messages);
        assert_eq!(player.state(), PlayerState::Playing);
        assert_eq!(messages.len(), 1);
    }

    #[test]
    fn test_filled_hole_keeps_carried_rock() {
        let mut player = playing();
        player.add_item(Item::Rock);
        let mut hole = Space::new(SpaceKind::Hole { filled: true });
        let mut messages = Vec::new();
        hole.on_arrive(&mut player, &mut messages);
        assert_eq!(player.state(), PlayerState::Playing);
        assert_eq!(player.items(), &[Item::Rock]);
        assert_eq!(hole.kind(), SpaceKind::Hole { filled: true });
        assert!(messages.is_empty());
    }

    #[test]
    fn test_hole_without_rock_loses() {
        let mut player = playing();
        player.add_item(Item::Pickaxe);
        let mut hole = Space::hole();
        let mut messages = Vec::new();
        hole.on_arrive(&mut player, &mut messages);
        assert_eq!(player.state(), PlayerState::Lose);
        assert_eq!(player.items(), &[Item::Pickaxe]);
        assert_eq!(hole.kind(), SpaceKind::Hole { filled: false });
    }

    #[test]
    fn test_empty_and_wall_arrival_do_nothing() {
        let mut player = playing();
        let mut messages = Vec::new();
        Space::empty().on_arrive(&mut player, &mut messages);
        Space::with_item(Item::Pickaxe).on_arrive(&mut player, &mut messages);
        Space::wall().on_arrive(&mut player, &mut messages);
        assert_eq!(player.state(), PlayerState::Playing);
        assert!(messages.is_empty());
        assert!(player.items().is_empty());
    }

    #[test]
    fn test_take_pickaxe() {
        let mut player = playing();
        let mut space = Space::with_item(Item::Pickaxe);
        let mut chooser = Always::accept();
        let mut messages = Vec::new();
        space.on_inspect(&mut player, &mut chooser, &mut messages);
        assert_eq!(chooser.asked, 1);
        assert!(player.has_item(Item::Pickaxe));
        assert_eq!(space.item(), None);
        assert_eq!(space.symbol(), ' ');
    }

    #[test]
    fn test_decline_pickaxe() {
        let mut player = playing();
        let mut space = Space::with_item(Item::Pickaxe);
        let mut chooser = Always::decline();
        let mut messages = Vec::new();
        space.on_inspect(&mut player, &mut chooser, &mut messages);
        assert!(!player.has_item(Item::Pickaxe));
        assert_eq!(space.item(), Some(Item::Pickaxe));
    }

    #[test]
    fn test_pickaxe_not_offered_when_full() {
        let mut player = playing();
        player.add_item(Item::Rock);
        player.add_item(Item::Rock);
        let mut space = Space::with_item(Item::Pickaxe);
        let mut chooser = Always::accept();
        let mut messages = Vec::new();
        space.on_inspect(&mut player, &mut chooser, &mut messages);
        assert_eq!(chooser.asked, 0);
        assert_eq!(space.item(), Some(Item::Pickaxe));
    }

    #[test]
    fn test_mine_rock_with_pickaxe() {
        let mut player = playing();
        player.add_item(Item::Pickaxe);
        let mut space = Space::with_item(Item::Rock);
        let mut chooser = Always::accept();
        let mut messages = Vec::new();
        space.on_inspect(&mut player, &mut chooser, &mut messages);
        assert_eq!(player.items(), &[Item::Pickaxe, Item::Rock]);
        assert_eq!(space.item(), None);
        assert_eq!(
            chooser.context,
            vec![
                "A formation of large rocks.".to_string(),
                "You have a pickaxe.".to_string()
            ]
        );
        assert_eq!(messages.last().map(String::as_str), Some("You mined some rocks."));
    }

    #[test]
    fn test_rock_without_pickaxe_cannot_be_mined() {
        let mut player = playing();
        let mut space = Space::with_item(Item::Rock);
        let mut chooser = Always::accept();
        let mut messages = Vec::new();
        space.on_inspect(&mut player, &mut chooser, &mut messages);
        assert_eq!(chooser.asked, 0);
        assert_eq!(space.item(), Some(Item::Rock));
        assert_eq!(messages, vec!["A formation of large rocks.".to_string()]);
    }

    #[test]
    fn test_rock_with_full_inventory_only_informs() {
        let mut player = playing();
        player.add_item(Item::Pickaxe);
        player.add_item(Item::Rock);
        let mut space = Space::with_item(Item::Rock);
        let mut chooser = Always::accept();
        let mut messages = Vec::new();
        space.on_inspect(&mut player, &mut chooser, &mut messages);
        assert_eq!(chooser.asked, 0);
        assert_eq!(player.items().len(), 2);
        assert_eq!(
            messages.last().map(String::as_str),
            Some("You have a pickaxe, but your inventory is full.")
        );
    }

    #[test]
    fn test_inspect_plain_floor() {
        let mut player = playing();
        let mut chooser = Always::accept();
        let mut messages = Vec::new();
        Space::empty().on_inspect(&mut player, &mut chooser, &mut messages);
        assert_eq!(messages, vec!["Found nothing of interest.".to_string()]);
    }

    #[test]
    fn test_inspect_terrain_is_silent() {
        let mut player = playing();
        let mut chooser = Always::accept();
        let mut messages = Vec::new();
        for mut space in [Space::wall(), Space::hole(), Space::exit()] {
            space.on_inspect(&mut player, &mut chooser, &mut messages);
        }
        assert!(messages.is_empty());
        assert_eq!(chooser.asked, 0);
    }
}
