//! Player system
//!
//! Holds the player's inventory and round outcome. Space behaviors consult
//! and mutate the player on arrival and inspection.

mod inventory;

pub use inventory::Inventory;

use serde::{Deserialize, Serialize};
use strum::Display;

use crate::object::Item;

/// Round outcome as seen from the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display)]
pub enum PlayerState {
    #[default]
    Uninitialized,
    Playing,
    Win,
    Lose,
}

impl PlayerState {
    /// Win and Lose end the round
    pub const fn is_terminal(&self) -> bool {
        matches!(self, PlayerState::Win | PlayerState::Lose)
    }
}

/// The player character
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Player {
    state: PlayerState,
    inventory: Inventory,
}

impl Player {
    /// Create a player with the default inventory size
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a player whose inventory holds `capacity` items
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            state: PlayerState::Uninitialized,
            inventory: Inventory::with_capacity(capacity),
        }
    }

    pub fn state(&self) -> PlayerState {
        self.state
    }

    /// Set the round state. Callers only move out of `Playing`.
    pub fn set_state(&mut self, state: PlayerState) {
        log::debug!("player state {} -> {}", self.state, state);
        self.state = state;
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlayerState::Playing
    }

    /// Add an item; silently dropped when the inventory is full
    pub fn add_item(&mut self, item: Item) {
        if !self.inventory.add(item) {
            log::debug!("inventory full, dropping {}", item);
        }
    }

    pub fn has_item(&self, item: Item) -> bool {
        self.inventory.contains(item)
    }

    /// Remove one `item` from the inventory, returning whether it was there
    pub fn use_item(&mut self, item: Item) -> bool {
        self.inventory.remove(item)
    }

    pub fn is_inventory_full(&self) -> bool {
        self.inventory.is_full()
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Item symbols in pickup order
    pub fn items(&self) -> &[Item] {
        self.inventory.items()
    }

    /// Human-readable inventory listing
    pub fn inventory_text(&self) -> String {
        if self.inventory.is_empty() {
            return "Inventory is empty.".to_string();
        }
        let symbols: Vec<String> = self
            .inventory
            .items()
            .iter()
            .map(|item| item.symbol().to_string())
            .collect();
        format!("Inventory: {}", symbols.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player_is_uninitialized() {
        let player = Player::new();
        assert_eq!(player.state(), PlayerState::Uninitialized);
        assert!(!player.state().is_terminal());
        assert!(player.items().is_empty());
    }

    #[test]
    fn test_state_transitions() {
        let mut player = Player::new();
        player.set_state(PlayerState::Playing);
        assert!(player.is_playing());
        player.set_state(PlayerState::Win);
        assert!(player.state().is_terminal());
    }

    #[test]
    fn test_add_and_use_items() {
        let mut player = Player::new();
        player.add_item(Item::Pickaxe);
        assert!(player.has_item(Item::Pickaxe));
        assert!(!player.has_item(Item::Rock));
        assert!(player.use_item(Item::Pickaxe));
        assert!(!player.has_item(Item::Pickaxe));
    }

    #[test]
    fn test_use_absent_item_leaves_inventory() {
        let mut player = Player::new();
        player.add_item(Item::Rock);
        assert!(!player.use_item(Item::Pickaxe));
        assert_eq!(player.items(), &[Item::Rock]);
    }

    #[test]
    fn test_third_item_is_dropped() {
        let mut player = Player::new();
        player.add_item(Item::Pickaxe);
        player.add_item(Item::Rock);
        player.add_item(Item::Rock);
        assert_eq!(player.items().len(), 2);
        assert!(player.is_inventory_full());
    }

    #[test]
    fn test_inventory_text() {
        let mut player = Player::new();
        assert_eq!(player.inventory_text(), "Inventory is empty.");
        player.add_item(Item::Pickaxe);
        player.add_item(Item::Rock);
        assert_eq!(player.inventory_text(), "Inventory: P ^");
    }
}
