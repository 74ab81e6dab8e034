//! Inspection and inventory display

use super::{ActionResult, ChoiceProvider};
use crate::gameloop::GameState;

/// Examine the space under the player; never uses a step
pub fn do_inspect(state: &mut GameState, chooser: &mut dyn ChoiceProvider) -> ActionResult {
    let GameState {
        board,
        player,
        messages,
        ..
    } = state;
    board
        .player_location_mut()
        .on_inspect(player, chooser, messages);
    ActionResult::NoTime
}

/// Report carried items; never uses a step
pub fn do_inventory(state: &mut GameState) -> ActionResult {
    let text = state.player.inventory_text();
    state.message(text);
    ActionResult::NoTime
}
