//! Movement (step onto a neighboring space and trigger its arrival effect)

use super::{ActionResult, Direction};
use crate::gameloop::GameState;

/// Move the player in `dir`.
///
/// A blocked move costs nothing. A successful one triggers the arrival
/// effect of the destination space and uses a step.
pub fn do_move(state: &mut GameState, dir: Direction) -> ActionResult {
    if !state.board.move_player(dir) {
        return ActionResult::Failed("You can't go that way.".to_string());
    }

    let GameState {
        board,
        player,
        messages,
        ..
    } = state;
    board.player_location_mut().on_arrive(player, messages);
    ActionResult::Success
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::{Board, Position, SpaceKind};
    use crate::object::Item;
    use crate::player::PlayerState;

    fn state(rows: &str) -> GameState {
        GameState::with_board(Board::from_text(rows).unwrap(), 10)
    }

    #[test]
    fn test_blocked_move_fails() {
        let mut state = state("###\n# #\n###");
        let result = do_move(&mut state, Direction::Up);
        assert!(matches!(result, ActionResult::Failed(_)));
        assert_eq!(state.board.player_position(), Position::new(1, 1));
    }

    #[test]
    fn test_move_onto_exit_wins() {
        let mut state = state("####\n# E#\n####");
        assert_eq!(do_move(&mut state, Direction::Right), ActionResult::Success);
        assert_eq!(state.player.state(), PlayerState::Win);
    }

    #[test]
    fn test_move_onto_hole_with_rock() {
        let mut state = state("####\n# @#\n####");
        state.player.add_item(Item::Rock);
        assert_eq!(do_move(&mut state, Direction::Right), ActionResult::Success);
        assert_eq!(state.player.state(), PlayerState::Playing);
        assert!(state.player.items().is_empty());
        assert_eq!(
            state.board.player_location().kind(),
            SpaceKind::Hole { filled: true }
        );
        // Filled hole shows as floor once the player leaves
        do_move(&mut state, Direction::Left);
        assert_eq!(state.board.space(Position::new(1, 2)).unwrap().symbol(), ' ');
    }
}
