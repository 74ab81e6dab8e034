//! Main game loop
//!
//! Orchestrates a round: executes commands against the board and player,
//! counts steps and decides when the round is over.

use crate::action::inspect::{do_inspect, do_inventory};
use crate::action::movement::do_move;
use crate::action::{ActionResult, ChoiceProvider, Command};
use crate::dungeon::{Board, MapDescription};
use crate::player::{Player, PlayerState};
use crate::world::{GameConfig, MapError};

/// Text shown at the start of each round
pub const INTRO: [&str; 3] = [
    "You (X) are trapped in a cave.",
    "Make it to the exit (E) before you run out of steps,",
    "but be careful not to fall down any holes (@)!",
];

/// Result of a game loop tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameLoopResult {
    /// Continue playing
    Continue,
    /// Player reached the exit
    PlayerWon,
    /// Player fell or ran out of steps
    PlayerLost(String),
    /// Player quit
    PlayerQuit,
}

impl GameLoopResult {
    pub fn is_over(&self) -> bool {
        !matches!(self, GameLoopResult::Continue)
    }
}

/// State of one round
#[derive(Debug, Clone)]
pub struct GameState {
    /// Board with the player's location
    pub board: Board,

    /// Player character
    pub player: Player,

    /// Steps left before the player gives out. Goes negative on the last step.
    pub steps_remaining: i64,

    /// Messages produced by the last command
    pub messages: Vec<String>,

    /// Number of moves made this round
    pub turns: u32,
}

impl GameState {
    /// Start a round on `board` with `steps` steps
    pub fn with_board(board: Board, steps: u32) -> Self {
        Self::with_player(board, Player::new(), steps)
    }

    fn with_player(board: Board, mut player: Player, steps: u32) -> Self {
        player.set_state(PlayerState::Playing);
        Self {
            board,
            player,
            steps_remaining: i64::from(steps),
            messages: Vec::new(),
            turns: 0,
        }
    }

    /// Start a round on `map` with the step budget and inventory size of `config`
    pub fn new(map: &MapDescription, config: &GameConfig) -> Self {
        Self::with_player(
            Board::new(map),
            Player::with_capacity(config.inventory_capacity),
            config.steps,
        )
    }

    /// Start a round from a configuration, loading its map.
    ///
    /// An unreadable map file means the built-in map; a malformed one is an error.
    pub fn from_config(config: &GameConfig) -> Result<Self, MapError> {
        let map = MapDescription::load_or_default(&config.map_path)?;
        Ok(Self::new(&map, config))
    }

    /// Add a message to display
    pub fn message(&mut self, msg: impl Into<String>) {
        self.messages.push(msg.into());
    }

    /// Clear messages
    pub fn clear_messages(&mut self) {
        self.messages.clear();
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Steps left, never shown below zero
    pub fn steps_left(&self) -> u32 {
        u32::try_from(self.steps_remaining.max(0)).unwrap_or(u32::MAX)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(&MapDescription::default(), &GameConfig::default())
    }
}

/// Drives a round one command at a time
#[derive(Debug, Clone)]
pub struct GameLoop {
    state: GameState,
    finished: Option<GameLoopResult>,
}

impl GameLoop {
    /// Create a new game loop with the given state
    pub fn new(state: GameState) -> Self {
        Self {
            state,
            finished: None,
        }
    }

    /// Get reference to game state
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Get mutable reference to game state
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Run one player command.
    ///
    /// Messages from previous commands are cleared first; `chooser` answers
    /// any prompt the command raises.
    pub fn tick(&mut self, command: Command, chooser: &mut dyn ChoiceProvider) -> GameLoopResult {
        if let Some(result) = &self.finished {
            return result.clone();
        }
        self.state.clear_messages();

        let result = match command {
            Command::Move(dir) => do_move(&mut self.state, dir),
            Command::Inspect => do_inspect(&mut self.state, chooser),
            Command::Inventory => do_inventory(&mut self.state),
            Command::Quit => ActionResult::Quit,
        };

        match result {
            ActionResult::Success => {
                self.state.steps_remaining -= 1;
                self.state.turns += 1;
            }
            ActionResult::NoTime => {}
            ActionResult::Failed(msg) => self.state.message(msg),
            ActionResult::Quit => {
                log::info!("player quit after {} moves", self.state.turns);
                self.state.player.set_state(PlayerState::Lose);
                self.state.message("Game over.");
                self.finished = Some(GameLoopResult::PlayerQuit);
                return GameLoopResult::PlayerQuit;
            }
        }

        let ran_out = self.state.steps_remaining < 0 && self.state.player.is_playing();
        if ran_out {
            self.state.message("You ran out of steps!");
            self.state.player.set_state(PlayerState::Lose);
        }

        let outcome = self.outcome(ran_out);
        match &outcome {
            GameLoopResult::PlayerWon => {
                log::info!("round won in {} moves", self.state.turns);
                self.state.message("You win!");
            }
            GameLoopResult::PlayerLost(reason) => {
                log::info!("round lost after {} moves: {}", self.state.turns, reason);
                self.state.message("Game over.");
            }
            GameLoopResult::Continue | GameLoopResult::PlayerQuit => {}
        }
        if outcome.is_over() {
            self.finished = Some(outcome.clone());
        }
        outcome
    }

    fn outcome(&self, ran_out: bool) -> GameLoopResult {
        match self.state.player.state() {
            PlayerState::Win => GameLoopResult::PlayerWon,
            PlayerState::Lose if ran_out => {
                GameLoopResult::PlayerLost("ran out of steps".to_string())
            }
            PlayerState::Lose => GameLoopResult::PlayerLost("fell in a hole".to_string()),
            PlayerState::Playing | PlayerState::Uninitialized => GameLoopResult::Continue,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{Direction, FixedChoice};
    use crate::object::Item;

    fn game(text: &str, steps: u32) -> GameLoop {
        GameLoop::new(GameState::with_board(Board::from_text(text).unwrap(), steps))
    }

    #[test]
    fn test_new_round_is_playing() {
        let game = game("###\n# #\n###", 3);
        assert!(game.state().player.is_playing());
        assert_eq!(game.state().steps_left(), 3);
    }

    #[test]
    fn test_successful_move_uses_a_step() {
        let mut game = game("####\n#  #\n####", 3);
        let result = game.tick(Command::Move(Direction::Right), &mut FixedChoice(1));
        assert_eq!(result, GameLoopResult::Continue);
        assert_eq!(game.state().steps_left(), 2);
        assert_eq!(game.state().turns, 1);
    }

    #[test]
    fn test_blocked_move_is_free() {
        let mut game = game("####\n#  #\n####", 3);
        game.tick(Command::Move(Direction::Up), &mut FixedChoice(1));
        assert_eq!(game.state().steps_left(), 3);
        assert_eq!(game.state().messages(), &["You can't go that way.".to_string()]);
    }

    #[test]
    fn test_inspect_and_inventory_are_free() {
        let mut game = game("###\n#P#\n###", 1);
        game.tick(Command::Inspect, &mut FixedChoice(0));
        game.tick(Command::Inventory, &mut FixedChoice(0));
        assert_eq!(game.state().steps_left(), 1);
        assert_eq!(game.state().messages(), &["Inventory: P".to_string()]);
    }

    #[test]
    fn test_running_out_of_steps() {
        // One step allowed: the second move overdraws the budget
        let mut game = game("#####\n#   #\n#####", 1);
        let mut chooser = FixedChoice(1);
        assert_eq!(
            game.tick(Command::Move(Direction::Right), &mut chooser),
            GameLoopResult::Continue
        );
        let result = game.tick(Command::Move(Direction::Right), &mut chooser);
        assert_eq!(
            result,
            GameLoopResult::PlayerLost("ran out of steps".to_string())
        );
        assert!(game.state().messages().contains(&"You ran out of steps!".to_string()));
        assert_eq!(game.state().player.state(), PlayerState::Lose);
    }

    #[test]
    fn test_exit_on_last_step_still_wins() {
        let mut game = game("####\n# E#\n####", 0);
        let result = game.tick(Command::Move(Direction::Right), &mut FixedChoice(1));
        assert_eq!(result, GameLoopResult::PlayerWon);
        assert_eq!(game.state().player.state(), PlayerState::Win);
    }

    #[test]
    fn test_hole_on_last_step_reports_the_fall() {
        let mut game = game("####\n# @#\n####", 0);
        let result = game.tick(Command::Move(Direction::Right), &mut FixedChoice(1));
        assert_eq!(result, GameLoopResult::PlayerLost("fell in a hole".to_string()));
        assert!(!game.state().messages().contains(&"You ran out of steps!".to_string()));
    }

    #[test]
    fn test_hole_loses() {
        let mut game = game("####\n# @#\n####", 5);
        let result = game.tick(Command::Move(Direction::Right), &mut FixedChoice(1));
        assert_eq!(result, GameLoopResult::PlayerLost("fell in a hole".to_string()));
        assert_eq!(
            game.state().messages(),
            &["You fell in a hole!".to_string(), "Game over.".to_string()]
        );
    }

    #[test]
    fn test_quit() {
        let mut game = game("###\n# #\n###", 5);
        let result = game.tick(Command::Quit, &mut FixedChoice(1));
        assert_eq!(result, GameLoopResult::PlayerQuit);
        assert!(result.is_over());
        assert_eq!(game.state().player.state(), PlayerState::Lose);
    }

    #[test]
    fn test_no_commands_after_round_ends() {
        let mut game = game("####\n# E#\n####", 5);
        game.tick(Command::Move(Direction::Right), &mut FixedChoice(1));
        let result = game.tick(Command::Move(Direction::Left), &mut FixedChoice(1));
        assert_eq!(result, GameLoopResult::PlayerWon);
        assert_eq!(game.state().board.player_location().symbol(), 'X');
        assert_eq!(game.state().turns, 1);
    }

    #[test]
    fn test_quit_is_remembered() {
        let mut game = game("###\n# #\n###", 5);
        game.tick(Command::Quit, &mut FixedChoice(1));
        assert_eq!(
            game.tick(Command::Inspect, &mut FixedChoice(1)),
            GameLoopResult::PlayerQuit
        );
    }

    #[test]
    fn test_rock_carried_across_hole() {
        let mut game = game("#####\n# @E#\n#####", 5);
        game.state_mut().player.add_item(Item::Rock);
        let mut chooser = FixedChoice(1);
        assert_eq!(
            game.tick(Command::Move(Direction::Right), &mut chooser),
            GameLoopResult::Continue
        );
        assert_eq!(
            game.tick(Command::Move(Direction::Right), &mut chooser),
            GameLoopResult::PlayerWon
        );
    }

    #[test]
    fn test_from_config_uses_capacity() {
        let config = GameConfig {
            map_path: "definitely/not/here.txt".into(),
            steps: 9,
            inventory_capacity: 1,
            log_file: None,
        };
        let state = GameState::from_config(&config).unwrap();
        assert_eq!(state.board.rows(), 7);
        assert_eq!(state.steps_left(), 9);
        assert_eq!(state.player.inventory().capacity(), 1);
    }

    #[test]
    fn test_from_config_reports_malformed_map() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("map.txt");
        std::fs::write(&path, "#####\n#E\n").unwrap();
        let config = GameConfig {
            map_path: path,
            ..GameConfig::default()
        };
        assert!(matches!(
            GameState::from_config(&config),
            Err(MapError::Truncated { .. })
        ));
    }
}
