//! Player action system
//!
//! Implements player commands and the prompt interface used while acting.

pub mod inspect;
pub mod movement;

pub use crate::dungeon::Direction;

/// Player command types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Step one space
    Move(Direction),
    /// Examine the current space
    Inspect,
    /// Show carried items
    Inventory,
    /// Give up the round
    Quit,
}

impl Command {
    /// Keys accepted at the command prompt
    pub const VALID_KEYS: &'static str = "WASDwasdEeIiQq";

    /// Parse a command key (case-insensitive).
    ///
    /// `W/A/S/D` move, `E` inspects, `I` shows the inventory, `Q` quits.
    pub fn from_key(key: char) -> Option<Command> {
        if let Some(dir) = Direction::from_key(key) {
            return Some(Command::Move(dir));
        }
        match key.to_ascii_uppercase() {
            'E' => Some(Command::Inspect),
            'I' => Some(Command::Inventory),
            'Q' => Some(Command::Quit),
            _ => None,
        }
    }
}

/// Outcome of performing a single action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionResult {
    /// Action completed and used a step
    Success,
    /// Action completed without using a step
    NoTime,
    /// Action was not possible
    Failed(String),
    /// Player gave up
    Quit,
}

/// Presents a menu and returns the selected option.
///
/// Front ends implement this to answer the prompts raised while inspecting
/// a space (take the pickaxe, mine the rocks). `context` holds the messages
/// the command produced before asking, in order; the prompt may be among them.
pub trait ChoiceProvider {
    /// Show `options` under `prompt` and return the 0-based index chosen
    fn choose(&mut self, context: &[String], prompt: &str, options: &[&str]) -> usize;

    /// Two-option menu; true when the first option is picked
    fn confirm(&mut self, context: &[String], prompt: &str, accept: &str, decline: &str) -> bool {
        self.choose(context, prompt, &[accept, decline]) == 0
    }
}

/// Choice provider that always answers with the same option
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedChoice(pub usize);

impl ChoiceProvider for FixedChoice {
    fn choose(&mut self, _context: &[String], _prompt: &str, options: &[&str]) -> usize {
        self.0.min(options.len().saturating_sub(1))
    }
}
