//! cave-tui: Terminal front ends for Cave Escape
//!
//! A full-screen ratatui interface and a plain line-oriented console mode.

pub mod app;
pub mod choice;
pub mod input;
pub mod plain;
pub mod theme;
pub mod widgets;

pub use app::{App, ReplayOption, TitleOption, UiMode};
pub use choice::{ChoicePopup, CrosstermEvents, EventSource, TerminalChooser};
pub use plain::PlainUi;
pub use theme::Theme;

/// Bat banner shown above the title
pub const BANNER: [&str; 4] = [
    "    mm         mm         mm",
    r" /^(  )^\   /^(  )^\   /^(  )^\",
    r" \,(..),/   \,(..),/   \,(..),/",
    "   V~~V       V~~V       V~~V",
];

/// Title line under the banner
pub const WELCOME: &str = "--- Welcome to Cave Escape! ---";
