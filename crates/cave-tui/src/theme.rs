//! Terminal color theme
//!
//! Dark and light palettes. The light one is picked when COLORFGBG reports a
//! light background or CAVE_LIGHT_BG=1 is set.

use ratatui::style::Color;

use cave_core::dungeon::SpaceKind;
use cave_core::object::Item;

/// Color theme for the terminal UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Primary foreground text
    pub text: Color,
    /// Hint text (footers, key help)
    pub text_dim: Color,

    pub border: Color,
    /// Help and title screens
    pub border_accent: Color,
    /// Choice popups
    pub border_action: Color,
    /// Round lost
    pub border_danger: Color,

    pub cursor_fg: Color,
    pub cursor_bg: Color,

    pub accent: Color,
    pub good: Color,
    pub bad: Color,

    // Board
    pub map_player: Color,
    pub map_wall: Color,
    pub map_hole: Color,
    pub map_filled: Color,
    pub map_exit: Color,
    pub map_rock: Color,
    pub map_pickaxe: Color,
    pub map_floor: Color,
}

impl Theme {
    /// Dark terminal background theme (default)
    pub fn dark() -> Self {
        Self {
            text: Color::White,
            text_dim: Color::DarkGray,
            border: Color::White,
            border_accent: Color::Cyan,
            border_action: Color::Yellow,
            border_danger: Color::Red,
            cursor_fg: Color::Yellow,
            cursor_bg: Color::DarkGray,
            accent: Color::Cyan,
            good: Color::Green,
            bad: Color::Red,
            map_player: Color::White,
            map_wall: Color::Gray,
            map_hole: Color::Red,
            map_filled: Color::DarkGray,
            map_exit: Color::Green,
            map_rock: Color::Yellow,
            map_pickaxe: Color::LightBlue,
            map_floor: Color::DarkGray,
        }
    }

    /// Light terminal background theme
    pub fn light() -> Self {
        Self {
            text: Color::Black,
            text_dim: Color::DarkGray,
            border: Color::DarkGray,
            border_accent: Color::Blue,
            border_action: Color::Yellow,
            border_danger: Color::Red,
            cursor_fg: Color::Yellow,
            cursor_bg: Color::DarkGray,
            accent: Color::Blue,
            good: Color::Green,
            bad: Color::Red,
            map_player: Color::Black,
            map_wall: Color::DarkGray,
            map_hole: Color::Red,
            map_filled: Color::Gray,
            map_exit: Color::Green,
            map_rock: Color::Yellow,
            map_pickaxe: Color::Blue,
            map_floor: Color::Gray,
        }
    }

    /// Pick a theme from the environment
    pub fn detect() -> Self {
        if Self::is_light_background() {
            Self::light()
        } else {
            Self::dark()
        }
    }

    /// Foreground color for a space of the given kind
    pub fn space_color(&self, kind: SpaceKind) -> Color {
        match kind {
            SpaceKind::Wall => self.map_wall,
            SpaceKind::Hole { filled: false } => self.map_hole,
            SpaceKind::Hole { filled: true } => self.map_filled,
            SpaceKind::Exit => self.map_exit,
            SpaceKind::Empty { item: Some(Item::Rock) } => self.map_rock,
            SpaceKind::Empty { item: Some(Item::Pickaxe) } => self.map_pickaxe,
            SpaceKind::Empty { item: None } => self.map_floor,
        }
    }

    fn is_light_background() -> bool {
        if let Ok(val) = std::env::var("CAVE_LIGHT_BG") {
            return val == "1" || val.eq_ignore_ascii_case("true");
        }

        // "fg;bg" color indices; light backgrounds use 7 or 9-15
        if let Ok(colorfgbg) = std::env::var("COLORFGBG")
            && let Some(bg_str) = colorfgbg.rsplit(';').next()
            && let Ok(bg_idx) = bg_str.parse::<u8>()
        {
            return matches!(bg_idx, 7 | 9..=15);
        }

        false
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::detect()
    }
}
