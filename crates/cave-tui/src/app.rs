//! Application state and main UI controller

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Style, Stylize};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use strum::{Display, EnumIter, IntoEnumIterator};

use cave_core::action::{ChoiceProvider, Command};
use cave_core::dungeon::MapDescription;
use cave_core::world::GameConfig;
use cave_core::{GameLoop, GameLoopResult, GameState, INTRO};

use crate::choice::ChoicePopup;
use crate::input::key_to_command;
use crate::theme::Theme;
use crate::widgets::{BoardWidget, ChoiceWidget, InventoryWidget, MessagesWidget, StatusWidget};
use crate::{BANNER, WELCOME};

/// Title screen menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum TitleOption {
    Play,
    Exit,
}

/// Menu shown when a round ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum ReplayOption {
    #[strum(to_string = "Play again")]
    PlayAgain,
    Quit,
}

/// UI mode - what the app is currently displaying/waiting for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiMode {
    /// Banner and Play / Exit menu
    Title(ChoicePopup),
    /// Normal gameplay
    Playing,
    /// Inventory overlay (read-only)
    Inventory,
    /// Key help overlay
    Help,
    /// Round finished; Play again / Quit menu
    RoundOver {
        result: GameLoopResult,
        menu: ChoicePopup,
    },
}

impl UiMode {
    fn title() -> Self {
        UiMode::Title(ChoicePopup::with_options("Main menu", TitleOption::iter()))
    }
}

/// Application state
pub struct App {
    /// Game loop controller for the current round
    game_loop: GameLoop,

    /// Settings each round is built from
    config: GameConfig,

    /// Map each round starts on
    map: MapDescription,

    /// Current UI mode
    mode: UiMode,

    /// Should quit
    should_quit: bool,

    /// Rounds started so far
    rounds: u32,

    /// Color theme
    theme: Theme,
}

impl App {
    /// Create the application on the title screen
    pub fn new(config: GameConfig, map: MapDescription, theme: Theme) -> Self {
        Self {
            game_loop: GameLoop::new(GameState::new(&map, &config)),
            config,
            map,
            mode: UiMode::title(),
            should_quit: false,
            rounds: 0,
            theme,
        }
    }

    /// Get game state
    pub fn state(&self) -> &GameState {
        self.game_loop.state()
    }

    pub fn mode(&self) -> &UiMode {
        &self.mode
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    /// Start a fresh round: rebuild the board, reset steps and inventory
    pub fn start_round(&mut self) {
        let mut state = GameState::new(&self.map, &self.config);
        for line in INTRO {
            state.message(line);
        }
        self.game_loop = GameLoop::new(state);
        self.rounds += 1;
        self.mode = UiMode::Playing;
        log::info!("starting round {}", self.rounds);
    }

    /// Handle input event - returns a command if one should be executed
    pub fn handle_event(&mut self, event: Event) -> Option<Command> {
        let Event::Key(key) = event else {
            return None;
        };
        if key.kind == KeyEventKind::Release {
            return None;
        }

        match &self.mode {
            UiMode::Title(_) => {
                self.handle_title_input(key);
                None
            }
            UiMode::Playing => self.handle_playing_input(key),
            UiMode::Inventory => {
                self.mode = UiMode::Playing;
                None
            }
            UiMode::Help => {
                self.handle_help_input(key);
                None
            }
            UiMode::RoundOver { .. } => {
                self.handle_round_over_input(key);
                None
            }
        }
    }

    fn handle_title_input(&mut self, key: KeyEvent) {
        let UiMode::Title(menu) = &mut self.mode else {
            return;
        };
        match menu.handle_key(key).and_then(|i| TitleOption::iter().nth(i)) {
            Some(TitleOption::Play) => self.start_round(),
            Some(TitleOption::Exit) => self.should_quit = true,
            None => {}
        }
    }

    fn handle_playing_input(&mut self, key: KeyEvent) -> Option<Command> {
        if key.code == KeyCode::Char('?') {
            self.mode = UiMode::Help;
            return None;
        }
        key_to_command(key)
    }

    fn handle_help_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char(' ') | KeyCode::Char('?') | KeyCode::Enter => {
                self.mode = UiMode::Playing;
            }
            _ => {}
        }
    }

    fn handle_round_over_input(&mut self, key: KeyEvent) {
        let UiMode::RoundOver { menu, .. } = &mut self.mode else {
            return;
        };
        match menu.handle_key(key).and_then(|i| ReplayOption::iter().nth(i)) {
            Some(ReplayOption::PlayAgain) => self.start_round(),
            Some(ReplayOption::Quit) => self.should_quit = true,
            None => {}
        }
    }

    /// Execute a command and update the UI mode
    pub fn execute(&mut self, command: Command, chooser: &mut dyn ChoiceProvider) -> GameLoopResult {
        let result = self.game_loop.tick(command, chooser);

        if result.is_over() {
            let headline = round_headline(&result);
            self.mode = UiMode::RoundOver {
                result: result.clone(),
                menu: ChoicePopup::with_options(&headline, ReplayOption::iter()),
            };
        } else if command == Command::Inventory {
            self.mode = UiMode::Inventory;
        }

        result
    }

    /// Render the UI
    pub fn render(&self, frame: &mut Frame) {
        if let UiMode::Title(menu) = &self.mode {
            self.render_title(frame, menu);
            return;
        }

        self.render_game(frame);

        match &self.mode {
            UiMode::Title(_) | UiMode::Playing => {}
            UiMode::Inventory => self.render_inventory(frame),
            UiMode::Help => self.render_help(frame),
            UiMode::RoundOver { result, menu } => self.render_round_over(frame, result, menu),
        }
    }

    /// Board at top, then status, messages and the key help footer
    fn render_game(&self, frame: &mut Frame) {
        let state = self.game_loop.state();
        let (board_width, board_height) = BoardWidget::size(&state.board);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(board_height), // Board + border
                Constraint::Length(1),            // Status line
                Constraint::Min(3),               // Messages
                Constraint::Length(2),            // Key help
            ])
            .split(frame.area());

        let board_area = Rect {
            width: board_width.min(chunks[0].width),
            ..chunks[0]
        };
        frame.render_widget(BoardWidget::new(&state.board, &self.theme), board_area);
        frame.render_widget(StatusWidget::new(state, &self.theme), chunks[1]);
        frame.render_widget(MessagesWidget::new(state.messages(), &self.theme), chunks[2]);

        let footer = Paragraph::new(vec![
            Line::from("Move: W A S D / arrows   Inspect: E   Inventory: I"),
            Line::from("Help: ?   Quit: Q / Esc"),
        ])
        .style(Style::default().fg(self.theme.text_dim));
        frame.render_widget(footer, chunks[3]);
    }

    fn render_title(&self, frame: &mut Frame, menu: &ChoicePopup) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(8), Constraint::Min(6)])
            .split(area);

        let mut lines: Vec<Line> = vec![Line::from("")];
        lines.extend(BANNER.iter().map(|row| Line::from(*row)));
        lines.push(Line::from(""));
        lines.push(Line::from(WELCOME.bold().fg(self.theme.accent)));

        let banner = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::default().fg(self.theme.text));
        frame.render_widget(banner, chunks[0]);
        frame.render_widget(ChoiceWidget::new(menu, &self.theme), chunks[1]);
    }

    fn render_inventory(&self, frame: &mut Frame) {
        let area = centered_rect(50, 50, frame.area());
        frame.render_widget(Clear, area);
        let inventory = self.game_loop.state().player.inventory();
        frame.render_widget(InventoryWidget::new(inventory, &self.theme), area);
    }

    fn render_help(&self, frame: &mut Frame) {
        let area = centered_rect(70, 80, frame.area());
        frame.render_widget(Clear, area);

        let help_text = r#"Reach the exit (E) before you run out of steps.
Falling into a hole (@) ends the round.

Movement:
  W / Up      A / Left     S / Down     D / Right

Actions:
  E    Inspect the space you are standing on
  I    Show inventory (holds two items)
  Q    Give up the round (Esc also works)

Items:
  P    Pickaxe: take it, then use it to mine rocks
  ^    Rocks: carry them to fill a hole and cross it

Press ESC or SPACE to close"#;

        let block = Block::default()
            .title(" Help ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border_accent));

        let paragraph = Paragraph::new(help_text)
            .block(block)
            .style(Style::default().fg(self.theme.text));

        frame.render_widget(paragraph, area);
    }

    fn render_round_over(&self, frame: &mut Frame, result: &GameLoopResult, menu: &ChoicePopup) {
        let area = centered_rect(60, 40, frame.area());
        frame.render_widget(Clear, area);

        let color = match result {
            GameLoopResult::PlayerWon => self.theme.good,
            _ => self.theme.border_danger,
        };
        let block = Block::default()
            .title(" Round over ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color));
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(ChoiceWidget::new(menu, &self.theme), inner);
    }
}

/// Text shown above the replay menu
fn round_headline(result: &GameLoopResult) -> String {
    match result {
        GameLoopResult::PlayerWon => "You win!".to_string(),
        GameLoopResult::PlayerLost(reason) => format!("Game over: {}", reason),
        GameLoopResult::PlayerQuit | GameLoopResult::Continue => "Game over.".to_string(),
    }
}

/// Helper function to create a centered rect
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use cave_core::action::FixedChoice;
    use cave_core::player::PlayerState;
    use crossterm::event::KeyModifiers;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn app() -> App {
        App::new(GameConfig::default(), MapDescription::default(), Theme::dark())
    }

    fn playing_app() -> App {
        let mut app = app();
        assert_eq!(app.handle_event(press(KeyCode::Enter)), None);
        app
    }

    #[test]
    fn test_starts_on_title() {
        let app = app();
        assert!(matches!(app.mode(), UiMode::Title(_)));
        assert_eq!(app.rounds(), 0);
    }

    #[test]
    fn test_title_play_starts_round_with_intro() {
        let app = playing_app();
        assert_eq!(app.mode(), &UiMode::Playing);
        assert_eq!(app.rounds(), 1);
        assert_eq!(app.state().messages(), &INTRO.map(String::from));
        assert_eq!(app.state().player.state(), PlayerState::Playing);
    }

    #[test]
    fn test_title_exit_quits() {
        let mut app = app();
        app.handle_event(press(KeyCode::Char('2')));
        assert!(app.should_quit());
    }

    #[test]
    fn test_keys_become_commands() {
        let mut app = playing_app();
        assert_eq!(
            app.handle_event(press(KeyCode::Char('s'))),
            Some(Command::Move(cave_core::action::Direction::Down))
        );
        assert_eq!(app.handle_event(press(KeyCode::Char('z'))), None);
    }

    #[test]
    fn test_help_toggles() {
        let mut app = playing_app();
        assert_eq!(app.handle_event(press(KeyCode::Char('?'))), None);
        assert_eq!(app.mode(), &UiMode::Help);
        app.handle_event(press(KeyCode::Char('x')));
        assert_eq!(app.mode(), &UiMode::Help);
        app.handle_event(press(KeyCode::Esc));
        assert_eq!(app.mode(), &UiMode::Playing);
    }

    #[test]
    fn test_inventory_overlay_closes_on_any_key() {
        let mut app = playing_app();
        app.execute(Command::Inventory, &mut FixedChoice(1));
        assert_eq!(app.mode(), &UiMode::Inventory);
        assert_eq!(app.state().messages(), &["Inventory is empty.".to_string()]);
        app.handle_event(press(KeyCode::Char('k')));
        assert_eq!(app.mode(), &UiMode::Playing);
    }

    #[test]
    fn test_falling_ends_round_then_play_again() {
        let mut app = playing_app();
        let result = app.execute(Command::Move(cave_core::action::Direction::Right), &mut FixedChoice(1));
        assert_eq!(result, GameLoopResult::PlayerLost("fell in a hole".to_string()));
        let UiMode::RoundOver { menu, .. } = app.mode() else {
            panic!("expected round over, got {:?}", app.mode());
        };
        assert_eq!(menu.prompt(), "Game over: fell in a hole");
        assert_eq!(menu.options(), &["Play again".to_string(), "Quit".to_string()]);

        app.handle_event(press(KeyCode::Char('1')));
        assert_eq!(app.mode(), &UiMode::Playing);
        assert_eq!(app.rounds(), 2);
        assert_eq!(app.state().steps_left(), 22);
        assert_eq!(app.state().player.state(), PlayerState::Playing);
    }

    #[test]
    fn test_quit_then_leave() {
        let mut app = playing_app();
        let command = app.handle_event(press(KeyCode::Char('q')));
        assert_eq!(command, Some(Command::Quit));
        let result = app.execute(Command::Quit, &mut FixedChoice(0));
        assert_eq!(result, GameLoopResult::PlayerQuit);
        app.handle_event(press(KeyCode::Esc));
        assert!(app.should_quit());
    }

    #[test]
    fn test_round_headline() {
        assert_eq!(round_headline(&GameLoopResult::PlayerWon), "You win!");
        assert_eq!(round_headline(&GameLoopResult::PlayerQuit), "Game over.");
        assert_eq!(
            round_headline(&GameLoopResult::PlayerLost("ran out of steps".to_string())),
            "Game over: ran out of steps"
        );
    }
}
