//! Status line widget

use ratatui::prelude::*;
use ratatui::widgets::Widget;

use cave_core::GameState;

use crate::theme::Theme;

/// Steps at or below which the counter is drawn as a warning
const LOW_STEPS: u32 = 3;

/// Widget for rendering the status line
pub struct StatusWidget<'a> {
    state: &'a GameState,
    theme: &'a Theme,
}

impl<'a> StatusWidget<'a> {
    pub fn new(state: &'a GameState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }
}

impl Widget for StatusWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let steps = self.state.steps_left();
        let steps_color = if steps <= LOW_STEPS {
            self.theme.bad
        } else {
            self.theme.good
        };

        let line = Line::from(vec![
            Span::styled(
                format!("{} steps remaining", steps),
                Style::default().fg(steps_color).bold(),
            ),
            Span::raw("   "),
            Span::styled(
                self.state.player.inventory_text(),
                Style::default().fg(self.theme.text),
            ),
            Span::raw("   "),
            Span::styled(
                format!("Moves: {}", self.state.turns),
                Style::default().fg(self.theme.text_dim),
            ),
        ]);
        buf.set_line(area.x, area.y, &line, area.width);
    }
}
