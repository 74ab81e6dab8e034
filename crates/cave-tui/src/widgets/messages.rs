//! Message panel widget

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Widget, Wrap};

use crate::theme::Theme;

/// Messages produced by the last command, oldest first
pub struct MessagesWidget<'a> {
    messages: &'a [String],
    theme: &'a Theme,
}

impl<'a> MessagesWidget<'a> {
    pub fn new(messages: &'a [String], theme: &'a Theme) -> Self {
        Self { messages, theme }
    }
}

impl Widget for MessagesWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines: Vec<Line> = self
            .messages
            .iter()
            .map(|msg| Line::from(msg.as_str()))
            .collect();

        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(self.theme.text_dim));

        Paragraph::new(lines)
            .block(block)
            .style(Style::default().fg(self.theme.text))
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}
