//! Modal choice popup widget

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Widget};

use crate::choice::ChoicePopup;
use crate::theme::Theme;

/// Draws a [`ChoicePopup`] centered over whatever is below it
pub struct ChoiceWidget<'a> {
    popup: &'a ChoicePopup,
    theme: &'a Theme,
}

impl<'a> ChoiceWidget<'a> {
    pub fn new(popup: &'a ChoicePopup, theme: &'a Theme) -> Self {
        Self { popup, theme }
    }

    /// Note lines plus the blank line separating them from the options
    fn note_rows(&self) -> usize {
        match self.popup.notes().len() {
            0 => 0,
            n => n + 1,
        }
    }

    /// Area the popup occupies inside `area`
    pub fn popup_area(&self, area: Rect) -> Rect {
        let longest = self
            .popup
            .options()
            .iter()
            .map(|opt| opt.chars().count() + 4)
            .chain(self.popup.notes().iter().map(|note| note.chars().count()))
            .chain(std::iter::once(self.popup.prompt().chars().count()))
            .max()
            .unwrap_or(0);
        let width = u16::try_from(longest + 4).unwrap_or(u16::MAX).min(area.width);
        let height = u16::try_from(self.popup.options().len() + self.note_rows() + 4)
            .unwrap_or(u16::MAX)
            .min(area.height);
        Rect::new(
            area.x + (area.width - width) / 2,
            area.y + (area.height - height) / 2,
            width,
            height,
        )
    }
}

impl Widget for ChoiceWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup_area = self.popup_area(area);
        Clear.render(popup_area, buf);

        let mut items: Vec<ListItem> = self
            .popup
            .notes()
            .iter()
            .map(|note| ListItem::new(note.as_str()).style(Style::default().fg(self.theme.text)))
            .collect();
        if !items.is_empty() {
            items.push(ListItem::new(""));
        }
        items.extend(self.popup.options().iter().enumerate().map(|(i, opt)| {
            let style = if i == self.popup.cursor() {
                Style::default()
                    .fg(self.theme.cursor_fg)
                    .bg(self.theme.cursor_bg)
            } else {
                Style::default().fg(self.theme.text)
            };
            ListItem::new(format!("{}. {}", i + 1, opt)).style(style)
        }));

        let block = Block::default()
            .title(format!(" {} ", self.popup.prompt()))
            .title_bottom(Line::from(" Enter: choose  Esc: cancel ").centered())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border_action));

        Widget::render(List::new(items).block(block), popup_area, buf);
    }
}
