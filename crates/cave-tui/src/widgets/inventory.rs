//! Inventory overlay widget

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use cave_core::player::Inventory;

use crate::theme::Theme;

/// Shows every inventory slot, empty ones included
pub struct InventoryWidget<'a> {
    inventory: &'a Inventory,
    theme: &'a Theme,
}

impl<'a> InventoryWidget<'a> {
    pub fn new(inventory: &'a Inventory, theme: &'a Theme) -> Self {
        Self { inventory, theme }
    }
}

impl Widget for InventoryWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines: Vec<Line> = (0..self.inventory.capacity())
            .map(|slot| match self.inventory.items().get(slot) {
                Some(item) => Line::from(vec![
                    Span::styled(
                        format!("{}. ", slot + 1),
                        Style::default().fg(self.theme.text_dim),
                    ),
                    Span::styled(
                        format!("{} {}", item.symbol(), item),
                        Style::default().fg(self.theme.text),
                    ),
                ]),
                None => Line::from(Span::styled(
                    format!("{}. (empty)", slot + 1),
                    Style::default().fg(self.theme.text_dim),
                )),
            })
            .collect();
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Press any key to close",
            Style::default().fg(self.theme.text_dim),
        )));

        let block = Block::default()
            .title(" Inventory ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border_accent));

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
