//! Board display widget

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Widget};

use cave_core::dungeon::{Board, Space};

use crate::theme::Theme;

/// Widget for rendering the cave board.
///
/// Each symbol is followed by a space, matching the console rendering.
pub struct BoardWidget<'a> {
    board: &'a Board,
    theme: &'a Theme,
}

impl<'a> BoardWidget<'a> {
    pub fn new(board: &'a Board, theme: &'a Theme) -> Self {
        Self { board, theme }
    }

    /// Outer size of the widget, border included
    pub fn size(board: &Board) -> (u16, u16) {
        let width = board.cols().saturating_mul(2).saturating_add(2);
        let height = board.rows().saturating_add(2);
        (
            u16::try_from(width).unwrap_or(u16::MAX),
            u16::try_from(height).unwrap_or(u16::MAX),
        )
    }

    fn cell_display(&self, space: &Space) -> (char, Style) {
        if space.is_occupied() {
            return (
                space.symbol(),
                Style::default().fg(self.theme.map_player).bold(),
            );
        }
        (
            space.symbol(),
            Style::default().fg(self.theme.space_color(space.kind())),
        )
    }
}

impl Widget for BoardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" Cave ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border));
        let inner = block.inner(area);
        block.render(area, buf);

        for (row, spaces) in self.board.rows_iter().enumerate() {
            let Ok(dy) = u16::try_from(row) else { break };
            let y = inner.y.saturating_add(dy);
            if y >= inner.bottom() {
                break;
            }
            for (col, space) in spaces.iter().enumerate() {
                let Ok(dx) = u16::try_from(col * 2) else { break };
                let x = inner.x.saturating_add(dx);
                if x >= inner.right() {
                    break;
                }
                let (symbol, style) = self.cell_display(space);
                buf.set_string(x, y, symbol.to_string(), style);
            }
        }
    }
}
