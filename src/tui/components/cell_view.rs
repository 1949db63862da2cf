//! # CellView Component
//!
//! Paints one [`Cell`] as a glyph above an underline.
//!
//! ```text
//!   7        ← glyph (text color, font)
//! ─────      ← underline (selected color when filled, plain when empty)
//! ```
//!
//! The focused empty cell shows a caret in the tint color instead of a glyph.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::core::cell::{Cell, Highlight};
use crate::tui::appearance::Appearance;
use crate::tui::component::Component;

/// Rows a cell occupies: padding line, glyph line, underline.
pub const CELL_HEIGHT: u16 = 3;

const CARET: &str = "▏";

/// Transient component, created fresh each frame.
#[derive(Clone, Copy)]
pub struct CellView<'a> {
    pub cell: &'a Cell,
    pub appearance: &'a Appearance,
}

impl<'a> CellView<'a> {
    pub fn new(cell: &'a Cell, appearance: &'a Appearance) -> Self {
        Self { cell, appearance }
    }

    /// Width in columns: the configured size, widened for wide glyphs.
    pub fn width(&self) -> u16 {
        let glyph = self.cell.text().width() as u16;
        self.appearance.text_size.max(glyph + 2)
    }

    fn underline_style(&self) -> Style {
        let color = match self.cell.highlight() {
            Highlight::Active => self.appearance.underline_selected_color,
            Highlight::Inactive => self.appearance.underline_color,
        };
        let style = Style::default().fg(color);
        if self.cell.is_focused() {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }

    fn glyph(&self) -> Span<'a> {
        match self.cell.current_code() {
            Some(text) => Span::raw(text),
            None if self.cell.is_focused() => {
                Span::styled(CARET, Style::default().fg(self.appearance.tint_color))
            }
            None => Span::raw(""),
        }
    }
}

impl Component for CellView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::new()
            .borders(Borders::BOTTOM)
            .border_style(self.underline_style());

        let paragraph = Paragraph::new(vec![Line::raw(""), Line::from(self.glyph())])
            .alignment(Alignment::Center)
            .style(self.appearance.cell_style())
            .block(block);

        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::cell::EditRange;
    use crate::test_support::Recorder;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::style::Color;

    fn render_to_text(cell: &Cell, appearance: &Appearance) -> (String, ratatui::buffer::Buffer) {
        let backend = TestBackend::new(5, CELL_HEIGHT);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| CellView::new(cell, appearance).render(f, f.area()))
            .unwrap();
        let buffer = terminal.backend().buffer().clone();
        let text = buffer.content().iter().map(|c| c.symbol()).collect::<String>();
        (text, buffer)
    }

    #[test]
    fn test_filled_cell_shows_glyph_and_selected_underline() {
        let mut cell = Cell::new(0);
        cell.propose_edit(EditRange::at(0), "7", &mut Recorder::default());
        let appearance = Appearance::default();

        let (text, buffer) = render_to_text(&cell, &appearance);

        assert!(text.contains('7'));
        assert_eq!(buffer[(0, 2)].fg, appearance.underline_selected_color);
    }

    #[test]
    fn test_empty_cell_uses_plain_underline() {
        let cell = Cell::new(0);
        let appearance = Appearance::default();

        let (text, buffer) = render_to_text(&cell, &appearance);

        assert!(!text.contains(CARET));
        assert_eq!(buffer[(0, 2)].fg, appearance.underline_color);
    }

    #[test]
    fn test_focused_empty_cell_shows_tinted_caret() {
        let mut cell = Cell::new(0);
        cell.activate();
        let mut appearance = Appearance::default();
        appearance.set_tint_color(Color::Magenta);

        let (text, buffer) = render_to_text(&cell, &appearance);

        assert!(text.contains(CARET));
        assert_eq!(buffer[(2, 1)].fg, Color::Magenta);
    }

    #[test]
    fn test_width_grows_for_wide_glyph() {
        let mut cell = Cell::new(0);
        let mut appearance = Appearance::default();
        appearance.set_text_size(3);
        assert_eq!(CellView::new(&cell, &appearance).width(), 3);

        cell.propose_edit(EditRange::at(0), "字", &mut Recorder::default());
        assert_eq!(CellView::new(&cell, &appearance).width(), 4);
    }
}
