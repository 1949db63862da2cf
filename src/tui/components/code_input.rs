//! # CodeInput Component
//!
//! The row of code cells, wired to the terminal.
//!
//! ## Responsibilities
//!
//! - Filter keystrokes and pastes through the configured [`Charset`]
//! - Forward typing and backspace to the [`CodeChain`]
//! - Move focus with Left/Right/Tab
//! - Emit the code on every change and on submission
//! - Lay out one `CellView` per cell, centered
//!
//! ## State Management
//!
//! The chain (cell values and focus) is internal state. The appearance is a
//! prop resolved from the config at startup.

use log::debug;
use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};

use crate::Charset;
use crate::core::chain::{ChainEvent, CodeChain};
use crate::tui::appearance::Appearance;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::cell_view::{CELL_HEIGHT, CellView};
use crate::tui::event::TuiEvent;

/// Columns between two cells.
const CELL_GAP: u16 = 1;

/// High-level events emitted by the CodeInput
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeInputEvent {
    /// The code changed and is still partial.
    Changed(String),
    /// The code changed and every cell is filled.
    Completed(String),
    /// Enter pressed with every cell filled.
    Submit(String),
}

impl From<ChainEvent> for CodeInputEvent {
    fn from(event: ChainEvent) -> Self {
        match event {
            ChainEvent::CodeChanged { code, complete: true } => CodeInputEvent::Completed(code),
            ChainEvent::CodeChanged { code, complete: false } => CodeInputEvent::Changed(code),
        }
    }
}

pub struct CodeInput {
    chain: CodeChain,
    charset: Charset,
    /// Visual options (Prop)
    pub appearance: Appearance,
}

impl CodeInput {
    pub fn new(digits: usize, charset: Charset, appearance: Appearance) -> Self {
        Self {
            chain: CodeChain::new(digits),
            charset,
            appearance,
        }
    }

    pub fn chain(&self) -> &CodeChain {
        &self.chain
    }

    pub fn charset(&self) -> Charset {
        self.charset
    }

    /// Total width of the row, gaps included.
    pub fn width(&self) -> u16 {
        let cells: u16 = self
            .chain
            .cells()
            .iter()
            .map(|cell| CellView::new(cell, &self.appearance).width())
            .sum();
        let gaps = CELL_GAP * (self.chain.len() as u16).saturating_sub(1);
        cells + gaps
    }

    pub fn height(&self) -> u16 {
        CELL_HEIGHT
    }

    fn type_text(&mut self, text: &str) -> Option<CodeInputEvent> {
        if text.is_empty() || !self.charset.accepts(text) {
            debug!("Dropped input {:?} (charset {})", text, self.charset.label());
            return None;
        }
        self.chain.type_text(text).map(CodeInputEvent::from)
    }
}

impl Component for CodeInput {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let widths: Vec<Constraint> = self
            .chain
            .cells()
            .iter()
            .map(|cell| Constraint::Length(CellView::new(cell, &self.appearance).width()))
            .collect();

        let row = Layout::horizontal(widths)
            .flex(Flex::Center)
            .spacing(CELL_GAP)
            .split(area);

        for (cell, cell_area) in self.chain.cells().iter().zip(row.iter()) {
            CellView::new(cell, &self.appearance).render(frame, *cell_area);
        }
    }
}

impl EventHandler for CodeInput {
    type Event = CodeInputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => self.type_text(&c.to_string()),
            TuiEvent::Paste(text) => self.type_text(text.trim()),
            TuiEvent::Backspace => self.chain.backspace().map(CodeInputEvent::from),
            TuiEvent::FocusLeft => {
                self.chain.focus_previous();
                None
            }
            TuiEvent::FocusRight => {
                self.chain.focus_next();
                None
            }
            TuiEvent::Clear => self.chain.clear().map(CodeInputEvent::from),
            TuiEvent::Submit => self
                .chain
                .is_complete()
                .then(|| CodeInputEvent::Submit(self.chain.code())),
            TuiEvent::Quit | TuiEvent::Resize => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn input(digits: usize, charset: Charset) -> CodeInput {
        CodeInput::new(digits, charset, Appearance::default())
    }

    #[test]
    fn test_typing_emits_changed_then_completed() {
        let mut code = input(3, Charset::Numeric);

        assert_eq!(
            code.handle_event(&TuiEvent::InputChar('1')),
            Some(CodeInputEvent::Changed("1".to_string()))
        );
        code.handle_event(&TuiEvent::InputChar('2'));
        assert_eq!(
            code.handle_event(&TuiEvent::InputChar('3')),
            Some(CodeInputEvent::Completed("123".to_string()))
        );
    }

    #[test]
    fn test_retyping_complete_code_emits_completed() {
        let mut code = input(2, Charset::Numeric);
        code.handle_event(&TuiEvent::InputChar('1'));
        code.handle_event(&TuiEvent::InputChar('2'));

        assert_eq!(
            code.handle_event(&TuiEvent::InputChar('7')),
            Some(CodeInputEvent::Completed("17".to_string()))
        );
    }

    #[test]
    fn test_charset_drops_letters() {
        let mut code = input(4, Charset::Numeric);

        assert_eq!(code.handle_event(&TuiEvent::InputChar('a')), None);
        assert_eq!(code.chain().code(), "");
        assert_eq!(code.chain().focused(), 0);
    }

    #[test]
    fn test_paste_with_invalid_chars_is_dropped() {
        let mut code = input(4, Charset::Numeric);
        assert_eq!(code.handle_event(&TuiEvent::Paste("12a4".to_string())), None);
    }

    #[test]
    fn test_paste_fills_one_cell() {
        let mut code = input(4, Charset::Numeric);

        let event = code.handle_event(&TuiEvent::Paste("5678\n".to_string()));

        assert_eq!(event, Some(CodeInputEvent::Changed("5".to_string())));
        assert_eq!(code.chain().focused(), 1);
    }

    #[test]
    fn test_submit_requires_complete_code() {
        let mut code = input(2, Charset::Alphanumeric);
        code.handle_event(&TuiEvent::InputChar('a'));
        assert_eq!(code.handle_event(&TuiEvent::Submit), None);

        code.handle_event(&TuiEvent::InputChar('B'));
        assert_eq!(
            code.handle_event(&TuiEvent::Submit),
            Some(CodeInputEvent::Submit("aB".to_string()))
        );
    }

    #[test]
    fn test_backspace_and_clear() {
        let mut code = input(3, Charset::Numeric);
        for c in ['4', '5', '6'] {
            code.handle_event(&TuiEvent::InputChar(c));
        }

        assert_eq!(
            code.handle_event(&TuiEvent::Backspace),
            Some(CodeInputEvent::Changed("45".to_string()))
        );
        assert_eq!(
            code.handle_event(&TuiEvent::Clear),
            Some(CodeInputEvent::Changed(String::new()))
        );
        assert_eq!(code.chain().focused(), 0);
    }

    #[test]
    fn test_focus_keys_move_without_events() {
        let mut code = input(3, Charset::Numeric);
        assert_eq!(code.handle_event(&TuiEvent::FocusRight), None);
        assert_eq!(code.chain().focused(), 1);
        assert_eq!(code.handle_event(&TuiEvent::FocusLeft), None);
        assert_eq!(code.chain().focused(), 0);
    }

    #[test]
    fn test_width_counts_gaps() {
        let code = input(4, Charset::Numeric);
        let cell = Appearance::default().text_size;
        assert_eq!(code.width(), cell * 4 + CELL_GAP * 3);
    }

    #[test]
    fn test_render_shows_typed_digits() {
        let mut code = input(4, Charset::Numeric);
        for c in ['9', '8'] {
            code.handle_event(&TuiEvent::InputChar(c));
        }

        let backend = TestBackend::new(30, CELL_HEIGHT);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| code.render(f, f.area())).unwrap();

        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains('9'));
        assert!(text.contains('8'));
    }
}
