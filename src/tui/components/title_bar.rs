//! # TitleBar Component
//!
//! Top status line showing the code length and the current status.
//!
//! ## Design Decisions
//!
//! ### Stateless Component
//!
//! TitleBar is purely presentational. It receives all data as props and has
//! no internal state:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(6, "Enter the code".to_string(), false);
//! title_bar.render(frame, area);
//! ```
//!
//! ## Conditional Formatting
//!
//! 1. **Ready**: `"Verification Code (6 digits) | Code complete | ✓ Enter to submit"`
//! 2. **Status message**: `"Verification Code (6 digits) | Enter the code"`
//! 3. **Default**: `"Verification Code (6 digits)"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

pub struct TitleBar {
    /// Number of cells in the row
    pub digits: usize,
    /// Status message (e.g., "Enter the code")
    pub status_message: String,
    /// Whether every cell is filled
    pub ready: bool,
}

impl TitleBar {
    pub fn new(digits: usize, status_message: String, ready: bool) -> Self {
        Self {
            digits,
            status_message,
            ready,
        }
    }

    fn title_text(&self) -> String {
        let unit = if self.digits == 1 { "digit" } else { "digits" };
        let base = format!("Verification Code ({} {})", self.digits, unit);
        if self.ready {
            format!("{} | {} | ✓ Enter to submit", base, self.status_message)
        } else if self.status_message.is_empty() {
            base
        } else {
            format!("{} | {}", base, self.status_message)
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Span::raw(self.title_text()), area);
    }
}
