use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::TitleBar;

const HINT: &str = "←/→ move · Backspace erase · Ctrl+U clear · Enter submit · Esc quit";

pub fn draw_ui(frame: &mut Frame, tui: &mut TuiState) {
    use Constraint::{Fill, Length};
    let code_height = tui.code_input.height();
    let layout = Layout::vertical([Length(1), Fill(1), Length(code_height), Length(1), Fill(1)]);
    let [title_area, _, code_area, hint_area, _] = layout.areas(frame.area());

    let chain = tui.code_input.chain();
    let mut title_bar = TitleBar::new(chain.len(), tui.status_message.clone(), chain.is_complete());
    title_bar.render(frame, title_area);

    tui.code_input.render(frame, code_area);

    let hint = Paragraph::new(Line::raw(HINT))
        .centered()
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(hint, hint_area);
}
