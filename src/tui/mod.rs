//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the code row,
//! and translates keyboard events into cell edits.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop sleeps up to 250ms waiting for input and
//! only redraws after an event (including terminal resize). All pending
//! events are drained before the next draw.

pub mod appearance;
pub mod component;
pub mod components;
pub mod event;
mod ui;

use log::{debug, error, info};
use std::io::{self, stdout};
use std::time::Duration;

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::Charset;
use crate::core::config::ResolvedConfig;
use crate::tui::appearance::Appearance;
use crate::tui::component::EventHandler;
use crate::tui::components::{CodeInput, CodeInputEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const IDLE_STATUS: &str = "Enter the code";

/// TUI-specific presentation state
pub struct TuiState {
    pub code_input: CodeInput,
    pub status_message: String,
}

impl TuiState {
    pub fn new(digits: usize, charset: Charset, appearance: Appearance) -> Self {
        Self {
            code_input: CodeInput::new(digits, charset, appearance),
            status_message: IDLE_STATUS.to_string(),
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self::new(
            config.digits,
            config.charset,
            Appearance::from_config(&config.appearance),
        )
    }

    /// Routes one event. Returns `Some(code)` when the user submitted.
    fn handle_event(&mut self, event: &TuiEvent) -> Option<String> {
        match self.code_input.handle_event(event)? {
            CodeInputEvent::Changed(code) => {
                let chain = self.code_input.chain();
                let filled = chain.cells().iter().filter(|cell| cell.is_filled()).count();
                self.status_message = if code.is_empty() {
                    IDLE_STATUS.to_string()
                } else {
                    format!("{} of {} entered", filled, chain.len())
                };
                None
            }
            CodeInputEvent::Completed(_) => {
                self.status_message = "Code complete".to_string();
                None
            }
            CodeInputEvent::Submit(code) => Some(code),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> io::Result<Self> {
        // Cells draw their own caret, so the terminal cursor stays hidden
        execute!(stdout(), EnableBracketedPaste, Hide)?;
        info!("Terminal modes enabled (bracketed paste, hidden cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste, Show);
    }
}

/// Runs the entry screen until the user submits a complete code or quits.
///
/// Returns the submitted code, or `None` when the user quit. A terminal
/// error ends the loop; the terminal is restored before it is returned.
pub fn run(config: ResolvedConfig) -> io::Result<Option<String>> {
    let mut tui = TuiState::from_config(&config);

    let mut terminal = ratatui::init();
    let result = TerminalModeGuard::new().and_then(|_guard| event_loop(&mut terminal, &mut tui));
    ratatui::restore();

    if let Err(e) = &result {
        error!("Terminal error: {}", e);
    }
    result
}

fn event_loop(terminal: &mut DefaultTerminal, tui: &mut TuiState) -> io::Result<Option<String>> {
    let mut needs_redraw = true;

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, tui))?;
            needs_redraw = false;
        }

        let mut next = poll_event_timeout(Duration::from_millis(250))?;
        while let Some(event) = next {
            needs_redraw = true;
            if event == TuiEvent::Quit {
                info!("Quit requested");
                return Ok(None);
            }
            if let Some(code) = tui.handle_event(&event) {
                debug!("Submitted code of length {}", code.chars().count());
                return Ok(Some(code));
            }
            next = poll_event_immediate()?;
        }
    }
}
