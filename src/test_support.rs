//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::cell::{CellDelegate, CellId};
use crate::core::chain::CodeChain;

/// One delegate callback, as observed by [`Recorder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Advance(CellId),
    Retreat(CellId, String),
    Changed,
}

/// A delegate that remembers every callback it receives.
#[derive(Debug, Default)]
pub struct Recorder {
    pub calls: Vec<Call>,
}

impl CellDelegate for Recorder {
    fn on_advance(&mut self, cell: CellId) {
        self.calls.push(Call::Advance(cell));
    }

    fn on_retreat(&mut self, cell: CellId, old_text: &str) {
        self.calls.push(Call::Retreat(cell, old_text.to_string()));
    }

    fn on_changed(&mut self) {
        self.calls.push(Call::Changed);
    }
}

/// Creates a chain with one cell per character of `code`, typed in order.
pub fn filled_chain(code: &str) -> CodeChain {
    let mut chain = CodeChain::new(code.chars().count());
    for c in code.chars() {
        chain.type_text(&c.to_string());
    }
    chain
}
