//! # Code Chain
//!
//! The coordinator that owns an ordered row of [`Cell`]s.
//!
//! ```text
//! CodeChain
//! ├── cells: Vec<Cell>     // stable order, index == CellId
//! └── focused: CellId      // the cell receiving input
//! ```
//!
//! Input always goes to the focused cell. The cell reports back through a
//! [`CellEvents`] buffer, and the chain applies those events in the order
//! they were raised:
//!
//! - `Advance(i)`: focus `i + 1` (the last cell keeps focus).
//! - `Retreat(i)`: focus `i - 1` and clear it (the first cell stays put).
//! - `Changed`: the aggregate code is recomputed and reported to the caller.

use log::{debug, info};

use crate::core::cell::{Cell, CellEvent, CellEvents, CellId, EditRange};

/// High-level events reported to whoever drives the chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChainEvent {
    /// The aggregate code changed. `complete` is true once every cell is filled.
    CodeChanged { code: String, complete: bool },
}

#[derive(Debug, Clone)]
pub struct CodeChain {
    cells: Vec<Cell>,
    focused: CellId,
}

impl CodeChain {
    /// Builds a chain of `digits` empty cells (at least one) with the first focused.
    pub fn new(digits: usize) -> Self {
        let mut cells: Vec<Cell> = (0..digits.max(1)).map(Cell::new).collect();
        cells[0].activate();
        info!("Code chain created with {} cells", cells.len());
        Self { cells, focused: 0 }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True when no cell holds a value.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_filled())
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell(&self, id: CellId) -> Option<&Cell> {
        self.cells.get(id)
    }

    pub fn focused(&self) -> CellId {
        self.focused
    }

    /// Concatenation of every cell value, empty cells contribute nothing.
    pub fn code(&self) -> String {
        self.cells.iter().filter_map(Cell::current_code).collect()
    }

    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Cell::is_filled)
    }

    /// Types `text` into the focused cell at the end of its current content.
    pub fn type_text(&mut self, text: &str) -> Option<ChainEvent> {
        if text.is_empty() {
            return None;
        }
        self.dispatch(|cell, events| {
            let end = usize::from(cell.is_filled());
            let accepted = cell.propose_edit(EditRange::at(end), text, events);
            if !accepted {
                debug!("cell {}: edit {:?} rejected by cell", cell.id(), text);
            }
        })
    }

    /// Backspace on the focused cell.
    pub fn backspace(&mut self) -> Option<ChainEvent> {
        self.dispatch(|cell, events| cell.delete_backward(events))
    }

    /// Moves focus to `id`, clamped to the chain.
    pub fn focus(&mut self, id: CellId) {
        let target = id.min(self.cells.len() - 1);
        if target == self.focused {
            self.cells[target].activate();
            return;
        }
        self.cells[self.focused].deactivate();
        self.cells[target].activate();
        debug!("focus {} -> {}", self.focused, target);
        self.focused = target;
    }

    pub fn focus_previous(&mut self) {
        self.focus(self.focused.saturating_sub(1));
    }

    pub fn focus_next(&mut self) {
        self.focus(self.focused + 1);
    }

    /// Empties every cell and focuses the first one.
    pub fn clear(&mut self) -> Option<ChainEvent> {
        let had_content = !self.is_empty();
        for cell in &mut self.cells {
            cell.reset();
        }
        self.focus(0);
        info!("Code chain cleared");
        had_content.then(|| self.changed_event())
    }

    /// Runs `op` on the focused cell, then applies the events it raised.
    fn dispatch<F>(&mut self, op: F) -> Option<ChainEvent>
    where
        F: FnOnce(&mut Cell, &mut CellEvents),
    {
        let mut events = CellEvents::new();
        op(&mut self.cells[self.focused], &mut events);

        let mut changed = false;
        for event in events.drain() {
            match event {
                CellEvent::Advance(id) => self.advance_from(id),
                CellEvent::Retreat { cell, old_text } => {
                    changed |= self.retreat_from(cell, &old_text);
                }
                CellEvent::Changed => changed = true,
            }
        }

        changed.then(|| self.changed_event())
    }

    fn advance_from(&mut self, id: CellId) {
        self.focus(id + 1);
    }

    /// Returns whether clearing the previous cell changed the code.
    fn retreat_from(&mut self, id: CellId, old_text: &str) -> bool {
        let target = id.saturating_sub(1);
        debug!("retreat from cell {} (old text {:?}) to {}", id, old_text, target);
        self.focus(target);
        let cell = &mut self.cells[target];
        let had_value = cell.is_filled();
        cell.reset();
        had_value
    }

    fn changed_event(&self) -> ChainEvent {
        let code = self.code();
        let complete = self.is_complete();
        debug!("code changed: {:?} (complete={})", code, complete);
        ChainEvent::CodeChanged { code, complete }
    }
}
