//! # Code Cell
//!
//! One single-character slot of a verification-code entry row.
//!
//! The cell owns its value and decides what happens to every edit, but it
//! never moves focus itself. It reports what the surrounding chain should do
//! through a [`CellDelegate`]:
//!
//! ```text
//! keystroke ──▶ propose_edit() ──▶ value + highlight ──▶ on_advance ──▶ on_changed
//! backspace ──▶ delete_backward() ─▶ (local delete)  ──▶ on_retreat
//! ```
//!
//! ## The empty-backspace problem
//!
//! Deleting the only character of a cell and pressing backspace on a cell
//! that was already empty both leave the cell empty. Only the second one
//! should hop back to the previous cell. The local deletion goes through
//! [`Cell::propose_edit`], which marks the cell as emptied; `delete_backward`
//! consumes that mark and skips the retreat exactly once.

use log::debug;
use unicode_segmentation::UnicodeSegmentation;

/// Position of a cell within its chain.
pub type CellId = usize;

/// Most graphemes a cell may hold.
pub const MAX_CHARACTERS: usize = 1;

/// Replacement range over the cell's text, in grapheme units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EditRange {
    pub start: usize,
    pub len: usize,
}

impl EditRange {
    pub fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    /// Zero-length range at `pos` (plain insertion).
    pub fn at(pos: usize) -> Self {
        Self { start: pos, len: 0 }
    }
}

/// Underline state, derived from the cell value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Highlight {
    #[default]
    Inactive,
    Active,
}

/// Capability the owning chain exposes to its cells.
pub trait CellDelegate {
    /// The cell just became filled; focus should move forward.
    fn on_advance(&mut self, cell: CellId);

    /// Backspace hit a cell that was already empty; focus should move back
    /// and the previous cell should lose its character.
    fn on_retreat(&mut self, cell: CellId, old_text: &str);

    /// The cell value changed.
    fn on_changed(&mut self);
}

/// Events a cell can raise, in the order they were raised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellEvent {
    Advance(CellId),
    Retreat { cell: CellId, old_text: String },
    Changed,
}

/// A [`CellDelegate`] that buffers events for later dispatch.
///
/// A chain cannot lend itself to a cell it is mutably borrowing, so it hands
/// the cell one of these and applies the events once the cell returns.
#[derive(Debug, Default)]
pub struct CellEvents {
    events: Vec<CellEvent>,
}

impl CellEvents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_slice(&self) -> &[CellEvent] {
        &self.events
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn drain(&mut self) -> std::vec::Drain<'_, CellEvent> {
        self.events.drain(..)
    }
}

impl CellDelegate for CellEvents {
    fn on_advance(&mut self, cell: CellId) {
        self.events.push(CellEvent::Advance(cell));
    }

    fn on_retreat(&mut self, cell: CellId, old_text: &str) {
        self.events.push(CellEvent::Retreat {
            cell,
            old_text: old_text.to_string(),
        });
    }

    fn on_changed(&mut self) {
        self.events.push(CellEvent::Changed);
    }
}

/// One slot of the code entry row.
#[derive(Debug, Clone)]
pub struct Cell {
    id: CellId,
    /// At most one grapheme. `None` is the canonical empty value.
    value: Option<String>,
    /// Set when an edit empties the cell, consumed by the next deletion.
    marked_empty_by_system: bool,
    focused: bool,
    highlight: Highlight,
}

impl Cell {
    pub fn new(id: CellId) -> Self {
        Self {
            id,
            value: None,
            marked_empty_by_system: false,
            focused: false,
            highlight: Highlight::Inactive,
        }
    }

    pub fn id(&self) -> CellId {
        self.id
    }

    /// Current text, `""` when empty.
    pub fn text(&self) -> &str {
        self.value.as_deref().unwrap_or("")
    }

    pub fn current_code(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn is_filled(&self) -> bool {
        self.value.is_some()
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn highlight(&self) -> Highlight {
        self.highlight
    }

    pub fn is_marked_empty_by_system(&self) -> bool {
        self.marked_empty_by_system
    }

    /// Decide what a proposed edit does to this cell.
    ///
    /// The cell never appends: a non-empty result stores the replacement
    /// itself, which gives type-over behavior. Returns whether the edit fits
    /// in one character; `false` tells the input surface to drop the
    /// keystroke (multi-character paste, typing over a filled cell).
    pub fn propose_edit(
        &mut self,
        range: EditRange,
        replacement: &str,
        delegate: &mut dyn CellDelegate,
    ) -> bool {
        let new_text = splice(self.text(), range, replacement);
        let new_len = new_text.graphemes(true).count();

        let filled = if new_len > 0 {
            // An empty replacement that leaves text behind keeps that text.
            let source = if replacement.is_empty() {
                new_text.as_str()
            } else {
                replacement
            };
            self.value = first_grapheme(source);
            true
        } else {
            self.value = None;
            self.marked_empty_by_system = true;
            false
        };
        self.refresh_highlight();

        if filled {
            delegate.on_advance(self.id);
        }
        delegate.on_changed();

        let accepted = new_len <= MAX_CHARACTERS;
        debug!(
            "cell {}: edit {:?} with {:?} -> {:?} (accepted={})",
            self.id, range, replacement, self.value, accepted
        );
        accepted
    }

    /// Handle a backspace key press.
    pub fn delete_backward(&mut self, delegate: &mut dyn CellDelegate) {
        let old_text = self.text().to_string();

        if let Some(last) = old_text.graphemes(true).count().checked_sub(1) {
            self.propose_edit(EditRange::new(last, 1), "", delegate);
        }

        if self.marked_empty_by_system {
            self.marked_empty_by_system = false;
            debug!("cell {}: emptied by edit, retreat suppressed", self.id);
            return;
        }

        if self.value.is_none() {
            debug!("cell {}: backspace on empty cell, retreating", self.id);
            delegate.on_retreat(self.id, &old_text);
        }
    }

    pub fn activate(&mut self) {
        self.focused = true;
        if self.value.as_deref() == Some("") {
            self.value = None;
        }
    }

    pub fn deactivate(&mut self) {
        self.focused = false;
    }

    /// Clear the cell without notifying anyone.
    pub fn reset(&mut self) {
        self.value = None;
        self.refresh_highlight();
    }

    fn refresh_highlight(&mut self) {
        self.highlight = match self.value.as_deref().map(str::trim) {
            Some(text) if !text.is_empty() => Highlight::Active,
            _ => Highlight::Inactive,
        };
    }
}

/// Replace `range` (grapheme units, clamped to the text) with `replacement`.
fn splice(text: &str, range: EditRange, replacement: &str) -> String {
    let graphemes: Vec<&str> = text.graphemes(true).collect();
    let start = range.start.min(graphemes.len());
    let end = start.saturating_add(range.len).min(graphemes.len());

    let mut out = String::with_capacity(text.len() + replacement.len());
    out.extend(graphemes[..start].iter().copied());
    out.push_str(replacement);
    out.extend(graphemes[end..].iter().copied());
    out
}

fn first_grapheme(text: &str) -> Option<String> {
    text.graphemes(true).next().map(str::to_string)
}
