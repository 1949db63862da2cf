//! # Core Entry Logic
//!
//! The interaction rules of the code entry row.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Cell (one slot)      │
//!                    │  • CodeChain (row)      │
//!                    │  • Config (settings)    │
//!                    │                         │
//!                    │  No UI. Synchronous.    │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`cell`]: `Cell` and the `CellDelegate` capability it reports through
//! - [`chain`]: `CodeChain`, the coordinator that owns the cells and moves focus
//! - [`config`]: settings file, env and CLI resolution

pub mod cell;
pub mod chain;
pub mod config;
