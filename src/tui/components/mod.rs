//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as fields:
//! - `TitleBar`: code length and status line
//! - `CellView`: one cell, glyph over underline
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit events:
//! - `CodeInput`: the row of cells, owns the `CodeChain`
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs          (this file)
//! ├── title_bar.rs    (Top status line)
//! ├── cell_view.rs    (Single cell renderer)
//! └── code_input.rs   (Row of cells + input routing)
//! ```

mod title_bar;
pub use title_bar::TitleBar;

pub mod cell_view;
pub use cell_view::CellView;
pub mod code_input;
pub use code_input::{CodeInput, CodeInputEvent};
