//! # Core Guide Logic
//!
//! The data and formatting behind the guide. It knows nothing about
//! consoles, windows or menus.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • NutritionTable       │
//!                    │  • wrap() / render()    │
//!                    │  • config loading       │
//!                    │                         │
//!                    │  No UI. Pure text.      │
//!                    └───────────┬─────────────┘
//!                                │
//!                     ┌──────────┴──────────┐
//!                     ▼                     ▼
//!              ┌────────────┐        ┌────────────┐
//!              │  Console   │        │   Window   │
//!              │ Presenter  │        │ Presenter  │
//!              │  (stdout)  │        │  (eframe)  │
//!              └────────────┘        └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`table`]: `NutritionTable` and its validation
//! - [`format`]: `wrap`, `render` and the console text layout
//! - [`config`]: the optional guide file and its resolution

pub mod config;
pub mod format;
pub mod table;

pub use format::{DEFAULT_WRAP_WIDTH, GUIDE_TITLE, console_text, render, render_with_width, wrap};
pub use table::{Entry, NutritionTable, TableError};
