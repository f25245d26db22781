//! # Presenters
//!
//! The two ways the guide can be shown. The menu only sees the
//! [`Presenter`] trait, so tests can swap in a double.

pub mod console;
pub mod window;

use std::fmt;

use crate::core::NutritionTable;

pub use console::ConsolePresenter;
pub use window::WindowPresenter;

/// Errors that end a presentation. Neither variant is retried.
#[derive(Debug)]
pub enum PresentError {
    /// Writing to the output stream failed.
    OutputStream(std::io::Error),
    /// No graphical display or windowing subsystem is reachable.
    DisplayUnavailable(String),
}

impl fmt::Display for PresentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PresentError::OutputStream(e) => write!(f, "output stream error: {e}"),
            PresentError::DisplayUnavailable(msg) => write!(f, "display unavailable: {msg}"),
        }
    }
}

impl std::error::Error for PresentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PresentError::OutputStream(e) => Some(e),
            PresentError::DisplayUnavailable(_) => None,
        }
    }
}

impl From<std::io::Error> for PresentError {
    fn from(e: std::io::Error) -> Self {
        PresentError::OutputStream(e)
    }
}

pub trait Presenter {
    /// Returns the name of the presenter, for logging.
    fn name(&self) -> &str;

    /// Shows the whole table. May block (the window presenter does).
    fn present(&mut self, table: &NutritionTable) -> Result<(), PresentError>;
}
