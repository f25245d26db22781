//! # Menu
//!
//! A single-shot prompt: print the welcome line and the prompt, read one
//! line, then show the guide one way or the other.
//!
//! ```text
//!                  ┌──────────────► ConsoleShown   ("1")
//! AwaitingChoice ──┼──────────────► WindowShown    ("2")
//!                  └──────────────► Rejected       (anything else)
//! ```
//!
//! There is no retry loop. An invalid entry prints one message and the
//! run is over.

use log::{debug, info};
use std::fmt;
use std::io::{self, BufRead, Write};

use crate::core::NutritionTable;
use crate::present::{PresentError, Presenter};

pub const WELCOME: &str = "Welcome to the Nutrition Guide!";
pub const PROMPT: &str = "Enter 1 to view the guide in the console, or 2 to open it in a window: ";
pub const INVALID_CHOICE: &str = "Invalid choice. Please run the program again and enter 1 or 2.";

/// A recognised menu answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Console,
    Window,
}

impl Choice {
    /// Only the exact bytes "1" and "2" count. Surrounding whitespace or
    /// undecodable bytes make the answer invalid.
    pub fn parse(answer: &[u8]) -> Option<Choice> {
        match answer {
            b"1" => Some(Choice::Console),
            b"2" => Some(Choice::Window),
            _ => None,
        }
    }
}

/// Terminal state of one menu run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOutcome {
    ConsoleShown,
    WindowShown,
    Rejected,
}

#[derive(Debug)]
pub enum MenuError {
    /// Reading the answer failed.
    Input(io::Error),
    /// Writing the menu text failed.
    Output(io::Error),
    /// The chosen presenter failed.
    Present(PresentError),
}

impl fmt::Display for MenuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuError::Input(e) => write!(f, "failed to read menu choice: {e}"),
            MenuError::Output(e) => write!(f, "failed to write menu: {e}"),
            MenuError::Present(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for MenuError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MenuError::Input(e) | MenuError::Output(e) => Some(e),
            MenuError::Present(e) => Some(e),
        }
    }
}

impl From<PresentError> for MenuError {
    fn from(e: PresentError) -> Self {
        MenuError::Present(e)
    }
}

/// Strips the line terminator `read_until` keeps, and nothing else.
fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// Dispatches one answer to one of two presenters.
pub struct Menu<'p> {
    console: &'p mut dyn Presenter,
    window: &'p mut dyn Presenter,
}

impl<'p> Menu<'p> {
    pub fn new(console: &'p mut dyn Presenter, window: &'p mut dyn Presenter) -> Self {
        Self { console, window }
    }

    /// Prompt on `output`, read one line from `input`, present `table`.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        output: &mut W,
        table: &NutritionTable,
    ) -> Result<MenuOutcome, MenuError> {
        writeln!(output, "{WELCOME}").map_err(MenuError::Output)?;
        write!(output, "{PROMPT}").map_err(MenuError::Output)?;
        output.flush().map_err(MenuError::Output)?;

        // Raw bytes: an answer that is not UTF-8 is just another invalid choice
        let mut line = Vec::new();
        input.read_until(b'\n', &mut line).map_err(MenuError::Input)?;
        let answer = strip_line_ending(&line);
        debug!("Menu answer: {:?}", String::from_utf8_lossy(answer));

        match Choice::parse(answer) {
            Some(Choice::Console) => {
                info!("Presenting via {}", self.console.name());
                self.console.present(table)?;
                Ok(MenuOutcome::ConsoleShown)
            }
            Some(Choice::Window) => {
                info!("Presenting via {}", self.window.name());
                self.window.present(table)?;
                Ok(MenuOutcome::WindowShown)
            }
            None => {
                info!("Rejected menu answer {:?}", String::from_utf8_lossy(answer));
                writeln!(output, "{INVALID_CHOICE}").map_err(MenuError::Output)?;
                output.flush().map_err(MenuError::Output)?;
                Ok(MenuOutcome::Rejected)
            }
        }
    }
}
