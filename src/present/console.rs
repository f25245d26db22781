use log::info;
use std::io::{self, Write};

use super::{PresentError, Presenter};
use crate::core::{NutritionTable, console_text};

/// Writes the title and rendered guide to a byte stream (stdout in the binary).
pub struct ConsolePresenter<W: Write> {
    out: W,
    width: usize,
}

impl ConsolePresenter<io::Stdout> {
    pub fn stdout(width: usize) -> Self {
        Self::new(io::stdout(), width)
    }
}

impl<W: Write> ConsolePresenter<W> {
    pub fn new(out: W, width: usize) -> Self {
        Self { out, width }
    }

    /// Gives back the writer, e.g. to inspect a buffer in tests.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Presenter for ConsolePresenter<W> {
    fn name(&self) -> &str {
        "console"
    }

    fn present(&mut self, table: &NutritionTable) -> Result<(), PresentError> {
        info!("Printing guide to console ({} entries, width {})", table.len(), self.width);
        let text = console_text(table, self.width);
        self.out.write_all(text.as_bytes())?;
        self.out.flush()?;
        Ok(())
    }
}
