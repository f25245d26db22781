//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::NutritionTable;
use crate::present::{PresentError, Presenter};

pub const BROCCOLI: &str = "Broccoli is a cruciferous vegetable rich in vitamin C and fiber.";

/// A small synthetic table with descriptions long enough to wrap.
pub fn fixture_table() -> NutritionTable {
    NutritionTable::from_pairs([
        ("Broccoli", BROCCOLI),
        (
            "Lentils",
            "Lentils are legumes with plenty of plant protein, fiber and iron,\n\
             and they cook quickly without soaking.",
        ),
        ("Kiwi", "Small fruit, big vitamin C."),
    ])
    .expect("fixture table is valid")
}

/// Records every table it is asked to present instead of showing it.
pub struct RecordingPresenter {
    name: &'static str,
    fail: bool,
    pub presented: Vec<NutritionTable>,
}

impl RecordingPresenter {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            fail: false,
            presented: Vec::new(),
        }
    }

    /// Behaves like a window presenter on a headless host.
    pub fn failing(name: &'static str) -> Self {
        Self {
            fail: true,
            ..Self::new(name)
        }
    }
}

impl Presenter for RecordingPresenter {
    fn name(&self) -> &str {
        self.name
    }

    fn present(&mut self, table: &NutritionTable) -> Result<(), PresentError> {
        if self.fail {
            return Err(PresentError::DisplayUnavailable("test double".to_string()));
        }
        self.presented.push(table.clone());
        Ok(())
    }
}
