//! # Nutrition Table
//!
//! The ordered food → description mapping the whole program displays.
//! Built once at startup (from config or the built-in set) and never
//! mutated afterwards. Iteration order is insertion order, which is also
//! the display order.

use std::collections::HashSet;
use std::fmt;

/// One food and what the guide says about it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub description: String,
}

impl Entry {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Why a set of entries could not become a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// Entry at `index` has a blank name.
    EmptyName { index: usize },
    /// Entry `name` has a blank description.
    EmptyDescription { name: String },
    /// `name` appears more than once.
    DuplicateName { name: String },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::EmptyName { index } => write!(f, "entry #{index} has an empty name"),
            TableError::EmptyDescription { name } => {
                write!(f, "entry '{name}' has an empty description")
            }
            TableError::DuplicateName { name } => write!(f, "duplicate entry name '{name}'"),
        }
    }
}

impl std::error::Error for TableError {}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NutritionTable {
    entries: Vec<Entry>,
}

impl NutritionTable {
    /// Validates and wraps `entries`, keeping their order.
    pub fn new(entries: Vec<Entry>) -> Result<Self, TableError> {
        let mut seen = HashSet::new();
        for (index, entry) in entries.iter().enumerate() {
            if entry.name.trim().is_empty() {
                return Err(TableError::EmptyName { index });
            }
            if entry.description.trim().is_empty() {
                return Err(TableError::EmptyDescription {
                    name: entry.name.clone(),
                });
            }
            if !seen.insert(entry.name.as_str()) {
                return Err(TableError::DuplicateName {
                    name: entry.name.clone(),
                });
            }
        }
        Ok(Self { entries })
    }

    /// Convenience for literal tables: `from_pairs([("Kale", "...")])`.
    pub fn from_pairs<I, N, D>(pairs: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (N, D)>,
        N: Into<String>,
        D: Into<String>,
    {
        Self::new(
            pairs
                .into_iter()
                .map(|(name, description)| Entry::new(name, description))
                .collect(),
        )
    }

    /// The table shipped with the binary, used when no guide file overrides it.
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN_ENTRIES
                .iter()
                .map(|(name, description)| Entry::new(*name, *description))
                .collect(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a NutritionTable {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

const BUILTIN_ENTRIES: &[(&str, &str)] = &[
    (
        "Broccoli",
        "Broccoli is a cruciferous vegetable rich in vitamin C, vitamin K and fiber. \
         It also supplies folate and sulforaphane, a sulfur compound studied for its \
         antioxidant effects.",
    ),
    (
        "Blueberries",
        "Blueberries are low in calories and high in anthocyanins, the pigments that \
         give them their color. They provide vitamin C, vitamin K and manganese.",
    ),
    (
        "Salmon",
        "Salmon is a fatty fish and an excellent source of the omega-3 fatty acids EPA \
         and DHA. It also provides high-quality protein, vitamin D and several B vitamins.",
    ),
    (
        "Eggs",
        "Eggs contain complete protein along with choline, lutein and zeaxanthin. The \
         yolk carries most of the vitamins, including vitamin A, vitamin D and B12.",
    ),
    (
        "Spinach",
        "Spinach is a leafy green high in vitamin K, vitamin A, folate and iron. Light \
         cooking makes several of its minerals easier to absorb.",
    ),
    (
        "Almonds",
        "Almonds provide monounsaturated fat, vitamin E, magnesium and fiber. A small \
         handful is a dense source of energy and plant protein.",
    ),
    (
        "Sweet Potatoes",
        "Sweet potatoes are rich in beta-carotene, which the body converts to vitamin A. \
         They also supply potassium, vitamin C and slowly digested carbohydrates.",
    ),
    (
        "Lentils",
        "Lentils are legumes packed with plant protein, fiber, folate and iron. They \
         cook quickly without soaking and keep well when dried.",
    ),
    (
        "Garlic",
        "Garlic contains allicin and other sulfur compounds formed when the clove is \
         crushed. It adds flavor along with small amounts of manganese and vitamin B6.",
    ),
    (
        "Avocado",
        "Avocado is a fruit high in monounsaturated fat, potassium and fiber. It also \
         helps the body absorb fat-soluble nutrients from other foods eaten with it.",
    ),
];
