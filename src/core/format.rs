//! Pure text formatting: wrapping descriptions and rendering the guide.
//!
//! Nothing here touches I/O. Both presenters build their text from these
//! functions, so console and window always show the same bytes.

use crate::core::table::NutritionTable;

/// Column width used when nothing else is configured.
pub const DEFAULT_WRAP_WIDTH: usize = 80;

/// Title line printed above the guide on the console.
pub const GUIDE_TITLE: &str = "The Ultimate Guide to the Most Naturally Nutritious Foods for Humans";

/// One whitespace-free run of text, measured in characters.
///
/// textwrap's own `Word` measures display columns, which lets zero-width
/// code points push a line past `width` characters.
#[derive(Debug)]
struct CharWord<'a>(&'a str);

impl textwrap::core::Fragment for CharWord<'_> {
    fn width(&self) -> f64 {
        self.0.chars().count() as f64
    }

    fn whitespace_width(&self) -> f64 {
        1.0
    }

    fn penalty_width(&self) -> f64 {
        0.0
    }
}

/// Re-flow `text` into lines of at most `width` characters joined by `\n`.
///
/// Greedy and whitespace-only: hyphenated words stay whole and an
/// over-long word is left on its own line rather than split. All
/// whitespace runs (newlines included) collapse to a single space first,
/// so already-wrapped text re-flows to the same result.
pub fn wrap(text: &str, width: usize) -> String {
    let words: Vec<CharWord<'_>> = text.split_whitespace().map(CharWord).collect();
    if words.is_empty() {
        return String::new();
    }

    let line_width = width.max(1) as f64;
    textwrap::wrap_algorithms::wrap_first_fit(&words, &[line_width])
        .iter()
        .map(|line| line.iter().map(|w| w.0).collect::<Vec<_>>().join(" "))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the whole table at [`DEFAULT_WRAP_WIDTH`].
pub fn render(table: &NutritionTable) -> String {
    render_with_width(table, DEFAULT_WRAP_WIDTH)
}

/// Each entry becomes `"{name}:"`, its wrapped description, and one blank
/// separator line, in table order.
pub fn render_with_width(table: &NutritionTable, width: usize) -> String {
    let mut out = String::new();
    for entry in table {
        out.push_str(&entry.name);
        out.push_str(":\n");
        out.push_str(&wrap(&entry.description, width));
        out.push_str("\n\n");
    }
    out
}

/// Exact bytes the console presenter writes: title, blank line, guide.
pub fn console_text(table: &NutritionTable, width: usize) -> String {
    format!("{GUIDE_TITLE}\n\n{}", render_with_width(table, width))
}
