use nutriguide::core::config::{self, ResolvedConfig};
use nutriguide::core::{NutritionTable, render, wrap};
use nutriguide::menu::{INVALID_CHOICE, Menu, MenuError, MenuOutcome, PROMPT, WELCOME};
use nutriguide::present::{ConsolePresenter, PresentError, Presenter, WindowPresenter};
use std::fs;

// ============================================================================
// Helper Functions
// ============================================================================

const BROCCOLI_CONSOLE: &str = "\
The Ultimate Guide to the Most Naturally Nutritious Foods for Humans

Broccoli:
Broccoli is a cruciferous vegetable rich in vitamin C and fiber.

";

fn broccoli_table() -> NutritionTable {
    NutritionTable::from_pairs([(
        "Broccoli",
        "Broccoli is a cruciferous vegetable rich in vitamin C and fiber.",
    )])
    .unwrap()
}

/// Environment with no display variables at all.
fn headless(_key: &str) -> Option<String> {
    None
}

/// Runs the menu with a buffered console presenter and a headless window presenter.
fn run_menu(
    input: &str,
    table: &NutritionTable,
) -> (Result<MenuOutcome, MenuError>, String, String) {
    let mut console = ConsolePresenter::new(Vec::new(), 80);
    let mut window = WindowPresenter::with_env(80, headless);
    let mut menu_output = Vec::new();

    let result = Menu::new(&mut console, &mut window).run(
        &mut input.as_bytes(),
        &mut menu_output,
        table,
    );

    (
        result,
        String::from_utf8(menu_output).unwrap(),
        String::from_utf8(console.into_inner()).unwrap(),
    )
}

// ============================================================================
// Console Output
// ============================================================================

#[test]
fn test_console_output_is_byte_exact() {
    let mut console = ConsolePresenter::new(Vec::new(), 80);
    console.present(&broccoli_table()).unwrap();
    assert_eq!(String::from_utf8(console.into_inner()).unwrap(), BROCCOLI_CONSOLE);
}

#[test]
fn test_render_empty_table_is_empty() {
    assert_eq!(render(&NutritionTable::default()), "");
}

#[test]
fn test_wrap_over_long_word_is_untouched() {
    let word = "pneumonoultramicroscopicsilicovolcanoconiosis";
    assert_eq!(wrap(&format!("a {word} b"), 10), format!("a\n{word}\nb"));
}

// ============================================================================
// Menu Scenarios
// ============================================================================

#[test]
fn test_menu_one_prints_guide_and_never_builds_window() {
    let (result, menu_output, console_output) = run_menu("1\n", &broccoli_table());

    // A headless window presenter would have failed had it been invoked
    assert_eq!(result.unwrap(), MenuOutcome::ConsoleShown);
    assert_eq!(menu_output, format!("{WELCOME}\n{PROMPT}"));
    assert_eq!(console_output, BROCCOLI_CONSOLE);
}

#[test]
fn test_menu_three_prints_only_invalid_choice() {
    let (result, menu_output, console_output) = run_menu("3\n", &broccoli_table());

    assert_eq!(result.unwrap(), MenuOutcome::Rejected);
    let after_prompt = menu_output
        .strip_prefix(&format!("{WELCOME}\n{PROMPT}"))
        .expect("menu starts with welcome and prompt");
    assert_eq!(after_prompt, format!("{INVALID_CHOICE}\n"));
    assert!(console_output.is_empty());
}

#[test]
fn test_menu_whitespace_padded_choice_is_rejected() {
    let (result, _, console_output) = run_menu(" 1\n", &broccoli_table());
    assert_eq!(result.unwrap(), MenuOutcome::Rejected);
    assert!(console_output.is_empty());
}

#[cfg(all(unix, not(target_os = "macos")))]
#[test]
fn test_menu_two_on_headless_host_has_no_console_fallback() {
    let (result, _, console_output) = run_menu("2\n", &broccoli_table());

    assert!(matches!(
        result,
        Err(MenuError::Present(PresentError::DisplayUnavailable(_)))
    ));
    assert!(console_output.is_empty());
}

// ============================================================================
// Config To Console
// ============================================================================

#[test]
fn test_guide_file_drives_console_output() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("guide.toml");
    fs::write(
        &path,
        r#"
[general]
wrap_width = 20

[[entries]]
name = "Oats"
description = "Oats are a whole grain with soluble fiber called beta-glucan."

[[entries]]
name = "Kiwi"
description = "Small fruit, big vitamin C."
"#,
    )
    .unwrap();

    let file_config = config::load_config(Some(&path)).unwrap();
    let ResolvedConfig { table, wrap_width } = config::resolve(&file_config).unwrap();

    let mut console = ConsolePresenter::new(Vec::new(), wrap_width);
    console.present(&table).unwrap();
    let written = String::from_utf8(console.into_inner()).unwrap();

    assert_eq!(
        written,
        "The Ultimate Guide to the Most Naturally Nutritious Foods for Humans\n\
         \n\
         Oats:\n\
         Oats are a whole\n\
         grain with soluble\n\
         fiber called\n\
         beta-glucan.\n\
         \n\
         Kiwi:\n\
         Small fruit, big\n\
         vitamin C.\n\
         \n"
    );
}
