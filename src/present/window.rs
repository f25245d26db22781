//! # Window Presenter
//!
//! Shows the guide in one native window holding a read-only, scrollable,
//! monospace text area. `present` owns the calling thread until the user
//! closes the window.
//!
//! The eframe event loop is only started after a display probe passes, so
//! headless hosts fail fast with `DisplayUnavailable` instead of panicking
//! inside the windowing backend.

use eframe::egui;
use log::{info, warn};

use super::{PresentError, Presenter};
use crate::core::{NutritionTable, render_with_width};

pub const WINDOW_TITLE: &str = "Nutrition Guide";
/// Visible text area, in character cells. Content beyond scrolls.
pub const VISIBLE_COLUMNS: usize = 80;
pub const VISIBLE_ROWS: usize = 30;

/// Panel margins, text edit padding and the scrollbar.
const WINDOW_PADDING: egui::Vec2 = egui::Vec2::new(40.0, 32.0);
/// Used until the first frame measures the real font.
const INITIAL_INNER_SIZE: egui::Vec2 = egui::Vec2::new(640.0, 480.0);

/// Reads an environment variable. Injectable so tests can fake a headless host.
pub type EnvLookup = fn(&str) -> Option<String>;

fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Checks whether a windowing subsystem is plausibly reachable.
///
/// On X11/Wayland platforms that means `WAYLAND_DISPLAY` or `DISPLAY` is set.
#[cfg(all(unix, not(target_os = "macos")))]
pub fn probe_display(lookup: EnvLookup) -> Result<(), String> {
    for key in ["WAYLAND_DISPLAY", "DISPLAY"] {
        if lookup(key).is_some_and(|v| !v.is_empty()) {
            return Ok(());
        }
    }
    Err("neither WAYLAND_DISPLAY nor DISPLAY is set".to_string())
}

/// macOS and Windows always have a window server for a user session;
/// eframe reports anything else when the event loop is created.
#[cfg(not(all(unix, not(target_os = "macos"))))]
pub fn probe_display(_lookup: EnvLookup) -> Result<(), String> {
    Ok(())
}

pub struct WindowPresenter {
    width: usize,
    env: EnvLookup,
}

impl WindowPresenter {
    pub fn new(width: usize) -> Self {
        Self::with_env(width, process_env)
    }

    pub fn with_env(width: usize, env: EnvLookup) -> Self {
        Self { width, env }
    }
}

impl Presenter for WindowPresenter {
    fn name(&self) -> &str {
        "window"
    }

    fn present(&mut self, table: &NutritionTable) -> Result<(), PresentError> {
        if let Err(reason) = probe_display(self.env) {
            warn!("No display for guide window: {}", reason);
            return Err(PresentError::DisplayUnavailable(reason));
        }

        let text = render_with_width(table, self.width);
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(WINDOW_TITLE)
                .with_inner_size(INITIAL_INNER_SIZE),
            ..Default::default()
        };

        info!("Opening guide window ({} entries)", table.len());
        eframe::run_native(
            WINDOW_TITLE,
            options,
            Box::new(|_cc| Ok(Box::new(GuideViewer::new(text)))),
        )
        .map_err(|e| {
            warn!("Guide window failed: {}", e);
            PresentError::DisplayUnavailable(e.to_string())
        })?;

        info!("Guide window closed");
        Ok(())
    }
}

/// The eframe app: one scroll area around one read-only text edit.
struct GuideViewer {
    text: String,
    sized: bool,
}

impl GuideViewer {
    fn new(text: String) -> Self {
        Self { text, sized: false }
    }
}

impl eframe::App for GuideViewer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let font_id = egui::TextStyle::Monospace.resolve(ui.style());
            let (column_width, row_height) =
                ui.fonts(|f| (f.glyph_width(&font_id, '0'), f.row_height(&font_id)));
            let text_size = egui::vec2(
                column_width * VISIBLE_COLUMNS as f32,
                row_height * VISIBLE_ROWS as f32,
            );

            // Fonts are only measurable once a frame is running
            if !self.sized {
                ctx.send_viewport_cmd(egui::ViewportCommand::InnerSize(text_size + WINDOW_PADDING));
                self.sized = true;
            }

            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    // A `&str` buffer is selectable and copyable but not editable
                    let mut view: &str = &self.text;
                    ui.add(
                        egui::TextEdit::multiline(&mut view)
                            .font(egui::TextStyle::Monospace)
                            .desired_width(text_size.x)
                            .desired_rows(VISIBLE_ROWS),
                    );
                });
        });
    }
}
