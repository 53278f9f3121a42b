use std::path::Path;

use regex::Regex;

use crate::config::AppConfig;
use crate::display_list::Canvas;
use crate::element::MAX_SIDES;
use crate::error::MapError;
use crate::file_handler::{self, FileHandler};
use crate::input::InputHandler;
use crate::map_area::MapArea;
use crate::panels;
use crate::renderer::Renderer;
use crate::tool::{Tool, ToolState};

/// Accepts positive integers only, used for the custom polygon dialog
pub const REGEX_POSITIVE_INTEGER: &str = "([1-9][0-9]*)";

/// Read-only text shown in a modal window
#[derive(Debug, Clone, PartialEq)]
pub struct MessageDialog {
    pub title: String,
    pub message: String,
}

/// Text prompt that only keeps input matching `pattern`
#[derive(Debug, Clone)]
pub struct InputDialog {
    pub title: String,
    pub prompt: String,
    pub text: String,
    pattern: Regex,
}

impl InputDialog {
    pub fn new(title: &str, prompt: &str, pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            title: title.to_owned(),
            prompt: prompt.to_owned(),
            text: String::new(),
            pattern: Regex::new(&format!("^(?:{pattern})$"))?,
        })
    }

    /// Revert to `previous` unless the text is empty or matches the pattern
    pub fn filter_edit(&mut self, previous: &str) {
        if !self.text.is_empty() && !self.pattern.is_match(&self.text) {
            self.text = previous.to_owned();
        }
    }

    /// The accepted value, if the current text is a full match
    pub fn value(&self) -> Option<&str> {
        self.pattern
            .is_match(&self.text)
            .then_some(self.text.as_str())
    }
}

/// The map maker window: menus, tool palette, status bar and the canvas
pub struct MapMakerApp {
    pub(crate) map: MapArea<Canvas>,
    pub(crate) config: AppConfig,
    pub(crate) renderer: Renderer,
    pub(crate) input: InputHandler,
    pub(crate) files: FileHandler,
    pub(crate) message: Option<MessageDialog>,
    pub(crate) input_dialog: Option<InputDialog>,
    pub(crate) status: String,
}

impl Default for MapMakerApp {
    fn default() -> Self {
        Self::with_config(AppConfig::default())
    }
}

impl MapMakerApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let config = cc
            .storage
            .and_then(|storage| eframe::get_value::<AppConfig>(storage, eframe::APP_KEY))
            .unwrap_or_default();
        log::info!("Starting with maps directory {}", config.maps_directory.display());
        Self::with_config(config)
    }

    pub fn with_config(config: AppConfig) -> Self {
        Self {
            map: MapArea::new(ToolState::default(), Canvas::new()),
            renderer: Renderer::new(),
            input: InputHandler::new(egui::Rect::NOTHING),
            files: FileHandler::new(&config),
            config,
            message: None,
            input_dialog: None,
            status: String::new(),
        }
    }

    pub fn map(&self) -> &MapArea<Canvas> {
        &self.map
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn tool_label(&self) -> String {
        format!("Tool: {}", self.map.active_tool())
    }

    pub fn option_label(&self) -> String {
        format!("Option: {}", self.map.tool_state().option_label())
    }

    pub fn select_tool(&mut self, tool: Tool) {
        self.map.set_tool(tool);
    }

    /// Room with `sides` vertices
    pub fn select_room(&mut self, sides: i32) {
        self.map.set_tool(Tool::Room);
        self.map.set_option(sides);
    }

    pub fn clear_map(&mut self) {
        self.map.clear_map();
        self.status = "Map cleared".to_owned();
    }

    pub fn save_map_to(&mut self, path: &Path) {
        match file_handler::save_map(path, &self.map.convert_to_string()) {
            Ok(()) => {
                self.files.remember_directory(path);
                self.status = format!("Saved {}", path.display());
            }
            Err(err) => {
                log::error!("Save failed: {}", err);
                self.status = format!("Save failed: {err}");
            }
        }
    }

    pub fn load_map_from(&mut self, path: &Path) {
        match file_handler::load_map(path) {
            Ok(records) => {
                let loaded = self.map.convert_from_string(&records);
                self.files.remember_directory(path);
                self.status = format!("Loaded {} shape(s) from {}", loaded, path.display());
            }
            Err(err) => {
                log::error!("Load failed: {}", err);
                self.status = format!("Load failed: {err}");
            }
        }
    }

    pub(crate) fn save_map(&mut self) {
        if let Some(path) = self.files.pick_save_path() {
            self.save_map_to(&path);
        }
    }

    pub(crate) fn load_map(&mut self) {
        if let Some(path) = self.files.pick_open_path() {
            self.load_map_from(&path);
        }
    }

    pub(crate) fn show_resource(&mut self, title: &str, path: &Path) {
        self.message = Some(MessageDialog {
            title: title.to_owned(),
            message: file_handler::load_text_file(path, "\n"),
        });
    }

    pub(crate) fn display_credit(&mut self) {
        let path = self.config.credits_path.clone();
        self.show_resource("Credit", &path);
    }

    pub(crate) fn display_info(&mut self) {
        let path = self.config.info_path.clone();
        self.show_resource("Info", &path);
    }

    pub(crate) fn display_help(&mut self) {
        let path = self.config.help_path.clone();
        self.show_resource("Help", &path);
    }

    pub(crate) fn ask_custom_sides(&mut self) {
        match InputDialog::new("Custom Room", "Number of sides:", REGEX_POSITIVE_INTEGER) {
            Ok(dialog) => self.input_dialog = Some(dialog),
            Err(err) => log::error!("Invalid input pattern: {}", err),
        }
    }

    /// Apply an accepted custom side count
    pub fn accept_custom_sides(&mut self, value: &str) {
        let sides = match value.parse::<usize>() {
            Ok(sides) => sides,
            Err(_) => {
                self.status = format!("\"{value}\" is not a side count");
                return;
            }
        };

        let err = if sides < 2 {
            MapError::TooFewSides(sides)
        } else if sides > MAX_SIDES {
            MapError::TooManySides(sides)
        } else {
            // Bounded by MAX_SIDES above
            self.select_room(sides as i32);
            return;
        };
        log::warn!("{}", err);
        self.status = err.to_string();
    }

    /// Close the topmost open dialog, returning false when none was open
    pub fn dismiss_dialog(&mut self) -> bool {
        self.input_dialog.take().is_some() || self.message.take().is_some()
    }

    fn canvas(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let (response, painter) =
                    ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
                let rect = response.rect;

                self.input.set_canvas_rect(rect);
                let blocked = self.message.is_some() || self.input_dialog.is_some();
                for event in self.input.process_input(ctx, response.hovered() && !blocked) {
                    self.map.handle(event);
                }

                self.renderer.render(&painter, rect, self.map.display_list());
            });
    }
}

impl eframe::App for MapMakerApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        self.config.maps_directory = self.files.directory().to_path_buf();
        eframe::set_value(storage, eframe::APP_KEY, &self.config);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Escape backs out of a dialog before it closes the window
        if ctx.input(|i| i.key_released(egui::Key::Escape)) && !self.dismiss_dialog() {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }

        panels::menu_bar(self, ctx);
        panels::status_bar(self, ctx);
        panels::tools_panel(self, ctx);
        self.canvas(ctx);
        panels::dialogs(self, ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_dialog_rejects_non_numbers() {
        let mut dialog = InputDialog::new("t", "p", REGEX_POSITIVE_INTEGER).unwrap();
        dialog.text = "12".to_owned();
        dialog.filter_edit("");
        assert_eq!(dialog.value(), Some("12"));

        dialog.text = "12a".to_owned();
        dialog.filter_edit("12");
        assert_eq!(dialog.text, "12");

        dialog.text = "0".to_owned();
        dialog.filter_edit("12");
        assert_eq!(dialog.text, "12");

        dialog.text.clear();
        dialog.filter_edit("12");
        assert_eq!(dialog.value(), None);
    }

    #[test]
    fn test_custom_sides_below_two_keep_the_tool() {
        let mut app = MapMakerApp::default();
        app.select_tool(Tool::Erase);
        app.accept_custom_sides("1");
        assert_eq!(app.map().active_tool(), Tool::Erase);
        assert!(app.status().contains("at least 2"));

        app.accept_custom_sides("8");
        assert_eq!(app.map().active_tool(), Tool::Room);
        assert_eq!(app.option_label(), "Option: 8-gon");
    }

    #[test]
    fn test_custom_sides_are_capped() {
        let mut app = MapMakerApp::default();
        app.select_tool(Tool::Move);

        // Passes the dialog filter but would not fit in memory as a polygon
        app.accept_custom_sides("2000000000");
        assert_eq!(app.map().active_tool(), Tool::Move);
        assert!(app.status().contains("at most 64"));

        app.accept_custom_sides("99999999999999999999999");
        assert_eq!(app.map().active_tool(), Tool::Move);

        app.accept_custom_sides(&MAX_SIDES.to_string());
        assert_eq!(app.map().active_tool(), Tool::Room);
        assert_eq!(app.map().tool_state().option(), MAX_SIDES as i32);
    }

    #[test]
    fn test_escape_closes_dialogs_first() {
        let mut app = MapMakerApp::default();
        app.display_help();
        app.ask_custom_sides();
        assert!(app.message.is_some() && app.input_dialog.is_some());

        assert!(app.dismiss_dialog());
        assert!(app.input_dialog.is_none());
        assert!(app.message.is_some());

        assert!(app.dismiss_dialog());
        assert!(app.message.is_none());
        assert!(!app.dismiss_dialog());
    }
}
