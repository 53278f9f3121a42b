use crate::MapMakerApp;
use crate::tool::{ROOM_OPTIONS, Tool};

const PANEL_WIDTH: f32 = 50.0;

fn icon(tool: Tool) -> &'static str {
    match tool {
        Tool::Select => "⬚",
        Tool::Move => "✋",
        Tool::Room => "⬟",
        Tool::Path => "〰",
        Tool::Erase => "⌫",
        Tool::Door => "🚪",
    }
}

/// Vertical tool palette; Room opens a submenu of polygon sizes
pub fn tools_panel(app: &mut MapMakerApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(false)
        .exact_width(PANEL_WIDTH)
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                let active = app.map().active_tool();

                for tool in Tool::ALL {
                    if tool == Tool::Room {
                        room_menu(app, ui, active == Tool::Room);
                        continue;
                    }

                    let response = ui
                        .selectable_label(active == tool, icon(tool))
                        .on_hover_text(tool.name());
                    if response.clicked() {
                        log::info!("Tool selected from UI: {}", tool);
                        app.select_tool(tool);
                    }
                }
            });
        });
}

fn room_menu(app: &mut MapMakerApp, ui: &mut egui::Ui, selected: bool) {
    let title = egui::RichText::new(icon(Tool::Room));
    let title = if selected { title.strong() } else { title };

    ui.menu_button(title, |ui| {
        for (sides, label) in ROOM_OPTIONS {
            if ui.button(label).clicked() {
                log::info!("Room selected from UI: {}", label);
                app.select_room(sides);
                ui.close_menu();
            }
        }
        ui.separator();
        if ui.button("Custom...").clicked() {
            app.ask_custom_sides();
            ui.close_menu();
        }
    })
    .response
    .on_hover_text(Tool::Room.name());
}
