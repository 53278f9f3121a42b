use crate::MapMakerApp;

/// Modal windows: resource text and the custom side count prompt
pub fn dialogs(app: &mut MapMakerApp, ctx: &egui::Context) {
    if let Some(dialog) = &app.message {
        let mut open = true;
        let mut dismissed = false;
        egui::Window::new(dialog.title.as_str())
            .collapsible(false)
            .resizable(false)
            .open(&mut open)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .max_height(400.0)
                    .show(ui, |ui| ui.label(dialog.message.as_str()));
                ui.separator();
                dismissed = ui.button("OK").clicked();
            });
        if !open || dismissed {
            app.message = None;
        }
    }

    let mut accepted = None;
    if let Some(dialog) = &mut app.input_dialog {
        let mut open = true;
        let mut cancelled = false;
        egui::Window::new(dialog.title.clone())
            .collapsible(false)
            .resizable(false)
            .open(&mut open)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(dialog.prompt.as_str());
                    let previous = dialog.text.clone();
                    if ui.text_edit_singleline(&mut dialog.text).changed() {
                        dialog.filter_edit(&previous);
                    }
                });
                ui.horizontal(|ui| {
                    let value = dialog.value().map(str::to_owned);
                    if ui
                        .add_enabled(value.is_some(), egui::Button::new("OK"))
                        .clicked()
                    {
                        accepted = value;
                    }
                    cancelled = ui.button("Cancel").clicked();
                });
            });
        if !open || cancelled {
            app.input_dialog = None;
        }
    }

    if let Some(value) = accepted {
        app.input_dialog = None;
        app.accept_custom_sides(&value);
    }
}
