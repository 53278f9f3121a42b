use crate::MapMakerApp;

pub fn status_bar(app: &mut MapMakerApp, ctx: &egui::Context) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(app.tool_label());
            ui.separator();
            ui.label(app.option_label());
            if !app.status().is_empty() {
                ui.separator();
                ui.label(app.status());
            }
        });
    });
}
