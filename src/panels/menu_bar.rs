use crate::MapMakerApp;

pub fn menu_bar(app: &mut MapMakerApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("New").clicked() {
                    app.clear_map();
                    ui.close_menu();
                }
                if ui.button("Open").clicked() {
                    ui.close_menu();
                    app.load_map();
                }
                if ui.button("Save").clicked() {
                    ui.close_menu();
                    app.save_map();
                }
                if ui.button("Clear").clicked() {
                    app.clear_map();
                    ui.close_menu();
                }
                ui.separator();
                if ui.button("Exit").clicked() {
                    ui.close_menu();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("Credit").clicked() {
                    app.display_credit();
                    ui.close_menu();
                }
                if ui.button("Info").clicked() {
                    app.display_info();
                    ui.close_menu();
                }
                ui.separator();
                if ui.button("Help").clicked() {
                    app.display_help();
                    ui.close_menu();
                }
            });
        });
    });
}
