use crate::app::SignerApp;
use crate::messages::PickTarget;

pub fn show(ctx: &egui::Context, app: &mut SignerApp) {
    let open_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O);
    let quit_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui
                    .add(
                        egui::Button::new("Open Template...")
                            .shortcut_text(ctx.format_shortcut(&open_shortcut)),
                    )
                    .clicked()
                {
                    ui.close();
                    app.pick_file(ctx, PickTarget::Template);
                }

                ui.separator();

                if ui
                    .add(egui::Button::new("Quit").shortcut_text(ctx.format_shortcut(&quit_shortcut)))
                    .clicked()
                {
                    ui.close();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("View", |ui| {
                let has_session = app.session.is_some();
                if ui
                    .add_enabled(has_session, egui::Button::new("Fit to Window"))
                    .clicked()
                {
                    ui.close();
                    if let Some(session) = app.session.as_mut() {
                        session.controller.fit_to_viewport();
                    }
                }
                if ui
                    .add_enabled(has_session, egui::Button::new("Actual Size"))
                    .clicked()
                {
                    ui.close();
                    if let Some(session) = app.session.as_mut() {
                        let scale = session.controller.scale();
                        session.controller.zoom(0.0, 0.0, scale.recip());
                    }
                }
            });
        });
    });

    // Keyboard shortcuts (consumed outside menus)
    if ctx.input_mut(|i| i.consume_shortcut(&open_shortcut)) {
        app.pick_file(ctx, PickTarget::Template);
    }
    if ctx.input_mut(|i| i.consume_shortcut(&quit_shortcut)) {
        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
    }
}
