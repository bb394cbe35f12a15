use crate::app::SignerApp;

pub fn show(ctx: &egui::Context, app: &mut SignerApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        // Log area, fixed height for 4 lines.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 4.0 + spacing * 3.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    for _ in 0..4 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        ui.horizontal(|ui| {
            let Some(session) = app.session.as_ref() else {
                ui.label("No template");
                return;
            };
            let image = session.controller.image();
            ui.label(format!("{}x{}", image.width(), image.height()));
            ui.separator();

            match app.ui_state.hover {
                Some((x, y)) => ui.label(format!("View: {x:.0}, {y:.0}")),
                None => ui.label("View: -"),
            };
            ui.separator();

            match app.ui_state.hover_point {
                Some(p) => ui.label(format!("Image: {}, {}", p.x, p.y)),
                None => ui.label("Image: -"),
            };
            ui.separator();

            let state = session.controller.state();
            let zoom = format!("Zoom: {:.0}%", state.scale() * 100.0);
            if state.at_scale_limit() {
                ui.label(egui::RichText::new(format!("{zoom} (limit)")).weak());
            } else {
                ui.label(zoom);
            }
            ui.separator();

            match app.ui_state.last_stored {
                Some(p) => ui.strong(format!("Stored: {p}")),
                None => ui.label("Click the template to store a coordinate"),
            };
        });

        ui.add_space(2.0);
    });
}
