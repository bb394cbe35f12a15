use std::path::Path;

use signer_core::label::{parse_hex_colour, OutputFormat};

use super::section_header;
use crate::app::SignerApp;
use crate::messages::PickTarget;

const PANEL_WIDTH: f32 = 260.0;

pub fn show(ctx: &egui::Context, app: &mut SignerApp) {
    egui::SidePanel::right("controls")
        .resizable(false)
        .exact_width(PANEL_WIDTH)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                template_section(ui, ctx, app);
                ui.separator();
                label_section(ui, ctx, app);
            });
        });
}

fn template_section(ui: &mut egui::Ui, ctx: &egui::Context, app: &mut SignerApp) {
    let status = app.ui_state.last_stored.map(|p| p.to_string());
    section_header(ui, "Template", status.as_deref());
    ui.add_space(4.0);

    match app.session.as_ref() {
        Some(session) => {
            path_label(ui, &session.path);
            ui.small(format!("Coordinates: {}", session.sink.path().display()));
        }
        None => {
            ui.label("No template loaded");
        }
    }
    if ui.button("Open Template...").clicked() {
        app.pick_file(ctx, PickTarget::Template);
    }
    ui.add_space(4.0);
    ui.small("Wheel scrolls, Shift+wheel scrolls sideways, Ctrl+wheel zooms.");
    ui.small("Middle-drag pans. Click stores the position. View > Fit to Window fits.");
}

fn label_section(ui: &mut egui::Ui, ctx: &egui::Context, app: &mut SignerApp) {
    let progress = {
        let form = &app.ui_state.label;
        form.running
            .then(|| format!("{}/{}", form.progress_done, form.progress_total))
    };
    section_header(ui, "Label Certificates", progress.as_deref());
    ui.add_space(4.0);

    let form = &mut app.ui_state.label;
    let mut pick = None;

    ui.label("Names");
    ui.horizontal(|ui| {
        if ui.small_button("...").clicked() {
            pick = Some(PickTarget::Names);
        }
        path_label(ui, &form.config.names);
    });

    ui.label("Font");
    ui.horizontal(|ui| {
        if ui.small_button("...").clicked() {
            pick = Some(PickTarget::Font);
        }
        path_label(ui, &form.config.font_path);
    });

    ui.label("Output folder");
    ui.horizontal(|ui| {
        if ui.small_button("...").clicked() {
            pick = Some(PickTarget::OutputDir);
        }
        path_label(ui, &form.config.output_dir);
    });

    ui.add_space(4.0);
    ui.horizontal(|ui| {
        ui.label("Size");
        ui.add(egui::DragValue::new(&mut form.config.font_size).range(1.0..=500.0).speed(0.5));
    });

    ui.horizontal(|ui| {
        ui.label("Colour");
        ui.add(egui::TextEdit::singleline(&mut form.config.font_colour).desired_width(80.0));
        if let Ok(rgb) = parse_hex_colour(&form.config.font_colour) {
            let [r, g, b] = rgb.0;
            let (swatch, _) = ui.allocate_exact_size(egui::vec2(16.0, 16.0), egui::Sense::hover());
            ui.painter()
                .rect_filled(swatch, 2.0, egui::Color32::from_rgb(r, g, b));
        }
    });
    let colour_ok = parse_hex_colour(&form.config.font_colour).is_ok();
    if !colour_ok {
        ui.colored_label(egui::Color32::LIGHT_RED, "Expected #rrggbb");
    }

    ui.horizontal(|ui| {
        ui.label("Format");
        egui::ComboBox::from_id_salt("output_format")
            .selected_text(form.config.output_format.to_string())
            .show_ui(ui, |ui| {
                for format in OutputFormat::ALL {
                    ui.selectable_value(
                        &mut form.config.output_format,
                        format,
                        format.to_string(),
                    );
                }
            });
    });

    ui.add_space(4.0);
    ui.small(format!("Template: {}", form.config.template.display()));
    ui.small(format!("Coordinates: {}", form.config.coords_path.display()));
    ui.add_space(4.0);

    if form.running {
        let fraction = if form.progress_total > 0 {
            form.progress_done as f32 / form.progress_total as f32
        } else {
            0.0
        };
        ui.add(egui::ProgressBar::new(fraction).show_percentage().animate(true));
    }

    let enabled = !form.running && colour_ok;
    let label_clicked = ui
        .add_enabled(enabled, egui::Button::new("Label"))
        .clicked();

    if let Some(target) = pick {
        app.pick_file(ctx, target);
    }
    if label_clicked {
        app.start_labeling(ctx);
    }
}

fn path_label(ui: &mut egui::Ui, path: &Path) {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    ui.label(name).on_hover_text(path.display().to_string());
}
