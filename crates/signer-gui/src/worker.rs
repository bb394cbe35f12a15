use std::sync::mpsc;
use std::time::Instant;

use signer_core::config::LabelConfig;
use signer_core::label::label_certificates;

use crate::messages::{AppMessage, PickTarget};

/// Run a labeling batch on a background thread, reporting over `tx`.
pub fn spawn_label(config: LabelConfig, tx: mpsc::Sender<AppMessage>, ctx: egui::Context) {
    std::thread::spawn(move || {
        let start = Instant::now();
        let progress_tx = tx.clone();
        let progress_ctx = ctx.clone();

        let result = label_certificates(&config, |done, total| {
            let _ = progress_tx.send(AppMessage::LabelProgress { done, total });
            progress_ctx.request_repaint();
        });

        let msg = match result {
            Ok(written) => AppMessage::LabelComplete {
                count: written.len(),
                elapsed: start.elapsed(),
            },
            Err(e) => AppMessage::Error {
                message: format!("Labeling failed: {e}"),
            },
        };
        let _ = tx.send(msg);
        ctx.request_repaint();
    });
}

/// Open a file dialog on a background thread and report the selection.
pub fn spawn_picker(target: PickTarget, tx: mpsc::Sender<AppMessage>, ctx: egui::Context) {
    std::thread::spawn(move || {
        let dialog = rfd::FileDialog::new();
        let picked = match target {
            PickTarget::Template => dialog
                .add_filter("Images", &["png", "jpg", "jpeg", "tif", "tiff", "bmp", "webp"])
                .add_filter("All files", &["*"])
                .pick_file(),
            PickTarget::Names => dialog
                .add_filter("Name lists", &["csv", "txt", "tsv"])
                .add_filter("All files", &["*"])
                .pick_file(),
            PickTarget::Font => dialog
                .add_filter("Fonts", &["ttf", "otf"])
                .add_filter("All files", &["*"])
                .pick_file(),
            PickTarget::OutputDir => dialog.pick_folder(),
        };
        if let Some(path) = picked {
            let _ = tx.send(AppMessage::Picked { target, path });
            ctx.request_repaint();
        }
    });
}
