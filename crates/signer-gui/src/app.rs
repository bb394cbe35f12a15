use std::path::{Path, PathBuf};
use std::sync::mpsc;

use signer_core::config::SignerConfig;

use crate::messages::{AppMessage, PickTarget};
use crate::panels;
use crate::session::ViewerSession;
use crate::state::{LabelForm, UiState};
use crate::worker;

pub struct SignerApp {
    pub msg_tx: mpsc::Sender<AppMessage>,
    pub msg_rx: mpsc::Receiver<AppMessage>,
    pub config: SignerConfig,
    pub session: Option<ViewerSession>,
    pub ui_state: UiState,
}

impl SignerApp {
    pub fn new(ctx: &egui::Context, config: SignerConfig, image: Option<PathBuf>) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();
        let mut app = Self {
            msg_tx,
            msg_rx,
            ui_state: UiState {
                label: LabelForm::new(config.label.clone()),
                ..Default::default()
            },
            config,
            session: None,
        };
        if let Some(path) = image {
            app.open_template(ctx, &path);
        }
        app
    }

    pub fn open_template(&mut self, ctx: &egui::Context, path: &Path) {
        match ViewerSession::open(ctx, path, &self.config.viewer) {
            Ok(session) => {
                let image = session.controller.image();
                self.ui_state.add_log(format!(
                    "Opened: {} ({}x{})",
                    path.display(),
                    image.width(),
                    image.height()
                ));
                self.ui_state.add_log(format!(
                    "Clicks are saved to {}",
                    session.sink.path().display()
                ));
                self.ui_state.label.config.template = path.to_path_buf();
                self.ui_state.hover = None;
                self.ui_state.hover_point = None;
                self.ui_state.last_stored = None;
                self.session = Some(session);
            }
            Err(e) => {
                tracing::error!(path = %path.display(), "failed to open template: {e:#}");
                self.ui_state.add_log(format!("ERROR: {e:#}"));
            }
        }
    }

    pub fn pick_file(&self, ctx: &egui::Context, target: PickTarget) {
        worker::spawn_picker(target, self.msg_tx.clone(), ctx.clone());
    }

    pub fn start_labeling(&mut self, ctx: &egui::Context) {
        let form = &mut self.ui_state.label;
        if form.running {
            return;
        }
        form.running = true;
        form.progress_done = 0;
        form.progress_total = 0;
        let config = form.config.clone();
        self.ui_state
            .add_log(format!("Labeling into {}", config.output_dir.display()));
        worker::spawn_label(config, self.msg_tx.clone(), ctx.clone());
    }

    /// Drain all pending messages from background threads.
    fn poll_messages(&mut self, ctx: &egui::Context) {
        while let Ok(msg) = self.msg_rx.try_recv() {
            match msg {
                AppMessage::Picked { target, path } => match target {
                    PickTarget::Template => self.open_template(ctx, &path),
                    PickTarget::Names => self.ui_state.label.config.names = path,
                    PickTarget::Font => self.ui_state.label.config.font_path = path,
                    PickTarget::OutputDir => self.ui_state.label.config.output_dir = path,
                },
                AppMessage::LabelProgress { done, total } => {
                    // Progress can arrive out of order from parallel workers.
                    let form = &mut self.ui_state.label;
                    form.progress_done = form.progress_done.max(done);
                    form.progress_total = total;
                }
                AppMessage::LabelComplete { count, elapsed } => {
                    self.ui_state.label.running = false;
                    self.ui_state.add_log(format!(
                        "{count} certificates written in {}",
                        format_duration(elapsed)
                    ));
                }
                AppMessage::Error { message } => {
                    self.ui_state.label.running = false;
                    self.ui_state.add_log(format!("ERROR: {message}"));
                }
            }
        }
    }
}

impl eframe::App for SignerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_messages(ctx);

        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::controls::show(ctx, self);
        panels::viewport::show(ctx, self);
    }
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs_f32();
    if secs < 1.0 {
        format!("{:.0}ms", d.as_millis())
    } else if secs < 60.0 {
        format!("{secs:.1}s")
    } else {
        let mins = secs / 60.0;
        format!("{mins:.1}min")
    }
}
