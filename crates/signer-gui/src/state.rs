use signer_core::config::LabelConfig;
use signer_core::coords::ImagePoint;

/// Overall UI state outside the viewer session.
#[derive(Default)]
pub struct UiState {
    /// Log messages.
    pub log_messages: Vec<String>,

    /// Pointer position over the viewport, in viewport pixels.
    pub hover: Option<(f64, f64)>,
    /// Image pixel under the pointer.
    pub hover_point: Option<ImagePoint>,
    /// Most recently stored coordinate.
    pub last_stored: Option<ImagePoint>,

    pub label: LabelForm,
}

impl UiState {
    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }
}

/// Labeling form: the batch settings plus progress of a running batch.
#[derive(Default)]
pub struct LabelForm {
    pub config: LabelConfig,
    pub running: bool,
    pub progress_done: usize,
    pub progress_total: usize,
}

impl LabelForm {
    pub fn new(config: LabelConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }
}
