use std::path::PathBuf;
use std::time::Duration;

/// Form field a file dialog result belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PickTarget {
    Template,
    Names,
    Font,
    OutputDir,
}

/// Results sent from background threads back to the UI thread.
pub enum AppMessage {
    /// A file dialog closed with a selection.
    Picked { target: PickTarget, path: PathBuf },

    LabelProgress { done: usize, total: usize },

    LabelComplete { count: usize, elapsed: Duration },

    Error { message: String },
}
