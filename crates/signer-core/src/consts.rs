/// Smallest zoom scale the viewer allows.
pub const MIN_SCALE: f64 = 0.1;

/// Largest zoom scale the viewer allows.
pub const MAX_SCALE: f64 = 8.0;

/// Scale changes smaller than this are treated as no change.
pub const SCALE_EPSILON: f64 = 1e-6;

/// Zoom factor applied by one wheel notch.
pub const DEFAULT_ZOOM_STEP: f64 = 1.1;

/// Canvas pixels moved per scroll unit.
pub const DEFAULT_SCROLL_UNIT_PX: f64 = 20.0;

/// Fractions of the scaled content at which calibration grid lines are drawn.
pub const GRID_FRACTIONS: [f64; 3] = [0.25, 0.5, 0.75];

/// Calibration grid colour (RGBA).
pub const GRID_COLOUR: [u8; 4] = [255, 0, 0, 255];

/// Default file holding the last clicked signature position.
pub const DEFAULT_COORDS_FILE: &str = "name_coords.txt";

/// Upper bound on the initial viewer window size, in pixels.
pub const DEFAULT_MAX_WINDOW: [u32; 2] = [1200, 900];

/// Default point size of stamped names.
pub const DEFAULT_FONT_SIZE: f32 = 50.0;

/// Default colour of stamped names.
pub const DEFAULT_FONT_COLOUR: &str = "#000000";

/// Default font used for stamping.
pub const DEFAULT_FONT_PATH: &str = "fonts/arial.ttf";

/// Default directory for labeled certificates.
pub const DEFAULT_OUTPUT_DIR: &str = "output_dir";
