//! Interactive viewport transform engine.
//!
//! Three coordinate frames are involved:
//! - viewport space: pixels relative to the visible display area,
//! - canvas space: viewport coordinates plus the current scroll offset,
//!   spanning the whole scaled image,
//! - image space: pixels of the original, unscaled template.
//!
//! [`ViewportController`] owns the zoom scale and scroll position for one
//! viewer session and converts between these frames.

mod controller;
mod event;
mod render;
mod state;

pub use controller::{PanMode, ViewportController};
pub use event::{EventOutcome, ViewportEvent};
pub use render::{rasterize, CanvasRect, GridLine, GridOrientation, RenderDirective};
pub use state::{Axis, ViewportState};
