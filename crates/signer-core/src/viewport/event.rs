use super::controller::ViewportController;
use super::state::Axis;
use crate::coords::{CoordinateSink, ImagePoint};
use crate::error::Result;

/// Toolkit-neutral input event, in viewport coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ViewportEvent {
    Scroll { axis: Axis, units: i32 },
    Zoom { x: f64, y: f64, factor: f64 },
    PanStart { x: f64, y: f64 },
    PanMove { x: f64, y: f64 },
    Click { x: f64, y: f64 },
}

/// Result of applying one [`ViewportEvent`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventOutcome {
    /// The state changed; the caller should render again.
    Redraw,
    /// Accepted, but nothing visible changed.
    Unchanged,
    /// A click resolved inside the image and was stored.
    Stored(ImagePoint),
    /// A click landed outside the image.
    Ignored,
}

impl ViewportController {
    /// Apply one event. Only the sink can fail.
    pub fn handle<S>(&mut self, event: ViewportEvent, sink: &mut S) -> Result<EventOutcome>
    where
        S: CoordinateSink + ?Sized,
    {
        let changed = match event {
            ViewportEvent::Scroll { axis, units } => self.scroll(axis, units),
            ViewportEvent::Zoom { x, y, factor } => self.zoom(x, y, factor),
            ViewportEvent::PanStart { x, y } => {
                self.pan_start(x, y);
                false
            }
            ViewportEvent::PanMove { x, y } => self.pan_move(x, y),
            ViewportEvent::Click { x, y } => {
                return Ok(match self.click(x, y, sink)? {
                    Some(point) => EventOutcome::Stored(point),
                    None => EventOutcome::Ignored,
                });
            }
        };
        Ok(if changed {
            EventOutcome::Redraw
        } else {
            EventOutcome::Unchanged
        })
    }
}
