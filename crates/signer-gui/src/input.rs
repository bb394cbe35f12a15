use signer_core::viewport::{Axis, ViewportEvent};

/// Turns fractional wheel deltas into whole scroll units, carrying the
/// remainder between frames.
#[derive(Clone, Copy, Debug, Default)]
pub struct WheelAccumulator {
    x: f64,
    y: f64,
}

impl WheelAccumulator {
    /// Add a wheel delta in points and return whole units per axis. Positive
    /// egui deltas move content down/right, so they scroll toward the origin.
    pub fn push(&mut self, delta: egui::Vec2, unit_px: f64) -> (i32, i32) {
        self.x -= f64::from(delta.x) / unit_px;
        self.y -= f64::from(delta.y) / unit_px;
        let ux = self.x.trunc();
        let uy = self.y.trunc();
        self.x -= ux;
        self.y -= uy;
        (ux as i32, uy as i32)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Translate this frame's wheel input over the viewport into events.
///
/// Ctrl/Cmd+wheel zooms one step per frame at the pointer, pinch gestures
/// zoom by their own factor, shift+wheel scrolls horizontally and a plain
/// wheel scrolls vertically.
pub fn wheel_events(
    ui: &egui::Ui,
    pointer: egui::Vec2,
    wheel: &mut WheelAccumulator,
    unit_px: f64,
    zoom_step: f64,
) -> Vec<ViewportEvent> {
    let (raw, modifiers, pinch) = ui.input(|i| (i.raw_scroll_delta, i.modifiers, i.zoom_delta()));
    let (x, y) = (f64::from(pointer.x), f64::from(pointer.y));

    if modifiers.command || modifiers.ctrl {
        let notch = if raw.y != 0.0 { raw.y } else { pinch - 1.0 };
        if notch == 0.0 {
            return Vec::new();
        }
        let factor = if notch > 0.0 { zoom_step } else { zoom_step.recip() };
        return vec![ViewportEvent::Zoom { x, y, factor }];
    }

    if pinch != 1.0 {
        return vec![ViewportEvent::Zoom {
            x,
            y,
            factor: f64::from(pinch),
        }];
    }

    if raw == egui::Vec2::ZERO {
        return Vec::new();
    }

    // Some platforms deliver shift+wheel as a vertical delta.
    let delta = if modifiers.shift && raw.x == 0.0 {
        egui::vec2(raw.y, 0.0)
    } else {
        raw
    };

    let (ux, uy) = wheel.push(delta, unit_px);
    let mut events = Vec::with_capacity(2);
    if ux != 0 {
        events.push(ViewportEvent::Scroll {
            axis: Axis::Horizontal,
            units: ux,
        });
    }
    if uy != 0 {
        events.push(ViewportEvent::Scroll {
            axis: Axis::Vertical,
            units: uy,
        });
    }
    events
}

/// Button state of the viewport response for one frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerGesture {
    /// Pointer position relative to the viewport's top-left corner.
    pub pos: egui::Vec2,
    /// Middle button drag began this frame.
    pub pan_started: bool,
    /// Middle button is held.
    pub panning: bool,
    /// Primary button released without dragging.
    pub clicked: bool,
}

/// Translate button gestures into events. Every primary click is a
/// coordinate click.
pub fn pointer_events(gesture: PointerGesture) -> Vec<ViewportEvent> {
    let (x, y) = (f64::from(gesture.pos.x), f64::from(gesture.pos.y));
    let mut events = Vec::new();
    if gesture.pan_started {
        events.push(ViewportEvent::PanStart { x, y });
    } else if gesture.panning {
        events.push(ViewportEvent::PanMove { x, y });
    }
    if gesture.clicked {
        events.push(ViewportEvent::Click { x, y });
    }
    events
}
