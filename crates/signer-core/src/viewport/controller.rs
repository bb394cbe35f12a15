use tracing::debug;

use super::render::{scaled_size, RenderDirective};
use super::state::{Axis, ViewportState};
use crate::consts::{DEFAULT_SCROLL_UNIT_PX, MAX_SCALE, MIN_SCALE, SCALE_EPSILON};
use crate::coords::{CoordinateSink, ImagePoint};
use crate::error::Result;
use crate::template::TemplateImage;

/// Drag state of the controller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PanMode {
    Idle,
    /// A drag is in progress. `anchor` is the viewport point it is measured
    /// from, `origin` the scroll fractions at that moment and `last` the most
    /// recent pointer position.
    Panning {
        anchor: (f64, f64),
        origin: (f64, f64),
        last: (f64, f64),
    },
}

/// Owns the template and its [`ViewportState`] for one viewer session and
/// applies input events to them.
#[derive(Clone, Debug)]
pub struct ViewportController {
    image: TemplateImage,
    state: ViewportState,
    viewport_size: Option<(f64, f64)>,
    scroll_unit_px: f64,
    mode: PanMode,
}

impl ViewportController {
    /// Start a session at 1:1 scale, scrolled to the top-left corner.
    pub fn new(image: TemplateImage, show_grid: bool) -> Self {
        Self {
            image,
            state: ViewportState::new(show_grid),
            viewport_size: None,
            scroll_unit_px: DEFAULT_SCROLL_UNIT_PX,
            mode: PanMode::Idle,
        }
    }

    pub fn image(&self) -> &TemplateImage {
        &self.image
    }

    pub fn state(&self) -> &ViewportState {
        &self.state
    }

    pub fn scale(&self) -> f64 {
        self.state.scale
    }

    pub fn mode(&self) -> PanMode {
        self.mode
    }

    pub fn viewport_size(&self) -> Option<(f64, f64)> {
        self.viewport_size
    }

    /// Record the size of the visible area. Non-positive sizes clear it.
    ///
    /// With a known size the view cannot scroll past the far edge of the
    /// content; current fractions are re-clamped.
    pub fn set_viewport_size(&mut self, width: f64, height: f64) {
        let size = (width > 0.0 && height > 0.0).then_some((width, height));
        if size == self.viewport_size {
            return;
        }
        self.viewport_size = size;
        self.clamp_scroll();
        self.rebase_pan();
    }

    pub fn scroll_unit(&self) -> f64 {
        self.scroll_unit_px
    }

    /// Set the canvas distance of one scroll unit. Non-positive or non-finite
    /// values are ignored.
    pub fn set_scroll_unit(&mut self, px: f64) {
        if px.is_finite() && px > 0.0 {
            self.scroll_unit_px = px;
        }
    }

    /// Unrounded size of the scaled image in canvas pixels.
    pub fn content_size(&self) -> (f64, f64) {
        (
            self.image.width() as f64 * self.state.scale,
            self.image.height() as f64 * self.state.scale,
        )
    }

    /// Canvas position of the viewport's top-left corner.
    pub fn scroll_offset(&self) -> (f64, f64) {
        let (cw, ch) = self.content_size();
        (
            self.state.scroll_fraction_x * cw,
            self.state.scroll_fraction_y * ch,
        )
    }

    pub fn viewport_to_canvas(&self, vx: f64, vy: f64) -> (f64, f64) {
        let (ox, oy) = self.scroll_offset();
        (vx + ox, vy + oy)
    }

    pub fn canvas_to_viewport(&self, cx: f64, cy: f64) -> (f64, f64) {
        let (ox, oy) = self.scroll_offset();
        (cx - ox, cy - oy)
    }

    /// Largest scroll fraction allowed on `axis`.
    fn max_fraction(&self, axis: Axis) -> f64 {
        let Some((vw, vh)) = self.viewport_size else {
            return 1.0;
        };
        let (cw, ch) = self.content_size();
        let (visible, content) = match axis {
            Axis::Horizontal => (vw, cw),
            Axis::Vertical => (vh, ch),
        };
        (1.0 - visible / content).clamp(0.0, 1.0)
    }

    /// Store `value` as the scroll fraction of `axis`, clamped into range.
    /// Returns whether the stored fraction changed.
    fn set_fraction(&mut self, axis: Axis, value: f64) -> bool {
        let value = if value.is_nan() { 0.0 } else { value };
        let clamped = value.clamp(0.0, self.max_fraction(axis));
        let old = self.state.scroll_fraction(axis);
        self.state.set_scroll_fraction(axis, clamped);
        old != clamped
    }

    fn clamp_scroll(&mut self) {
        let fx = self.state.scroll_fraction_x;
        let fy = self.state.scroll_fraction_y;
        self.set_fraction(Axis::Horizontal, fx);
        self.set_fraction(Axis::Vertical, fy);
    }

    /// Re-anchor a drag in progress at the current view so the next move
    /// continues from it.
    fn rebase_pan(&mut self) {
        if let PanMode::Panning { last, .. } = self.mode {
            self.mode = PanMode::Panning {
                anchor: last,
                origin: (self.state.scroll_fraction_x, self.state.scroll_fraction_y),
                last,
            };
        }
    }

    fn content_extent(&self, axis: Axis) -> f64 {
        let (cw, ch) = self.content_size();
        match axis {
            Axis::Horizontal => cw,
            Axis::Vertical => ch,
        }
    }

    /// Scroll by `delta_units` scroll units. Positive moves toward the
    /// right/bottom of the image. Returns whether the view moved.
    pub fn scroll(&mut self, axis: Axis, delta_units: i32) -> bool {
        let px = f64::from(delta_units) * self.scroll_unit_px;
        let fraction = self.state.scroll_fraction(axis) + px / self.content_extent(axis);
        let changed = self.set_fraction(axis, fraction);
        if changed {
            self.rebase_pan();
            debug!(?axis, delta_units, fraction = self.state.scroll_fraction(axis), "scroll");
        }
        changed
    }

    /// Zoom by `factor` keeping the image point under the viewport anchor in
    /// place. Returns `false` without touching the state when the clamped
    /// scale does not change.
    pub fn zoom(&mut self, anchor_x: f64, anchor_y: f64, factor: f64) -> bool {
        if !factor.is_finite() || factor <= 0.0 {
            return false;
        }
        let old_scale = self.state.scale;
        let new_scale = (old_scale * factor).clamp(MIN_SCALE, MAX_SCALE);
        if (new_scale - old_scale).abs() < SCALE_EPSILON {
            return false;
        }

        // Position of the anchor as a fraction of the scaled content.
        let (cx, cy) = self.viewport_to_canvas(anchor_x, anchor_y);
        let (cw, ch) = self.content_size();
        let rx = cx / cw;
        let ry = cy / ch;

        self.state.scale = new_scale;

        // Scroll so that the same fraction lands under the anchor again.
        let (cw, ch) = self.content_size();
        self.set_fraction(Axis::Horizontal, rx - anchor_x / cw);
        self.set_fraction(Axis::Vertical, ry - anchor_y / ch);
        self.rebase_pan();

        debug!(
            old_scale,
            new_scale,
            anchor_x,
            anchor_y,
            fx = self.state.scroll_fraction_x,
            fy = self.state.scroll_fraction_y,
            "zoom"
        );
        true
    }

    /// Scale that fits the whole image into a `width`x`height` box.
    pub fn fit_scale(&self, width: f64, height: f64) -> f64 {
        let sx = width / self.image.width() as f64;
        let sy = height / self.image.height() as f64;
        let fit = sx.min(sy);
        if fit.is_finite() && fit > 0.0 {
            fit.clamp(MIN_SCALE, MAX_SCALE)
        } else {
            self.state.scale
        }
    }

    /// Fit the image into the known viewport and scroll back to the origin.
    pub fn fit_to_viewport(&mut self) -> bool {
        let Some((vw, vh)) = self.viewport_size else {
            return false;
        };
        let scale = self.fit_scale(vw, vh);
        let changed = (scale - self.state.scale).abs() >= SCALE_EPSILON
            || self.state.scroll_fraction_x != 0.0
            || self.state.scroll_fraction_y != 0.0;
        self.state.scale = scale;
        self.state.scroll_fraction_x = 0.0;
        self.state.scroll_fraction_y = 0.0;
        self.rebase_pan();
        changed
    }

    /// Begin a drag at a viewport position.
    pub fn pan_start(&mut self, vx: f64, vy: f64) {
        self.mode = PanMode::Panning {
            anchor: (vx, vy),
            origin: (self.state.scroll_fraction_x, self.state.scroll_fraction_y),
            last: (vx, vy),
        };
        debug!(vx, vy, "pan start");
    }

    /// Continue a drag: the content follows the pointer. Ignored unless a
    /// drag was started. Returns whether the view moved.
    pub fn pan_move(&mut self, vx: f64, vy: f64) -> bool {
        let PanMode::Panning { anchor, origin, .. } = self.mode else {
            return false;
        };
        self.mode = PanMode::Panning {
            anchor,
            origin,
            last: (vx, vy),
        };
        let (cw, ch) = self.content_size();
        let moved_x = self.set_fraction(Axis::Horizontal, origin.0 - (vx - anchor.0) / cw);
        let moved_y = self.set_fraction(Axis::Vertical, origin.1 - (vy - anchor.1) / ch);
        moved_x || moved_y
    }

    /// Leave panning mode. Toolkits that report button release may call this;
    /// a later `pan_start` replaces any drag in progress anyway.
    pub fn pan_end(&mut self) {
        self.mode = PanMode::Idle;
    }

    /// Image pixel under a viewport position, or `None` when the position is
    /// outside the rendered image.
    ///
    /// The rendered size is rounded, so its last row and column may reach
    /// past `width * scale`; those pixels resolve to the image's last pixel.
    pub fn image_point_at(&self, vx: f64, vy: f64) -> Option<ImagePoint> {
        let (cx, cy) = self.viewport_to_canvas(vx, vy);
        if !(cx >= 0.0 && cy >= 0.0) {
            return None;
        }
        let (w, h) = (self.image.width(), self.image.height());
        let (sw, sh) = scaled_size(w, h, self.state.scale);
        if cx >= f64::from(sw) || cy >= f64::from(sh) {
            return None;
        }
        let ix = ((cx / self.state.scale).floor() as u32).min(w - 1);
        let iy = ((cy / self.state.scale).floor() as u32).min(h - 1);
        Some(ImagePoint::new(ix, iy))
    }

    /// Resolve a click to image coordinates. Clicks on the background around
    /// the image yield `None`.
    pub fn resolve_click(&self, vx: f64, vy: f64) -> Option<ImagePoint> {
        let point = self.image_point_at(vx, vy);
        if point.is_none() {
            debug!(vx, vy, "click outside image ignored");
        }
        point
    }

    /// Resolve a click and hand the result to `sink`. Nothing is stored when
    /// the click misses the image.
    pub fn click<S>(&self, vx: f64, vy: f64, sink: &mut S) -> Result<Option<ImagePoint>>
    where
        S: CoordinateSink + ?Sized,
    {
        let Some(point) = self.resolve_click(vx, vy) else {
            return Ok(None);
        };
        sink.store(point)?;
        Ok(Some(point))
    }

    /// Describe what the display must draw for the current state.
    pub fn render(&self) -> RenderDirective {
        RenderDirective::build(
            self.image.width(),
            self.image.height(),
            self.state.scale,
            self.scroll_offset(),
            self.state.show_grid(),
            self.viewport_size,
        )
    }
}
