use crate::consts::{MAX_SCALE, MIN_SCALE};

/// Scroll direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Zoom and scroll position of one viewer session.
///
/// Invariants: `MIN_SCALE <= scale <= MAX_SCALE` and both scroll fractions
/// lie in `[0, 1]`. Only the owning controller mutates it.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewportState {
    pub(super) scale: f64,
    pub(super) scroll_fraction_x: f64,
    pub(super) scroll_fraction_y: f64,
    show_grid: bool,
}

impl ViewportState {
    pub(super) fn new(show_grid: bool) -> Self {
        Self {
            scale: 1.0,
            scroll_fraction_x: 0.0,
            scroll_fraction_y: 0.0,
            show_grid,
        }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Fraction of the scaled content scrolled past the viewport's left edge.
    pub fn scroll_fraction_x(&self) -> f64 {
        self.scroll_fraction_x
    }

    /// Fraction of the scaled content scrolled past the viewport's top edge.
    pub fn scroll_fraction_y(&self) -> f64 {
        self.scroll_fraction_y
    }

    pub fn scroll_fraction(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.scroll_fraction_x,
            Axis::Vertical => self.scroll_fraction_y,
        }
    }

    pub(super) fn set_scroll_fraction(&mut self, axis: Axis, value: f64) {
        match axis {
            Axis::Horizontal => self.scroll_fraction_x = value,
            Axis::Vertical => self.scroll_fraction_y = value,
        }
    }

    pub fn show_grid(&self) -> bool {
        self.show_grid
    }

    /// True when the zoom has reached either bound.
    pub fn at_scale_limit(&self) -> bool {
        self.scale <= MIN_SCALE || self.scale >= MAX_SCALE
    }
}
