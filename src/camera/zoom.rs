use crate::camera::{Camera, Space};
use crate::event::WheelEvent;
use crate::math::Point;
use crate::surface::DrawSurface;

/// Scale multiplier applied per zoom step when the caller has no opinion.
pub const DEFAULT_ZOOM_BASE: f64 = 1.1;

impl<S: DrawSurface> Camera<S> {
    /// Zooms by a signed number of discrete steps around a pivot.
    ///
    /// The pivot defaults to the current pan position; a given pivot is
    /// transformed to logical coordinates unless marked [`Space::Logical`].
    /// Each step multiplies the scale by `base`, so equal and opposite step
    /// counts cancel. The translate/scale/translate sequence runs through
    /// the live matrix and therefore composes with any existing pan or
    /// rotation. Returns the updated zoom accumulator.
    pub fn zoom_by(
        &mut self,
        amount: i32,
        base: f64,
        pivot: Option<Point>,
        pivot_space: Space,
    ) -> i32 {
        let pivot = match pivot {
            Some(point) => self.resolve_logical(point, pivot_space),
            None => self.pan_position(),
        };

        self.zoom += amount;
        self.translate(pivot.x, pivot.y);
        let factor = base.powi(amount);
        self.scale(factor, factor);
        self.translate(-pivot.x, -pivot.y);

        log::trace!(
            "zoomed {amount:+} steps around {pivot:?}, level now {}",
            self.zoom()
        );
        self.zoom()
    }

    /// Zooms one step from a wheel event, pivoting at the event's device
    /// position. Scrolling up (negative delta) zooms in; a zero delta is a
    /// zero step and leaves everything unchanged.
    pub fn zoom_by_wheel(&mut self, event: &WheelEvent, base: f64) -> i32 {
        let amount = if event.delta_y < 0.0 {
            1
        } else if event.delta_y > 0.0 {
            -1
        } else {
            0
        };
        let pivot = self.device_to_surface(&event.position);
        self.zoom_by(amount, base, Some(pivot), Space::Surface)
    }
}
