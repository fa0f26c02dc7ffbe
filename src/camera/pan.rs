use crate::camera::{Camera, Space};
use crate::event::PointerEvent;
use crate::math::Point;
use crate::surface::DrawSurface;

/// Pan controller state. `Panning` carries the logical-space anchor recorded
/// at press time; every subsequent move translates relative to it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PanState {
    Idle,
    Panning { anchor: Point },
}

impl<S: DrawSurface> Camera<S> {
    pub fn is_panning(&self) -> bool {
        matches!(self.pan, PanState::Panning { .. })
    }

    /// Starts a pan, anchoring it at `point`.
    ///
    /// The anchor is stored in logical coordinates; pass
    /// [`Space::Logical`] when the point is already transformed.
    pub fn begin_pan(&mut self, point: Point, space: Space) {
        let anchor = self.resolve_logical(point, space);
        log::trace!("pan begins at {anchor:?}");
        self.pan = PanState::Panning { anchor };
    }

    /// Continues a pan: records `point` as the current pan position and,
    /// while panning, translates the matrix by the delta from the anchor.
    ///
    /// The anchor is deliberately never re-established here, so each move is
    /// measured from the original press point rather than the previous
    /// position. When idle this still updates the pan position (the default
    /// zoom pivot) but leaves the matrix alone.
    pub fn move_pan(&mut self, point: Point, space: Space) {
        self.pan_position = self.resolve_logical(point, space);
        if let PanState::Panning { anchor } = self.pan {
            let delta = self.pan_position - anchor;
            self.translate(delta.x, delta.y);
        }
    }

    /// Ends a pan by clearing the anchor. The pan position is kept.
    pub fn end_pan(&mut self) {
        log::trace!("pan ends");
        self.pan = PanState::Idle;
    }

    /// [`begin_pan`](Camera::begin_pan) bound to a pointer event.
    pub fn begin_pointer_pan(&mut self, event: &PointerEvent) {
        let point = self.device_to_surface(event);
        self.begin_pan(point, Space::Surface);
    }

    /// [`move_pan`](Camera::move_pan) bound to a pointer event.
    pub fn move_pointer_pan(&mut self, event: &PointerEvent) {
        let point = self.device_to_surface(event);
        self.move_pan(point, Space::Surface);
    }

    /// [`end_pan`](Camera::end_pan) bound to a pointer event.
    pub fn end_pointer_pan(&mut self, _event: &PointerEvent) {
        self.end_pan();
    }

    pub(crate) fn resolve_logical(&self, point: Point, space: Space) -> Point {
        match space {
            Space::Surface => self.surface_to_logical(point),
            Space::Logical => point,
        }
    }
}
