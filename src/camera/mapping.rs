use crate::camera::Camera;
use crate::error::InvalidTransform;
use crate::event::PointerEvent;
use crate::math::{Affine, Point};
use crate::surface::DrawSurface;

impl<S: DrawSurface> Camera<S> {
    /// Maps a pointer event to surface pixel coordinates.
    ///
    /// Uses the event's surface-local offset when the host reports one;
    /// otherwise subtracts the surface's page offset from the event's page
    /// position.
    pub fn device_to_surface(&self, event: &PointerEvent) -> Point {
        match event.offset {
            Some(offset) => offset,
            None => Point::new(
                event.page.x - self.surface().offset_left(),
                event.page.y - self.surface().offset_top(),
            ),
        }
    }

    /// Maps a surface-space point to logical coordinates through the inverse
    /// of the current matrix.
    ///
    /// A singular matrix falls back to the identity inverse (with a warning)
    /// so no NaN ever escapes; use
    /// [`try_surface_to_logical`](Camera::try_surface_to_logical) to detect
    /// that case instead.
    pub fn surface_to_logical(&self, point: Point) -> Point {
        self.inverse_or_identity().transform_point(point)
    }

    /// Strict variant of [`surface_to_logical`](Camera::surface_to_logical):
    /// fails when the current matrix cannot be inverted.
    pub fn try_surface_to_logical(&self, point: Point) -> Result<Point, InvalidTransform> {
        match self.matrix().try_inverse() {
            Some(inverse) => Ok(inverse.transform_point(point)),
            None => Err(InvalidTransform {
                determinant: self.matrix().determinant(),
            }),
        }
    }

    /// Maps a pointer event straight to logical coordinates; the standard
    /// entry point for pointer and wheel handlers.
    pub fn pointer_to_logical(&self, event: &PointerEvent) -> Point {
        self.surface_to_logical(self.device_to_surface(event))
    }

    /// Strict variant of [`pointer_to_logical`](Camera::pointer_to_logical).
    pub fn try_pointer_to_logical(&self, event: &PointerEvent) -> Result<Point, InvalidTransform> {
        self.try_surface_to_logical(self.device_to_surface(event))
    }

    pub(crate) fn inverse_or_identity(&self) -> Affine {
        self.matrix().try_inverse().unwrap_or_else(|| {
            log::warn!(
                "transform matrix is not invertible (determinant {}), mapping through identity",
                self.matrix().determinant()
            );
            Affine::IDENTITY
        })
    }
}
