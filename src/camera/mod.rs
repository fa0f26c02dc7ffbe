mod mapping;
mod pan;
mod zoom;

pub use pan::PanState;
pub use zoom::DEFAULT_ZOOM_BASE;

use crate::math::{Affine, Point};
use crate::surface::DrawSurface;

/// Which coordinate space an incoming point is expressed in.
///
/// `Surface` points are run through the inverse of the current matrix before
/// use; `Logical` points are taken as-is.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Space {
    Surface,
    Logical,
}

/// Pan/zoom transform manager over a drawing surface.
///
/// Owns the current affine matrix, the save/restore stack, the pan state
/// machine, and the integer zoom accumulator. Every transform mutation is
/// forwarded to the surface with identical arguments, so the surface's
/// native transform always mirrors [`matrix`](Camera::matrix).
pub struct Camera<S: DrawSurface> {
    surface: S,
    matrix: Affine,
    saved: Vec<Affine>,
    pan: PanState,
    pan_position: Point,
    zoom: i32,
}

impl<S: DrawSurface> Camera<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            matrix: Affine::IDENTITY,
            saved: Vec::new(),
            pan: PanState::Idle,
            pan_position: Point::ZERO,
            zoom: 0,
        }
    }

    /// The current logical-to-surface transform.
    pub fn matrix(&self) -> Affine {
        self.matrix
    }

    /// Accumulated integer zoom level.
    pub fn zoom(&self) -> i32 {
        self.zoom
    }

    pub fn pan_state(&self) -> PanState {
        self.pan
    }

    /// The most recent logical pointer position seen by `move_pan`; also the
    /// default zoom pivot.
    pub fn pan_position(&self) -> Point {
        self.pan_position
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Direct surface access, e.g. for issuing draw calls. Mutating the
    /// surface's transform through this desynchronizes it from the camera.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Pushes a copy of the current matrix and saves the surface state.
    pub fn save(&mut self) {
        self.saved.push(self.matrix);
        self.surface.save();
    }

    /// Pops the most recent snapshot into the current matrix, or the
    /// identity when the stack is empty, and restores the surface state.
    /// Underflow is a defined fallback, not an error.
    pub fn restore(&mut self) {
        self.matrix = self.saved.pop().unwrap_or_else(|| {
            log::debug!("restore on empty transform stack, substituting identity");
            Affine::IDENTITY
        });
        self.surface.restore();
    }

    pub fn scale(&mut self, x: f64, y: f64) {
        self.matrix = self.matrix * Affine::from_scale(x, y);
        self.surface.scale(x, y);
    }

    pub fn rotate(&mut self, radians: f64) {
        self.matrix = self.matrix * Affine::from_rotation(radians);
        self.surface.rotate(radians);
    }

    pub fn translate(&mut self, x: f64, y: f64) {
        self.matrix = self.matrix * Affine::from_translation(x, y);
        self.surface.translate(x, y);
    }

    /// Replaces all six matrix components outright.
    pub fn set_transform(&mut self, a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) {
        self.matrix = Affine::new(a, b, c, d, e, f);
        self.surface.set_transform(a, b, c, d, e, f);
    }

    /// Resets the matrix to the identity transform.
    pub fn reset(&mut self) {
        self.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
    }

    /// Clears exactly the logical rectangle currently visible, whatever the
    /// pan/zoom state, by inverse-mapping the surface's opposite corners.
    pub fn clear_visible_area(&mut self) {
        let p1 = self.surface_to_logical(Point::ZERO);
        let p2 = self.surface_to_logical(Point::new(self.surface.width(), self.surface.height()));
        self.surface
            .clear_rect(p1.x, p1.y, p2.x - p1.x, p2.y - p1.y);
    }
}
