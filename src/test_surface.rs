//! Test double for [`DrawSurface`]: records every forwarded call and keeps
//! its own mirror of the transform, so tests can assert that the camera and
//! the surface never diverge.

use crate::math::Affine;
use crate::surface::DrawSurface;

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum SurfaceCall {
    Save,
    Restore,
    Scale(f64, f64),
    Rotate(f64),
    Translate(f64, f64),
    SetTransform([f64; 6]),
    ClearRect(f64, f64, f64, f64),
}

pub(crate) struct RecordingSurface {
    pub calls: Vec<SurfaceCall>,
    pub transform: Affine,
    pub saved: Vec<Affine>,
    pub width: f64,
    pub height: f64,
    pub offset_left: f64,
    pub offset_top: f64,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64, offset_left: f64, offset_top: f64) -> Self {
        Self {
            calls: Vec::new(),
            transform: Affine::IDENTITY,
            saved: Vec::new(),
            width,
            height,
            offset_left,
            offset_top,
        }
    }
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new(800.0, 600.0, 0.0, 0.0)
    }
}

impl DrawSurface for RecordingSurface {
    fn save(&mut self) {
        self.calls.push(SurfaceCall::Save);
        self.saved.push(self.transform);
    }

    fn restore(&mut self) {
        self.calls.push(SurfaceCall::Restore);
        self.transform = self.saved.pop().unwrap_or(Affine::IDENTITY);
    }

    fn scale(&mut self, x: f64, y: f64) {
        self.calls.push(SurfaceCall::Scale(x, y));
        self.transform = self.transform * Affine::from_scale(x, y);
    }

    fn rotate(&mut self, radians: f64) {
        self.calls.push(SurfaceCall::Rotate(radians));
        self.transform = self.transform * Affine::from_rotation(radians);
    }

    fn translate(&mut self, x: f64, y: f64) {
        self.calls.push(SurfaceCall::Translate(x, y));
        self.transform = self.transform * Affine::from_translation(x, y);
    }

    fn set_transform(&mut self, a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) {
        self.calls.push(SurfaceCall::SetTransform([a, b, c, d, e, f]));
        self.transform = Affine::new(a, b, c, d, e, f);
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.calls.push(SurfaceCall::ClearRect(x, y, width, height));
    }

    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn offset_left(&self) -> f64 {
        self.offset_left
    }

    fn offset_top(&self) -> f64 {
        self.offset_top
    }
}
