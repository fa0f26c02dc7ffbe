/// Primitive operations a drawing surface must expose for a
/// [`Camera`](crate::Camera) to drive it.
///
/// Every transform mutation on the camera is forwarded through this trait
/// with identical arguments, keeping the surface's native transform in
/// lockstep with the camera's matrix. The camera is meant to be the sole
/// writer of the surface's transform state; mutating it behind the camera's
/// back desynchronizes the two.
///
/// Angles are radians throughout. Implementations whose backend expects
/// another unit (CSS `DOMMatrix` wants degrees, for instance) convert inside
/// [`rotate`](DrawSurface::rotate).
pub trait DrawSurface {
    fn save(&mut self);
    fn restore(&mut self);
    fn scale(&mut self, x: f64, y: f64);
    fn rotate(&mut self, radians: f64);
    fn translate(&mut self, x: f64, y: f64);
    fn set_transform(&mut self, a: f64, b: f64, c: f64, d: f64, e: f64, f: f64);
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    /// Pixel width of the drawable area.
    fn width(&self) -> f64;
    /// Pixel height of the drawable area.
    fn height(&self) -> f64;
    /// Horizontal offset of the surface's left edge on the page/screen.
    fn offset_left(&self) -> f64;
    /// Vertical offset of the surface's top edge on the page/screen.
    fn offset_top(&self) -> f64;
}

impl<S: DrawSurface + ?Sized> DrawSurface for &mut S {
    fn save(&mut self) {
        (**self).save();
    }

    fn restore(&mut self) {
        (**self).restore();
    }

    fn scale(&mut self, x: f64, y: f64) {
        (**self).scale(x, y);
    }

    fn rotate(&mut self, radians: f64) {
        (**self).rotate(radians);
    }

    fn translate(&mut self, x: f64, y: f64) {
        (**self).translate(x, y);
    }

    fn set_transform(&mut self, a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) {
        (**self).set_transform(a, b, c, d, e, f);
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        (**self).clear_rect(x, y, width, height);
    }

    fn width(&self) -> f64 {
        (**self).width()
    }

    fn height(&self) -> f64 {
        (**self).height()
    }

    fn offset_left(&self) -> f64 {
        (**self).offset_left()
    }

    fn offset_top(&self) -> f64 {
        (**self).offset_top()
    }
}
