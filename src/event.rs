use crate::math::Point;

/// The pieces of a pointer event the camera needs.
///
/// Hosts that report surface-local coordinates directly (browser `offsetX`/
/// `offsetY`, winit window positions on a full-window surface) fill in
/// `offset`; otherwise the camera derives surface coordinates from `page`
/// and the surface's own page offset.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerEvent {
    /// Pointer position relative to the surface's top-left corner, when the
    /// host reports one.
    pub offset: Option<Point>,
    /// Pointer position relative to the page/screen origin.
    pub page: Point,
}

impl PointerEvent {
    /// Event carrying a surface-local position.
    pub fn from_offset(position: impl Into<Point>) -> Self {
        let position = position.into();
        Self {
            offset: Some(position),
            page: position,
        }
    }

    /// Event carrying only a page/screen position.
    pub fn from_page(position: impl Into<Point>) -> Self {
        Self {
            offset: None,
            page: position.into(),
        }
    }
}

/// A wheel event: pointer position plus the vertical scroll delta.
///
/// `delta_y` follows pointer conventions: positive means scrolling down
/// (zoom out), negative means scrolling up (zoom in).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct WheelEvent {
    pub position: PointerEvent,
    pub delta_y: f64,
}

impl WheelEvent {
    pub fn new(position: PointerEvent, delta_y: f64) -> Self {
        Self { position, delta_y }
    }
}
