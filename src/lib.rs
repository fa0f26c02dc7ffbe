//! Pan/zoom transform manager for 2D drawing surfaces.
//!
//! [`Camera`] owns a 2D affine matrix and keeps it mirrored onto an abstract
//! [`DrawSurface`], so interactive pan and zoom never desynchronize from the
//! surface's own transform state. Pointer coordinates are mapped between
//! device space, surface pixel space, and the logical (untransformed) space
//! drawing intent is expressed in.

mod camera;
mod error;
mod event;
mod math;
mod surface;

#[cfg(test)]
pub(crate) mod test_surface;

// Re-export the main public interface
pub use camera::{Camera, PanState, Space, DEFAULT_ZOOM_BASE};
pub use error::InvalidTransform;
pub use event::{PointerEvent, WheelEvent};
pub use math::{Affine, Point};
pub use surface::DrawSurface;
