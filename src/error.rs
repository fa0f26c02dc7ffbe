use thiserror::Error;

/// The current matrix cannot be inverted, so surface coordinates cannot be
/// mapped back to logical coordinates.
///
/// Only the strict mapping variants return this; the infallible mappers
/// substitute the identity inverse instead.
#[derive(Debug, Copy, Clone, PartialEq, Error)]
#[error("transform matrix is not invertible (determinant {determinant})")]
pub struct InvalidTransform {
    pub determinant: f64,
}
