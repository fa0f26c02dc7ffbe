mod affine;
mod point;

pub use affine::Affine;
pub use point::Point;
