mod angular;
mod field;
mod generator;
mod grid;
mod scaling;

pub use angular::AngularGrid;
pub use field::{SurfaceField, SurfacePoint};
pub use generator::{SurfaceGenerator, generate_surface, render_surface};
pub use grid::Grid;
pub use scaling::{RadialProfile, compress_magnitude, compressed_radii};

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SurfaceError {
    #[error(
        "invalid quantum numbers Y({degree}, {order}): degree must be >= 0 and |order| <= degree"
    )]
    InvalidQuantumNumbers { degree: i32, order: i32 },
    #[error("invalid resolution {resolution}: expected a positive sample count")]
    InvalidResolution { resolution: usize },
}
