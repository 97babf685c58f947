use super::{Grid, RadialProfile};
use crate::domain::QuantumNumbers;
use serde::Serialize;

/// Render-ready surface for one harmonic. Every grid shares one shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SurfaceField {
    pub quantum_numbers: QuantumNumbers,
    pub profile: RadialProfile,
    pub x: Grid,
    pub y: Grid,
    pub z: Grid,
    /// Real part of the harmonic, independent of the radial profile.
    pub color: Grid,
    pub radius: Grid,
    pub theta: Grid,
    pub phi: Grid,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfacePoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub color: f64,
    pub radius: f64,
    pub theta: f64,
    pub phi: f64,
}

impl SurfaceField {
    pub const fn shape(&self) -> (usize, usize) {
        self.theta.shape()
    }

    pub fn len(&self) -> usize {
        self.theta.len()
    }

    pub fn is_empty(&self) -> bool {
        self.theta.is_empty()
    }

    pub fn grids(&self) -> [(&'static str, &Grid); 7] {
        [
            ("x", &self.x),
            ("y", &self.y),
            ("z", &self.z),
            ("color", &self.color),
            ("radius", &self.radius),
            ("theta", &self.theta),
            ("phi", &self.phi),
        ]
    }

    /// Flattened samples in row-major order, as scatter plots consume them.
    pub fn points(&self) -> impl Iterator<Item = SurfacePoint> + '_ {
        (0..self.len()).map(move |index| SurfacePoint {
            x: self.x.values()[index],
            y: self.y.values()[index],
            z: self.z.values()[index],
            color: self.color.values()[index],
            radius: self.radius.values()[index],
            theta: self.theta.values()[index],
            phi: self.phi.values()[index],
        })
    }
}
