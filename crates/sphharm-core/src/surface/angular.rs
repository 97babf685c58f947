use super::{Grid, SurfaceError};
use crate::common::constants::{PI, PI2};
use crate::numerics::{linear_grid, periodic_grid};

/// Meshgrid of polar and azimuthal angles.
///
/// Rows index the azimuth `phi` (`2 * resolution` samples over `[0, 2 pi)`),
/// columns index the polar angle `theta` (`resolution` samples over
/// `[0, pi]`), so both grids have shape `(2 * resolution, resolution)`.
#[derive(Debug, Clone, PartialEq)]
pub struct AngularGrid {
    theta: Grid,
    phi: Grid,
}

impl AngularGrid {
    pub fn new(resolution: usize) -> Result<Self, SurfaceError> {
        let invalid = SurfaceError::InvalidResolution { resolution };
        let polar_count = resolution;
        let azimuth_count = resolution.checked_mul(2).ok_or(invalid)?;
        let polar = linear_grid(0.0, PI, polar_count).ok_or(invalid)?;
        let azimuth = periodic_grid(0.0, PI2, azimuth_count).ok_or(invalid)?;

        Ok(Self {
            theta: Grid::from_fn(azimuth.len(), polar.len(), |_, col| polar[col]),
            phi: Grid::from_fn(azimuth.len(), polar.len(), |row, _| azimuth[row]),
        })
    }

    pub fn theta(&self) -> &Grid {
        &self.theta
    }

    pub fn phi(&self) -> &Grid {
        &self.phi
    }

    pub const fn shape(&self) -> (usize, usize) {
        self.theta.shape()
    }

    pub fn into_parts(self) -> (Grid, Grid) {
        (self.theta, self.phi)
    }
}
